use crate::config::Config;
use crate::detection::{convert_to_utf8, detect_charset, is_binary_data, is_wide};
use crate::error::{LogCountError, ParseError, Result};
use crate::table::LogTable;
use crate::types::constants::{DEFAULT_DELIMITER, DEFAULT_QUOTE};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load a comma separated log file with a header row.
///
/// A file without any data yields [`LogTable::empty`]. Missing or unreadable
/// files and malformed content are errors.
pub fn load_logs<P: AsRef<Path>>(path: P) -> Result<LogTable> {
    LogLoader::default().load(path)
}

/// Outcome of parsing file content
#[derive(Debug)]
pub(crate) enum ParsedContent {
    /// Nothing but blank lines, or no bytes at all
    Empty,
    Records {
        header: StringRecord,
        records: Vec<StringRecord>,
    },
}

/// Loads log files with a given CSV dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLoader {
    delimiter: u8,
    quote: u8,
}

impl Default for LogLoader {
    fn default() -> Self {
        LogLoader::new(DEFAULT_DELIMITER, DEFAULT_QUOTE)
    }
}

impl LogLoader {
    pub fn new(delimiter: u8, quote: u8) -> Self {
        LogLoader { delimiter, quote }
    }

    pub fn from_config(config: &Config) -> Self {
        LogLoader::new(config.delimiter, config.quote)
    }

    /// Read and parse the file at `path` into a table
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<LogTable> {
        let path = path.as_ref();
        let data = read_file(path)?;
        debug!(path = %path.display(), bytes = data.len(), "read log file");

        match self.parse(&data)? {
            ParsedContent::Empty => {
                debug!(path = %path.display(), "log file has no data, using empty table");
                Ok(LogTable::empty())
            }
            ParsedContent::Records { header, records } => {
                let table = build_table(&header, &records);
                debug!(
                    path = %path.display(),
                    rows = table.len(),
                    columns = table.columns().len(),
                    "loaded log table"
                );
                Ok(table)
            }
        }
    }

    /// Parse raw file content.
    /// The first non-blank record is the header; blank lines are skipped.
    pub(crate) fn parse(&self, data: &[u8]) -> std::result::Result<ParsedContent, ParseError> {
        if data.is_empty() {
            return Ok(ParsedContent::Empty);
        }

        let encoding = detect_charset(data);
        if !is_wide(encoding) && is_binary_data(data) {
            return Err(ParseError::Binary);
        }
        debug!(charset = encoding.name(), "detected charset");

        let text = convert_to_utf8(data, encoding)?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut header: Option<StringRecord> = None;
        let mut records = Vec::new();

        let bytes = text.as_bytes();
        let mut line_start = 0;
        let mut record = StringRecord::new();

        while reader.read_record(&mut record)? {
            let line_end = reader.position().byte() as usize;
            let raw = bytes.get(line_start..line_end).unwrap_or_default();
            line_start = line_end;
            if is_blank(raw, &record) {
                continue;
            }

            if let Some(h) = &header {
                if record.len() > h.len() {
                    return Err(ParseError::FieldCount {
                        line: record.position().map(|p| p.line()).unwrap_or(0),
                        expected: h.len(),
                        found: record.len(),
                    });
                }
                records.push(record.clone());
            } else {
                header = Some(record.clone());
            }
        }

        Ok(match header {
            None => ParsedContent::Empty,
            Some(header) => ParsedContent::Records { header, records },
        })
    }
}

/// Read the whole file; the handle is released when this returns
fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| LogCountError::file_access(path, e))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|e| LogCountError::file_access(path, e))?;
    Ok(data)
}

/// A single-field record whose raw bytes, including any skipped empty lines
/// before it, are all whitespace. A quoted empty field is not blank.
fn is_blank(raw: &[u8], record: &StringRecord) -> bool {
    record.len() == 1 && raw.iter().all(u8::is_ascii_whitespace)
}

fn build_table(header: &StringRecord, records: &[StringRecord]) -> LogTable {
    let header = header.iter().map(str::to_string).collect();
    let rows = records
        .iter()
        .map(|record| {
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect()
        })
        .collect();

    LogTable::from_raw(header, rows)
}
