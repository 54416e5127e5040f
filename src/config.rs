use crate::error::{LogCountError, Result};
use crate::types::constants::{DEFAULT_DELIMITER, DEFAULT_LOG_PATH, DEFAULT_QUOTE};
use crate::types::OutputFormat;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub filename: PathBuf,
    pub delimiter: u8,
    pub quote: u8,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_LOG_PATH)
    }
}

impl Config {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Config {
            filename: filename.into(),
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            format: OutputFormat::Text,
        }
    }

    /// Set the field delimiter.
    /// Returns an error unless the delimiter is a single ASCII character
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        self.delimiter = dialect_byte(delimiter, "delimiter")?;
        Ok(self)
    }

    /// Set the quote character.
    /// Returns an error unless the quote is a single ASCII character
    pub fn with_quote(mut self, quote: char) -> Result<Self> {
        self.quote = dialect_byte(quote, "quote character")?;
        Ok(self)
    }

    /// Check that the dialect can split records unambiguously
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.quote {
            return Err(LogCountError::Config(
                "delimiter and quote character must differ".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

fn dialect_byte(c: char, what: &str) -> Result<u8> {
    if !c.is_ascii() || c == '\n' || c == '\r' {
        return Err(LogCountError::Config(format!(
            "{} must be a single ASCII character other than a line break, got {:?}",
            what, c
        )));
    }
    Ok(c as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.filename, PathBuf::from("data/app_logs.csv"));
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.quote, b'"');
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_custom_dialect() {
        let config = Config::new("logs.tsv")
            .with_delimiter('\t')
            .unwrap()
            .with_quote('\'')
            .unwrap()
            .with_format(OutputFormat::Json);
        assert_eq!(config.delimiter, b'\t');
        assert_eq!(config.quote, b'\'');
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = Config::default().with_delimiter('§').unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_delimiter_equal_to_quote_rejected() {
        let config = Config::default().with_delimiter('"').unwrap();
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Config);
        assert!(Config::default().with_quote(',').unwrap().validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_line_break_rejected() {
        assert!(Config::default().with_delimiter('\n').is_err());
    }
}
