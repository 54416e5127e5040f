//! In-memory table of a loaded log file.

use crate::types::constants::UNNAMED_COLUMN_PREFIX;
use std::collections::{HashMap, HashSet};

/// Rows of a log file keyed by the header's column names.
///
/// Every row holds exactly one value slot per column. Empty fields and fields
/// missing from short rows are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl LogTable {
    /// Table with no columns and no rows, the result of loading a file
    /// without data.
    pub fn empty() -> Self {
        LogTable::default()
    }

    /// Build a table from raw header fields and data rows.
    /// Header names are normalized and rows are padded to the header width.
    pub(crate) fn from_raw(header: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let columns = normalize_columns(header);
        let width = columns.len();

        let rows = rows
            .into_iter()
            .map(|mut row| {
                debug_assert!(row.len() <= width, "row wider than header");
                row.resize(width, None);
                row
            })
            .collect();

        LogTable { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.rows.iter().map(move |values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// All values of a column in row order
    pub fn column(&self, column: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(column)?;
        Some(self.rows.iter().map(|r| r[idx].as_deref()).collect())
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}

/// Borrowed view of a single row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [Option<String>],
}

impl<'a> Row<'a> {
    /// Value of the named column, `None` for unknown columns and empty fields
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let values = self.values;
        let idx = self.columns.iter().position(|c| c == column)?;
        values[idx].as_deref()
    }

    pub fn values(&self) -> &'a [Option<String>] {
        self.values
    }

    /// Column name and value pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + 'a {
        let (columns, values) = (self.columns, self.values);
        columns
            .iter()
            .zip(values.iter())
            .map(|(c, v)| (c.as_str(), v.as_deref()))
    }
}

/// Name empty header fields after their position and suffix repeated names
/// with `.1`, `.2`, ... skipping any suffixed name already in use.
fn normalize_columns(header: Vec<String>) -> Vec<String> {
    let named: Vec<String> = header
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            if name.is_empty() {
                format!("{}{}", UNNAMED_COLUMN_PREFIX, i)
            } else {
                name
            }
        })
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();
    let mut columns = Vec::with_capacity(named.len());

    for name in named {
        let mut candidate = name.clone();
        let mut suffix = counts.get(&name).copied().unwrap_or(0);
        while taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}.{}", name, suffix);
        }
        counts.insert(name, suffix);
        taken.insert(candidate.clone());
        columns.push(candidate);
    }

    columns
}
