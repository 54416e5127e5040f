use serde::Serialize;
use std::fmt;

/// Number of rows in a log table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Count(usize);

impl Count {
    pub fn new(value: usize) -> Self {
        Count(value)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Count {
    fn from(value: usize) -> Self {
        Count(value)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output format of the total line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Constants
pub mod constants {
    /// Log file read when no path is given
    pub const DEFAULT_LOG_PATH: &str = "data/app_logs.csv";
    pub const DEFAULT_DELIMITER: u8 = b',';
    pub const DEFAULT_QUOTE: u8 = b'"';

    pub const BINARY_SCAN_BYTES: usize = 1024;
    pub const BINARY_UNPRINTABLE_PERCENT: usize = 20;

    /// Prefix given to empty header fields, followed by the column position
    pub const UNNAMED_COLUMN_PREFIX: &str = "Unnamed: ";
}
