use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a non-empty log file could not be turned into a table
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("File is binary file")]
    Binary,

    #[error("Could not decode file content: {0}")]
    Encoding(String),

    #[error("Expected {expected} fields in line {line}, saw {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum LogCountError {
    #[error("Could not read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse error category, one per propagated failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileAccess,
    Parse,
    Config,
}

impl LogCountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LogCountError::FileAccess { .. } => ErrorKind::FileAccess,
            LogCountError::Parse(_) => ErrorKind::Parse,
            LogCountError::Config(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LogCountError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LogCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let err = LogCountError::file_access(
            "missing.csv",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.kind(), ErrorKind::FileAccess);
        assert_eq!(
            LogCountError::from(ParseError::Binary).kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            LogCountError::Config("bad".to_string()).kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_error_messages() {
        let err = LogCountError::file_access(
            "data/app_logs.csv",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "Could not read data/app_logs.csv: No such file or directory"
        );

        let err = LogCountError::from(ParseError::FieldCount {
            line: 3,
            expected: 2,
            found: 4,
        });
        assert_eq!(
            err.to_string(),
            "Parse error: Expected 2 fields in line 3, saw 4"
        );
    }
}
