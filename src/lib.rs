pub mod analyzer;
pub mod config;
pub mod detection;
pub mod error;
pub mod loader;
pub mod logging;
pub mod reporter;
pub mod table;
pub mod types;

pub use analyzer::count_logs;
pub use config::Config;
pub use error::{ErrorKind, LogCountError, ParseError, Result};
pub use loader::{load_logs, LogLoader};
pub use reporter::{print_total, print_total_as, render_total};
pub use table::{LogTable, Row};
pub use types::{Count, OutputFormat};
