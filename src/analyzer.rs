use crate::table::LogTable;
use crate::types::Count;

/// Count the rows of a log table
pub fn count_logs(table: &LogTable) -> Count {
    Count::new(table.len())
}
