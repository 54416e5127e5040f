use crate::types::{Count, OutputFormat};
use serde::Serialize;

/// JSON form of the total line
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TotalReport {
    pub total_logs: Count,
}

impl TotalReport {
    pub fn new(count: Count) -> Self {
        TotalReport { total_logs: count }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Format the total as a single line without the trailing newline
pub fn render_total(count: Count, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Total logs: {}", count),
        OutputFormat::Json => TotalReport::new(count).to_json(),
    }
}

/// Print the total to stdout
pub fn print_total(count: Count) {
    print_total_as(count, OutputFormat::Text);
}

pub fn print_total_as(count: Count, format: OutputFormat) {
    println!("{}", render_total(count, format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        assert_eq!(render_total(Count::new(3), OutputFormat::Text), "Total logs: 3");
        assert!(render_total(Count::new(0), OutputFormat::Text).contains('0'));
        assert!(render_total(Count::new(5), OutputFormat::Text).contains('5'));
    }

    #[test]
    fn test_render_json() {
        let json = render_total(Count::new(5), OutputFormat::Json);
        assert_eq!(json, "{\"TotalLogs\":5}");
    }
}
