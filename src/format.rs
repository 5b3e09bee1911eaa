// src/format.rs
// Renders tool results as the text returned to MCP clients

use crate::semrush::{DecodeError, Record, ToolResult};

/// Text for a successful report with no rows
pub const NO_RESULTS: &str = "No results found.";

/// Line placed between rendered records
pub const RECORD_SEPARATOR: &str = "---";

/// Fallback when a value cannot be rendered at all
pub const UNEXPECTED_FORMAT: &str = "Received an unexpected data format from the API.";

/// Render any tool result as text. Never fails.
pub fn present(result: &ToolResult) -> String {
    match result {
        ToolResult::Error(err) => present_error(err),
        ToolResult::Records(records) if records.is_empty() => NO_RESULTS.to_string(),
        ToolResult::Records(records) => present_records(records),
        ToolResult::Json(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| UNEXPECTED_FORMAT.to_string())
        }
        ToolResult::Text(text) => text.clone(),
    }
}

fn present_error(err: &DecodeError) -> String {
    match &err.expected_headers {
        Some(headers) => format!(
            "Error: {} (Expected columns: {})",
            err.message,
            headers.join(", ")
        ),
        None => format!("Error: {}", err.message),
    }
}

fn present_records(records: &[Record]) -> String {
    let separator = format!("\n{RECORD_SEPARATOR}\n");
    records
        .iter()
        .map(|record| {
            serde_json::to_string_pretty(&record.to_json())
                .unwrap_or_else(|_| UNEXPECTED_FORMAT.to_string())
        })
        .collect::<Vec<_>>()
        .join(&separator)
}
