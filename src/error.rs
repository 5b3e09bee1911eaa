// src/error.rs
// Error types for the Semrush MCP server

use thiserror::Error;

/// Main error type for the library.
///
/// Upstream and decode failures are not represented here: those are values
/// (`ToolResult::Error`) that get rendered for the caller.
#[derive(Error, Debug)]
pub enum SemrushError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{field}: {message}")]
    InvalidArgument { field: String, message: String },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Convenience type alias for Result using SemrushError
pub type Result<T> = std::result::Result<T, SemrushError>;

impl SemrushError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        SemrushError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Argument errors are the caller's fault and are logged at debug level
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            SemrushError::InvalidArgument { .. } | SemrushError::UnknownTool(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = SemrushError::Config("SEMRUSH_API_KEY is not set".to_string());
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("SEMRUSH_API_KEY"));
    }

    #[test]
    fn test_invalid_argument_names_field() {
        let err = SemrushError::invalid_argument("limit", "must be between 1 and 10000");
        assert_eq!(err.to_string(), "limit: must be between 1 and 10000");
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_unknown_tool() {
        let err = SemrushError::UnknownTool("nope".to_string());
        assert_eq!(err.to_string(), "unknown tool: nope");
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_config_is_not_caller_error() {
        let err = SemrushError::Config("missing".to_string());
        assert!(!err.is_caller_error());
    }
}
