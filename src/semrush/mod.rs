// src/semrush/mod.rs
// Semrush API surfaces, report requests and tool results

pub mod client;
pub mod decode;

pub use client::SemrushClient;
pub use decode::{decode, DecodeError, DecodeErrorKind, Record};

use std::collections::BTreeMap;

/// The two independently versioned Semrush endpoint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVariant {
    /// Standard reports served from the API root
    Legacy,
    /// Backlink reports served from `/analytics/v1/`
    AnalyticsV1,
}

impl ApiVariant {
    /// Path appended to the API root
    pub fn path(self) -> &'static str {
        match self {
            ApiVariant::Legacy => "/",
            ApiVariant::AnalyticsV1 => "/analytics/v1/",
        }
    }

    /// Query field carrying the report identifier
    pub fn report_field(self) -> &'static str {
        match self {
            ApiVariant::Legacy => "type",
            ApiVariant::AnalyticsV1 => "report_type",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ApiVariant::Legacy => "legacy",
            ApiVariant::AnalyticsV1 => "analytics_v1",
        }
    }
}

impl std::fmt::Display for ApiVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Report-specific query parameters, already validated by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportParams(BTreeMap<String, String>);

impl ReportParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One report call: which report, against which surface, with which parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub report: String,
    pub params: ReportParams,
    pub variant: ApiVariant,
}

impl ReportRequest {
    pub fn new(report: impl Into<String>, params: ReportParams, variant: ApiVariant) -> Self {
        Self {
            report: report.into(),
            params,
            variant,
        }
    }
}

/// Everything the invoker can hand to the presenter
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResult {
    Records(Vec<Record>),
    Error(DecodeError),
    Json(serde_json::Value),
    /// Plain text passed through as-is; no current response path produces it
    Text(String),
}

impl ToolResult {
    pub fn is_error(&self) -> bool {
        matches!(self, ToolResult::Error(_))
    }
}

impl From<Result<Vec<Record>, DecodeError>> for ToolResult {
    fn from(decoded: Result<Vec<Record>, DecodeError>) -> Self {
        match decoded {
            Ok(records) => ToolResult::Records(records),
            Err(err) => ToolResult::Error(err),
        }
    }
}
