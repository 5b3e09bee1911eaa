// src/semrush/client.rs
// Transport invoker: builds Semrush report requests and classifies responses

use super::decode::{DecodeError, DecodeErrorKind, decode, error_line_message};
use super::{ApiVariant, ReportRequest, ToolResult};
use crate::config::Config;
use crate::error::{Result, SemrushError};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Query field carrying the API credential
pub const KEY_FIELD: &str = "key";

/// Issues report requests against both Semrush surfaces.
///
/// Holds only read-only settings, so one instance can serve any number of
/// concurrent calls.
#[derive(Clone)]
pub struct SemrushClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl SemrushClient {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            http,
        }
    }

    /// Full URL for a surface
    pub fn endpoint(&self, variant: ApiVariant) -> String {
        format!("{}{}", self.base_url, variant.path())
    }

    /// Query parameters in send order: credential, report field, then the
    /// caller's parameters. Caller parameters cannot replace the first two.
    pub fn query(&self, request: &ReportRequest) -> Vec<(String, String)> {
        let report_field = request.variant.report_field();
        let mut query = Vec::with_capacity(request.params.len() + 2);
        query.push((KEY_FIELD.to_string(), self.api_key.clone()));
        query.push((report_field.to_string(), request.report.clone()));

        for (name, value) in request.params.iter() {
            if name == KEY_FIELD || name == report_field {
                warn!(param = name, report = %request.report, "Ignoring reserved query parameter");
                continue;
            }
            query.push((name.to_string(), value.to_string()));
        }
        query
    }

    /// Run one report.
    ///
    /// Only a request that cannot complete at all is an `Err`; error statuses,
    /// `ERROR :: ` bodies and undecodable bodies come back as
    /// [`ToolResult::Error`].
    pub async fn invoke(&self, request: &ReportRequest) -> Result<ToolResult> {
        let url = self.endpoint(request.variant);
        let query = self.query(request);
        let start = Instant::now();

        debug!(
            url = %url,
            variant = %request.variant,
            report = %request.report,
            params = ?redact(&query),
            "Calling Semrush API"
        );

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                // The URL carries the credential in its query string
                let e = e.without_url();
                warn!(url = %url, report = %request.report, error = %e, "Semrush request failed");
                SemrushError::Transport(e)
            })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));

        let body = response
            .text()
            .await
            .map_err(|e| SemrushError::Transport(e.without_url()))?;

        if !status.is_success() {
            warn!(
                url = %url,
                report = %request.report,
                status = %status,
                body = %body,
                "Semrush API returned an error status"
            );
            return Ok(ToolResult::Error(status_error(status, &body)));
        }

        let result = classify_body(&body, is_json);
        info!(
            report = %request.report,
            variant = %request.variant,
            outcome = outcome_label(&result),
            duration_ms = start.elapsed().as_millis() as u64,
            "Semrush report complete"
        );
        Ok(result)
    }
}

/// Error for a non-2xx response, keeping the status code visible.
///
/// Only the first line of the body is checked for an `ERROR :: ` message.
pub fn status_error(status: StatusCode, body: &str) -> DecodeError {
    let detail = body
        .trim()
        .lines()
        .next()
        .and_then(error_line_message)
        .filter(|msg| !msg.is_empty())
        .or_else(|| status.canonical_reason())
        .unwrap_or("Unknown status");
    DecodeError::new(
        DecodeErrorKind::HttpStatus,
        format!(
            "Semrush API request failed with status {}: {}",
            status.as_u16(),
            detail
        ),
    )
}

/// Turn a successful body into a tool result.
///
/// Structured JSON passes through untouched; anything else goes to the
/// delimited-text decoder.
pub fn classify_body(body: &str, is_json: bool) -> ToolResult {
    let trimmed = body.trim_start();
    if is_json || trimmed.starts_with('{') || trimmed.starts_with('[') {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(serde_json::Value::String(text)) => return decode(&text).into(),
            Ok(value) => return ToolResult::Json(value),
            Err(e) => debug!(error = %e, "Body is not JSON, decoding as delimited text"),
        }
    }
    decode(body).into()
}

fn redact(query: &[(String, String)]) -> Vec<(&str, &str)> {
    query
        .iter()
        .map(|(k, v)| {
            if k == KEY_FIELD {
                (k.as_str(), "<redacted>")
            } else {
                (k.as_str(), v.as_str())
            }
        })
        .collect()
}

fn outcome_label(result: &ToolResult) -> &'static str {
    match result {
        ToolResult::Records(_) => "records",
        ToolResult::Error(_) => "error",
        ToolResult::Json(_) => "json",
        ToolResult::Text(_) => "text",
    }
}
