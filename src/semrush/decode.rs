// src/semrush/decode.rs
// Decoder for Semrush's semicolon-delimited report bodies

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Field delimiter used by every delimited report
pub const FIELD_DELIMITER: char = ';';

/// In-band error line: `ERROR :: ...` or the numbered `ERROR 50 :: ...` form
static ERROR_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ERROR(?:\s+\d+)?\s*::\s*(.*)$").expect("valid regex"));

/// Why a body could not be turned into records.
///
/// Callers see the same error family for all of these; the kind is kept for
/// diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Nothing left after trimming
    Empty,
    /// A single `ERROR :: ` line sent by the API
    Upstream,
    /// A single line without any delimiter
    InvalidHeader,
    /// A header line with no data rows
    HeadersOnly,
    /// A non-2xx HTTP response
    HttpStatus,
}

/// A body that could not be decoded, or an error reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub message: String,
    /// Columns the report would have had, when a header line was present
    pub expected_headers: Option<Vec<String>>,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            expected_headers: None,
        }
    }

    pub fn with_expected_headers(mut self, headers: Vec<String>) -> Self {
        self.expected_headers = Some(headers);
        self
    }
}

/// One data row keyed by the header line of its batch.
///
/// Fields keep header order; every record of a batch has the same keys. A
/// repeated header keeps its first position and its last value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flat JSON object in header order
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields: Vec<(String, String)> = Vec::new();
        for (name, value) in iter {
            let (name, value) = (name.into(), value.into());
            match fields.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, slot)) => *slot = value,
                None => fields.push((name, value)),
            }
        }
        Self { fields }
    }
}

/// Returns the text after `::` when `line` is an upstream error line
pub fn error_line_message(line: &str) -> Option<&str> {
    ERROR_LINE_RE
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Whether `line` follows the upstream's in-band error convention
pub fn is_error_line(line: &str) -> bool {
    ERROR_LINE_RE.is_match(line.trim())
}

/// Decode a delimited report body into records.
///
/// Never panics; every malformed shape maps to a [`DecodeError`].
pub fn decode(text: &str) -> Result<Vec<Record>, DecodeError> {
    let lines: Vec<&str> = text
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((header_line, data_lines)) = lines.split_first() else {
        return Err(DecodeError::new(
            DecodeErrorKind::Empty,
            "Empty response from API (nothing left after trimming)",
        ));
    };

    if data_lines.is_empty() {
        if is_error_line(header_line) {
            return Err(DecodeError::new(DecodeErrorKind::Upstream, *header_line));
        }
        if !header_line.contains(FIELD_DELIMITER) {
            return Err(DecodeError::new(
                DecodeErrorKind::InvalidHeader,
                "No data rows or invalid header in API response",
            ));
        }
    }

    let headers: Vec<String> = header_line
        .split(FIELD_DELIMITER)
        .map(|h| h.trim().to_string())
        .collect();

    if data_lines.is_empty() {
        return Err(DecodeError::new(
            DecodeErrorKind::HeadersOnly,
            "No data results, only headers returned",
        )
        .with_expected_headers(headers));
    }

    let records: Vec<Record> = data_lines
        .iter()
        .map(|line| {
            let mut cells = line.split(FIELD_DELIMITER).map(str::trim);
            headers
                .iter()
                .map(|header| (header.clone(), cells.next().unwrap_or("").to_string()))
                .collect::<Record>()
        })
        .collect();

    Ok(records)
}
