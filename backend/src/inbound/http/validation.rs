//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies use optional fields so a missing value surfaces as a
//! `400` with field details instead of a bare deserialisation failure.

use chrono::{DateTime, NaiveDate};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidDate,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidDate => "invalid_date",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a YYYY-MM-DD date")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidDate.as_str(),
    }))
}

/// Unwrap a required body field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; timestamps keep the date as
/// written, ignoring the offset.
pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|ts| ts.date_naive()))
        .map_err(|_| invalid_date_error(field, value))
}

/// Parse a required date field.
pub(crate) fn parse_required_date(
    value: Option<String>,
    field: FieldName,
) -> Result<NaiveDate, Error> {
    parse_date(&require(value, field)?, field)
}
