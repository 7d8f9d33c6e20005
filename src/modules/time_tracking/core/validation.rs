// Explicit input validation. Each check returns the cleaned value or a
// FieldError; use cases collect them into ValidationErrors.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use serde_json::Value;

pub const MIN_DESCRIPTION_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", summarize(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates field errors so every problem is reported at once.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.push(error);
                None
            }
        }
    }

    /// `value` is assembled from the `check` results, so it is `Some` exactly
    /// when nothing failed.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationErrors {
                errors: self.errors,
            }),
        }
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

pub fn required_text(field: &'static str, raw: Option<&str>) -> Result<String, FieldError> {
    match raw.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(FieldError::new(field, "is required")),
    }
}

/// Trimmed description of at least [`MIN_DESCRIPTION_CHARS`] characters.
pub fn long_description(field: &'static str, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "is required"));
    }
    if trimmed.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(FieldError::new(
            field,
            format!("must be at least {MIN_DESCRIPTION_CHARS} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Session descriptions are optional; a blank one counts as omitted.
pub fn optional_session_description(raw: Option<&str>) -> Result<Option<String>, FieldError> {
    match raw {
        Some(text) if !text.trim().is_empty() => long_description("description", text).map(Some),
        _ => Ok(None),
    }
}

/// Upper bound for a single manual entry: one full day.
pub const MAX_ENTRY_MINUTES: i64 = 24 * 60;

/// Accepts a JSON integer or a numeric string in `1..=MAX_ENTRY_MINUTES`.
pub fn positive_minutes(field: &'static str, raw: &Value) -> Result<i64, FieldError> {
    let invalid = || FieldError::new(field, "must be a positive integer");
    let minutes = match raw {
        Value::Number(number) => number.as_i64().ok_or_else(invalid)?,
        Value::String(text) => text.trim().parse::<i64>().map_err(|_| invalid())?,
        Value::Null => return Err(FieldError::new(field, "is required")),
        _ => return Err(invalid()),
    };
    if minutes <= 0 {
        return Err(invalid());
    }
    if minutes > MAX_ENTRY_MINUTES {
        return Err(FieldError::new(field, "must be at most 1440 minutes"));
    }
    Ok(minutes)
}

/// `YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its date.
pub fn entry_date(field: &'static str, raw: &str) -> Result<NaiveDate, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "is required"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| FieldError::new(field, "must be a date formatted as YYYY-MM-DD"))
}
