//! Field-level validators shared by the DTO factories.
//!
//! Validators push human-readable Spanish messages into a
//! [`ValidationErrors`] accumulator so a single pass reports every
//! violation in the input, not just the first one found.

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime, Utc};
use regex::Regex;
use serde::Serialize;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile"));

static TIME_HH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("time regex must compile"));

/// Accumulated validation failures for one DTO.
///
/// Guaranteed non-empty when returned from a `validate` factory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }

    /// Finish a validation pass: `Ok(value)` when nothing was collected.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

/// Require a non-blank string. Pushes `message` and returns `None` when the
/// field is missing or whitespace-only; otherwise returns the trimmed value.
pub fn required_text(
    errors: &mut ValidationErrors,
    value: Option<&str>,
    message: &str,
) -> Option<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            errors.push(message);
            None
        }
    }
}

/// Normalize an optional string: trimmed, with empty strings treated as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Check an email address against the format regex.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Parse a `YYYY-MM-DD` date, pushing `message` on failure.
pub fn parse_date(
    errors: &mut ValidationErrors,
    value: &str,
    message: &str,
) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(message);
            None
        }
    }
}

/// Parse an `HH:MM` time, pushing `message` on failure.
pub fn parse_time(
    errors: &mut ValidationErrors,
    value: &str,
    message: &str,
) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if !TIME_HH_MM.is_match(trimmed) {
        errors.push(message);
        return None;
    }
    match NaiveTime::parse_from_str(trimmed, "%H:%M") {
        Ok(time) => Some(time),
        Err(_) => {
            errors.push(message);
            None
        }
    }
}

/// Reject dates strictly after today (UTC), pushing `message`.
pub fn not_in_future(errors: &mut ValidationErrors, date: NaiveDate, message: &str) {
    if date > Utc::now().date_naive() {
        errors.push(message);
    }
}

/// Coerce a JSON value into a finite `f64`.
///
/// Accepts numbers and numeric strings; everything else (including NaN and
/// infinities) yields `None`.
pub fn coerce_number(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Check membership in an allowed enum set.
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}
