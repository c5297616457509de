//! String format detection

use super::types::StringFormat;
use crate::config::FormatDetection;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// Literal `YYYY-MM-DD`, whole string
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Literal `YYYY-MM-DDTHH:MM:SS`, prefix only
static DATETIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").unwrap());

/// Detect the format of a string value.
///
/// Detectors run in a fixed order and the first match wins:
/// uri, email, date, date-time. Disabled detectors are skipped.
pub fn detect_format(s: &str, detection: &FormatDetection) -> Option<StringFormat> {
    if detection.uri && is_uri(s) {
        Some(StringFormat::Uri)
    } else if detection.email && is_email(s) {
        Some(StringFormat::Email)
    } else if detection.date && is_date(s) {
        Some(StringFormat::Date)
    } else if detection.date_time && is_datetime(s) {
        Some(StringFormat::DateTime)
    } else {
        None
    }
}

/// Absolute URI with a scheme
pub fn is_uri(s: &str) -> bool {
    url::Url::parse(s).is_ok()
}

pub fn is_email(s: &str) -> bool {
    s.contains('@') && s.contains('.')
}

/// `YYYY-MM-DD` naming a real calendar day
pub fn is_date(s: &str) -> bool {
    DATE_REGEX.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// `YYYY-MM-DDTHH:MM:SS` prefix that parses either as RFC 3339 or as a
/// local date-time with optional fractional seconds
pub fn is_datetime(s: &str) -> bool {
    DATETIME_REGEX.is_match(s)
        && (DateTime::parse_from_rfc3339(s).is_ok()
            || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok())
}
