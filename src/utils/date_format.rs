use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("unparseable comment date: {0:?}")]
    Unparseable(String),
}

/// Formats a stored ISO-8601 date as `Apr 12, 2024`.
///
/// Month names are always the en-US abbreviations, whatever the runtime locale.
/// Timestamps carrying an offset are converted to UTC first; date-only and
/// offset-less values are taken as UTC.
pub fn format_comment_date(iso: &str) -> Result<String, DateFormatError> {
    let parsed = parse_iso(iso.trim()).ok_or_else(|| DateFormatError::Unparseable(iso.to_string()))?;
    Ok(parsed.format("%b %d, %Y").to_string())
}

fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
