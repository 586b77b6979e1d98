//! Timestamp codec for the historian export format
//!
//! Timestamps in tag files use the fixed pattern `dd.mm.yyyy HH:MM:SS`
//! (zero-padded, UTC). This module converts between that text form and
//! epoch-second [`TimePoint`] values. Round trip holds at one-second
//! resolution: `parse_timestamp(&format_timestamp(t)?) == t`.

use crate::types::{ReaderError, Result, TimePoint};
use chrono::{DateTime, NaiveDateTime, Utc};

/// chrono format string for `dd.mm.yyyy HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Parse a `dd.mm.yyyy HH:MM:SS` timestamp into epoch seconds (UTC).
///
/// Leading/trailing whitespace is tolerated. Returns
/// [`ReaderError::FormatError`] when the text does not match the pattern or
/// encodes an impossible date/time.
pub fn parse_timestamp(text: &str) -> Result<TimePoint> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT)
        .map(|dt| dt.and_utc().timestamp())
        .map_err(|_| ReaderError::FormatError {
            text: text.to_string(),
        })
}

/// Format epoch seconds back into the `dd.mm.yyyy HH:MM:SS` pattern.
///
/// Inverse of [`parse_timestamp`]; provided for diagnostics and round-trip
/// testing. Fails for time points outside chrono's representable range.
pub fn format_timestamp(t: TimePoint) -> Result<String> {
    DateTime::<Utc>::from_timestamp(t, 0)
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .ok_or_else(|| ReaderError::FormatError {
            text: t.to_string(),
        })
}
