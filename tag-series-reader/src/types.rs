//! Core types for the tag series reader library
//!
//! This module defines the data model shared by all reader components:
//! time points and windows, unit conversion rules, tag specifications and
//! the time series the readers emit.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A point in time: integer seconds since the Unix epoch, UTC.
///
/// One-second resolution; no fractional seconds anywhere in the format.
pub type TimePoint = i64;

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReaderError>;

/// A closed time interval `[from, to]` restricting which rows are retained.
///
/// The default window covers the full representable range, i.e. no
/// restriction. `from <= to` is the caller's responsibility; the reader
/// does not validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive lower bound
    pub from: TimePoint,
    /// Inclusive upper bound
    pub to: TimePoint,
}

impl TimeWindow {
    /// The unrestricted window: every representable time point is inside.
    pub const ALL: TimeWindow = TimeWindow {
        from: TimePoint::MIN,
        to: TimePoint::MAX,
    };

    /// Create a window with both bounds inclusive
    pub fn new(from: TimePoint, to: TimePoint) -> Self {
        Self { from, to }
    }

    /// True if `t` lies inside the closed interval
    pub fn contains(&self, t: TimePoint) -> bool {
        self.from <= t && t <= self.to
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::ALL
    }
}

/// An affine unit conversion rule, applied as `value / scale - offset`.
///
/// The identity rule is `(1.0, 0.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRule {
    /// Divisor applied to the raw value
    pub scale: f64,
    /// Subtracted after scaling
    pub offset: f64,
}

impl ConversionRule {
    /// The identity rule: value passes through unchanged
    pub const IDENTITY: ConversionRule = ConversionRule {
        scale: 1.0,
        offset: 0.0,
    };

    /// Apply the rule to a raw value
    pub fn apply(&self, value: f64) -> f64 {
        value / self.scale - self.offset
    }
}

/// One monitored variable: where its history lives and how to convert it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSpec {
    /// Source file path without the `.csv` suffix (appended at read time)
    pub source_path: String,
    /// Unit table key; unknown keys mean "no conversion"
    pub unit_instruction: String,
}

impl TagSpec {
    /// Create a new tag specification
    pub fn new(source_path: impl Into<String>, unit_instruction: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            unit_instruction: unit_instruction.into(),
        }
    }
}

/// An ordered series of `(TimePoint, f64)` samples for one tag.
///
/// Samples are kept in the order encountered in the source file, which the
/// reader assumes is ascending by timestamp. The two vectors are always the
/// same length. Not deduplicated; not validated for strict monotonicity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Sample timestamps, source order
    pub timestamps: Vec<TimePoint>,
    /// Converted sample values, index-aligned with `timestamps`
    pub values: Vec<f64>,
}

impl TimeSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample
    pub fn push(&mut self, timestamp: TimePoint, value: f64) {
        self.timestamps.push(timestamp);
        self.values.push(value);
    }

    /// Number of samples in the series
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True if the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Iterate over `(timestamp, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (TimePoint, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

/// Per-tag series in the same order as the `TagSpec` list that produced them
pub type MultiTagResult = Vec<TimeSeries>;

/// Errors that can occur while reading tag history files
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("Failed to open tag file {path:?}: {source}")]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid timestamp {text:?}: expected dd.mm.yyyy HH:MM:SS")]
    FormatError { text: String },

    #[error("Malformed row at line {line}: expected at least 2 fields, found {found}")]
    MalformedRow { line: usize, found: usize },

    #[error("Non-numeric value {text:?} at line {line}")]
    InvalidValue { line: usize, text: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_contains_closed_bounds() {
        let w = TimeWindow::new(10, 20);
        assert!(w.contains(10));
        assert!(w.contains(20));
        assert!(!w.contains(9));
        assert!(!w.contains(21));
    }

    #[test]
    fn test_default_window_is_unrestricted() {
        let w = TimeWindow::default();
        assert!(w.contains(TimePoint::MIN));
        assert!(w.contains(0));
        assert!(w.contains(TimePoint::MAX));
    }

    #[test]
    fn test_identity_rule() {
        assert_eq!(ConversionRule::IDENTITY.apply(42.5), 42.5);
    }

    #[test]
    fn test_series_push_and_iter() {
        let mut series = TimeSeries::new();
        assert!(series.is_empty());
        series.push(1, 1.5);
        series.push(2, 2.5);
        assert_eq!(series.len(), 2);
        let pairs: Vec<_> = series.iter().collect();
        assert_eq!(pairs, vec![(1, 1.5), (2, 2.5)]);
    }
}
