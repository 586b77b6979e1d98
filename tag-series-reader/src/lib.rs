//! Tag Series Reader Library
//!
//! Reads historical scalar measurement data stored as one semicolon-delimited
//! text file per named tag, converts values into base physical units, and
//! restricts the output to a caller-specified time window. The per-tag
//! series it returns are index-aligned with the input tag list, ready for a
//! downstream multi-tag aligner to interpolate/resample across tags.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on reading:
//! - Parses `dd.mm.yyyy HH:MM:SS` timestamps and locale-variable decimals
//! - Applies an affine unit-conversion table keyed by instruction strings
//! - Scans each file once, stopping early past the window's upper bound
//!   (files are assumed ascending by timestamp)
//! - Fans out across an ordered list of tags, aborting on the first failure
//!
//! The library does NOT:
//! - Interpolate, resample, or align series across tags
//! - Stream files larger than memory or read files concurrently
//! - Validate schema beyond the two required fields
//! - Write or export the source format
//!
//! # Example Usage
//!
//! ```no_run
//! use tag_series_reader::{MultiTagReader, TagSpec};
//!
//! let reader = MultiTagReader::new(vec![
//!     TagSpec::new("data/rho_in", "kg/m3"),
//!     TagSpec::new("data/Q_in", "m3/h-m3/s"),
//! ]);
//!
//! let series = reader
//!     .read_all_between("01.08.2021 00:00:00", "01.09.2021 00:00:00")
//!     .unwrap();
//!
//! for (spec, tag) in reader.specs().iter().zip(&series) {
//!     println!("{}: {} samples", spec.source_path, tag.len());
//! }
//! ```

// Public modules
pub mod config;
pub mod fields;
pub mod reader;
pub mod time;
pub mod types;
pub mod units;

// Re-export main types for convenience
pub use config::{ReaderConfig, ValuePolicy};
pub use reader::{MultiTagReader, TagFileReader, SOURCE_EXTENSION};
pub use time::{format_timestamp, parse_timestamp};
pub use types::{
    ConversionRule, MultiTagResult, ReaderError, Result, TagSpec, TimePoint, TimeSeries,
    TimeWindow,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: an empty tag list reads to an empty result
        let reader = MultiTagReader::new(Vec::new());
        let result = reader.read_all(TimeWindow::ALL).unwrap();
        assert!(result.is_empty());
    }
}
