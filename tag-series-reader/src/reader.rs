//! Windowed tag file reading
//!
//! [`TagFileReader`] scans one tag's history file line by line, keeping the
//! rows whose timestamps fall inside a closed window and converting each
//! value into base units. [`MultiTagReader`] fans that out across an ordered
//! list of tags and returns one series per tag, index-aligned with the
//! input, ready to hand to a multi-tag aligner.
//!
//! # Ordering precondition
//!
//! Files are assumed to be in non-decreasing timestamp order. The scan stops
//! at the first row past the window's upper bound without looking at the
//! rest of the file; on an unsorted file, rows after that point are silently
//! dropped even if they would fall inside the window. This is a deliberate
//! trade-off for chronological historian exports, not a bug to fix here.

use crate::config::{ReaderConfig, ValuePolicy};
use crate::fields::{parse_decimal, split_fields};
use crate::time::parse_timestamp;
use crate::types::{MultiTagResult, ReaderError, Result, TagSpec, TimeSeries, TimeWindow};
use crate::units;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Suffix appended to every tag's source path before opening it
pub const SOURCE_EXTENSION: &str = ".csv";

/// Reads a single tag's history file, restricted to a time window
#[derive(Debug, Clone, Copy, Default)]
pub struct TagFileReader {
    config: ReaderConfig,
}

impl TagFileReader {
    /// Create a reader with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with an explicit configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read one tag file, keeping rows whose timestamps fall in `window`.
    ///
    /// Each line is split on the configured delimiter; field 0 is the
    /// timestamp (`dd.mm.yyyy HH:MM:SS`), field 1 the value (decimal
    /// separator per configuration), converted through the unit table with
    /// `unit_instruction`. Rows before the window are skipped; the first row
    /// past it stops the scan (see the module docs for the ordering
    /// precondition).
    ///
    /// An in-window row with fewer than two fields fails with
    /// [`ReaderError::MalformedRow`]. A short row wholly before the window
    /// is skipped without touching its value field.
    pub fn read(
        &self,
        path: &Path,
        unit_instruction: &str,
        window: TimeWindow,
    ) -> Result<TimeSeries> {
        log::info!("Reading tag file: {:?}", path);

        let file = File::open(path).map_err(|source| ReaderError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut series = TimeSeries::new();
        let mut skipped = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            let fields = split_fields(&line, self.config.field_delimiter);
            let stamp = parse_timestamp(fields[0])?;

            if stamp < window.from {
                skipped += 1;
                continue;
            }
            if stamp > window.to {
                // ascending-order precondition: nothing after this row can
                // be in the window
                log::debug!("Stopping scan at line {}: past window end", line_number);
                break;
            }

            if fields.len() < 2 {
                return Err(ReaderError::MalformedRow {
                    line: line_number,
                    found: fields.len(),
                });
            }

            let value = match parse_decimal(fields[1], self.config.decimal_separator) {
                Some(v) => v,
                None => match self.config.value_policy {
                    ValuePolicy::Legacy => {
                        log::warn!(
                            "Non-numeric value {:?} at {:?}:{}, reading as 0.0",
                            fields[1],
                            path,
                            line_number
                        );
                        0.0
                    }
                    ValuePolicy::Strict => {
                        return Err(ReaderError::InvalidValue {
                            line: line_number,
                            text: fields[1].to_string(),
                        })
                    }
                },
            };

            series.push(stamp, units::convert(value, unit_instruction));
        }

        log::debug!(
            "Read {} rows from {:?} ({} before window)",
            series.len(),
            path,
            skipped
        );
        Ok(series)
    }

    /// Convenience overload: window bounds as `dd.mm.yyyy HH:MM:SS` strings
    pub fn read_between(
        &self,
        path: &Path,
        unit_instruction: &str,
        from: &str,
        to: &str,
    ) -> Result<TimeSeries> {
        let window = TimeWindow::new(parse_timestamp(from)?, parse_timestamp(to)?);
        self.read(path, unit_instruction, window)
    }
}

/// Reads an ordered list of tags and returns their series in input order
pub struct MultiTagReader {
    specs: Vec<TagSpec>,
    reader: TagFileReader,
}

impl MultiTagReader {
    /// Create a multi-tag reader over an ordered list of tag specifications
    pub fn new(specs: Vec<TagSpec>) -> Self {
        Self {
            specs,
            reader: TagFileReader::new(),
        }
    }

    /// Create a multi-tag reader with an explicit file configuration
    pub fn with_config(specs: Vec<TagSpec>, config: ReaderConfig) -> Self {
        Self {
            specs,
            reader: TagFileReader::with_config(config),
        }
    }

    /// The tag specifications this reader fans out over
    pub fn specs(&self) -> &[TagSpec] {
        &self.specs
    }

    /// Read every tag for the given window, in input order.
    ///
    /// Appends the fixed `.csv` suffix to each source path before opening.
    /// The result is index-aligned with the spec list, so callers can zip
    /// tag names back onto series. The first failing tag aborts the whole
    /// read; there is no partial-result mode.
    pub fn read_all(&self, window: TimeWindow) -> Result<MultiTagResult> {
        log::info!("Reading {} tag files", self.specs.len());

        let mut result = MultiTagResult::with_capacity(self.specs.len());
        for spec in &self.specs {
            let path = format!("{}{}", spec.source_path, SOURCE_EXTENSION);
            let series = self
                .reader
                .read(Path::new(&path), &spec.unit_instruction, window)?;
            result.push(series);
        }

        Ok(result)
    }

    /// Convenience overload: window bounds as `dd.mm.yyyy HH:MM:SS` strings
    pub fn read_all_between(&self, from: &str, to: &str) -> Result<MultiTagResult> {
        let window = TimeWindow::new(parse_timestamp(from)?, parse_timestamp(to)?);
        self.read_all(window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let reader = TagFileReader::new();
        let result = reader.read(Path::new("no-such-tag.csv"), "", TimeWindow::ALL);
        assert!(matches!(result, Err(ReaderError::FileNotFound { .. })));
    }

    #[test]
    fn test_missing_file_aborts_multi_read() {
        let specs = vec![TagSpec::new("no-such-tag", "m3/s")];
        let result = MultiTagReader::new(specs).read_all(TimeWindow::ALL);
        assert!(matches!(result, Err(ReaderError::FileNotFound { .. })));
    }

    #[test]
    fn test_bad_window_bound_string() {
        let reader = MultiTagReader::new(vec![]);
        let result = reader.read_all_between("not a time", "01.08.2021 00:00:00");
        assert!(matches!(result, Err(ReaderError::FormatError { .. })));
    }
}
