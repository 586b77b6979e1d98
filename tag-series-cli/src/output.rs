//! Result export
//!
//! Serializes a multi-tag read result to JSON (machine consumption) or CSV
//! (eyeballing in a spreadsheet). Export lives in the application layer; the
//! library only ever returns in-memory series.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tag_series_reader::{format_timestamp, TagSpec, TimeSeries};

/// One tag's series as exported to JSON
#[derive(Debug, Serialize)]
struct TagExport<'a> {
    tag: &'a str,
    unit: &'a str,
    samples: usize,
    timestamps: &'a [i64],
    values: &'a [f64],
}

/// Write the result to `path`, or stdout when no path is given
pub fn write_result(
    specs: &[TagSpec],
    result: &[TimeSeries],
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            write_to(specs, result, format, BufWriter::new(file))
        }
        None => write_to(specs, result, format, io::stdout().lock()),
    }
}

fn write_to<W: Write>(
    specs: &[TagSpec],
    result: &[TimeSeries],
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let exports: Vec<TagExport> = specs
                .iter()
                .zip(result)
                .map(|(spec, series)| TagExport {
                    tag: &spec.source_path,
                    unit: &spec.unit_instruction,
                    samples: series.len(),
                    timestamps: &series.timestamps,
                    values: &series.values,
                })
                .collect();
            serde_json::to_writer_pretty(&mut writer, &exports)
                .context("Failed to serialize result to JSON")?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            writeln!(writer, "tag;timestamp;value")?;
            for (spec, series) in specs.iter().zip(result) {
                for (stamp, value) in series.iter() {
                    let text = format_timestamp(stamp)
                        .with_context(|| format!("Unrepresentable timestamp {}", stamp))?;
                    writeln!(writer, "{};{};{}", spec.source_path, text, value)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> (Vec<TagSpec>, Vec<TimeSeries>) {
        let specs = vec![TagSpec::new("data/q", "m3/h-m3/s")];
        let mut series = TimeSeries::new();
        series.push(1627776000, 1.0);
        series.push(1627776060, 2.0);
        (specs, vec![series])
    }

    #[test]
    fn test_csv_export_shape() {
        let (specs, result) = sample_data();
        let mut buf = Vec::new();
        write_to(&specs, &result, OutputFormat::Csv, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "tag;timestamp;value");
        assert_eq!(lines[1], "data/q;01.08.2021 00:00:00;1");
        assert_eq!(lines[2], "data/q;01.08.2021 00:01:00;2");
    }

    #[test]
    fn test_json_export_shape() {
        let (specs, result) = sample_data();
        let mut buf = Vec::new();
        write_to(&specs, &result, OutputFormat::Json, &mut buf).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["tag"], "data/q");
        assert_eq!(parsed[0]["unit"], "m3/h-m3/s");
        assert_eq!(parsed[0]["samples"], 2);
        assert_eq!(parsed[0]["timestamps"][0], 1627776000);
        assert_eq!(parsed[0]["values"][1], 2.0);
    }
}
