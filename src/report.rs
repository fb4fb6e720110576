//! Report snapshot and its text, JSON and CSV renderings
//!
//! A `Report` is an owned copy of the accumulator taken under the tracker's
//! lock. Files appear in lexical order; ranges within a file are sorted by
//! accumulated time, slowest first.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::interval::{IntervalStats, LineRange};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;

/// Accumulated time for one line range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeReport {
    pub start: u32,
    pub end: u32,
    /// Accumulated wall-clock time in seconds
    pub seconds: f64,
    /// Number of intervals summed into `seconds`
    pub hits: u64,
}

/// All ranges recorded under one source identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub ranges: Vec<RangeReport>,
}

/// Snapshot of every accumulated interval
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub files: Vec<FileReport>,
}

impl FileReport {
    /// Build a file block with ranges sorted by total time (descending)
    ///
    /// Ties keep ascending range order so output is stable between runs.
    pub fn from_ranges(
        file: impl Into<String>,
        ranges: &HashMap<LineRange, IntervalStats>,
    ) -> Self {
        let mut sorted: Vec<_> = ranges.iter().collect();
        sorted.sort_by(|a, b| b.1.total.cmp(&a.1.total).then_with(|| a.0.cmp(b.0)));

        Self {
            file: file.into(),
            ranges: sorted
                .into_iter()
                .map(|(range, stats)| RangeReport {
                    start: range.start,
                    end: range.end,
                    seconds: stats.seconds(),
                    hits: stats.hits,
                })
                .collect(),
        }
    }
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write the plain text report
    ///
    /// ```text
    /// File: src/main.rs
    /// Lines 10 to 50: 0.05
    /// Lines 5 to 10: 0.002
    /// ```
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        for file in &self.files {
            writeln!(out, "File: {}", file.file)?;
            for range in &file.ranges {
                writeln!(
                    out,
                    "Lines {} to {}: {}",
                    range.start, range.end, range.seconds
                )?;
            }
        }
        Ok(())
    }

    /// Plain text report as a string
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_text(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Pretty-printed JSON report
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// CSV report with one row per range, in report order
    pub fn to_csv(&self) -> String {
        let mut output = String::from("file,start,end,seconds,hits\n");
        for file in &self.files {
            let name = escape_field(&file.file);
            for range in &file.ranges {
                output.push_str(&format!(
                    "{},{},{},{},{}\n",
                    name, range.start, range.end, range.seconds, range.hits
                ));
            }
        }
        output
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
            OutputFormat::Csv => Ok(self.to_csv()),
        }
    }
}

/// Quote a CSV field containing a comma, quote or newline
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
