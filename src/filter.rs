//! The line-by-line report filtering pass
//!
//! Reads report paths one per line, classifies each referenced document,
//! and re-emits the lines whose report carries at least one error or
//! failure. Strictly sequential: a line is fully handled before the next
//! is read, and output order matches input order.

use crate::report::SuiteSummary;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

/// Counters for one filtering run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    /// Lines consumed from the input sources
    pub lines: u64,
    /// Lines re-emitted because their report was failing
    pub failing: u64,
}

/// Run the filtering pass from `input` to `output`.
///
/// Each line is stripped of trailing whitespace to obtain the report
/// path; the original line, terminator included, is what gets written
/// when the report is failing. The first I/O, XML, or count-conversion
/// error aborts the run; lines already written stay written.
pub fn filter_lines<R, W>(input: &mut R, output: &mut W) -> Result<FilterSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = FilterSummary::default();
    let mut line = String::new();
    loop {
        line.clear();
        let read = input
            .read_line(&mut line)
            .context("failed to read input line")?;
        if read == 0 {
            break;
        }
        summary.lines += 1;

        let path = line.trim_end();
        if path.is_empty() {
            tracing::debug!("skipping blank input line {}", summary.lines);
            continue;
        }

        let report = SuiteSummary::from_file(Path::new(path))?;
        if report.is_failing() {
            tracing::debug!(
                "{}: errors={:?} failures={:?} -> failing",
                path,
                report.errors,
                report.failures
            );
            output
                .write_all(line.as_bytes())
                .context("failed to write output line")?;
            summary.failing += 1;
        } else {
            tracing::trace!("{}: passing", path);
        }
    }
    Ok(summary)
}
