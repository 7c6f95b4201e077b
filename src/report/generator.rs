//! Report generation.
//!
//! This module assembles a [`Report`] from the input sequences and renders
//! it either as the four plain text lines or as JSON.

use crate::analysis::summarize;
use crate::models::{NamedSequence, NumericSequence, Report, ReportMetadata};
use anyhow::Result;
use chrono::Utc;
use tracing::debug;

/// Aggregate the numbers and bundle everything needed for output.
///
/// Fails with `EmptySequence` when there are no numbers, since the report
/// always states a maximum.
pub fn build_report(
    numbers: NumericSequence,
    names: NamedSequence,
    source: impl Into<String>,
) -> Result<Report> {
    let summary = summarize(&numbers);
    summary.require_max()?;

    debug!(
        "Aggregated {} numbers: sum={}, max={:?}",
        summary.len, summary.sum, summary.max
    );

    Ok(Report {
        metadata: ReportMetadata {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            source: source.into(),
        },
        numbers,
        names,
        summary,
    })
}

/// Generate the plain text report: numbers, names, sum, maximum.
pub fn generate_text_report(report: &Report) -> Result<String> {
    let max = report.summary.require_max()?;

    let mut output = String::new();
    output.push_str(&format!("Numbers: {}\n", report.numbers));
    output.push_str(&format!("Names: {}\n", report.names));
    output.push_str(&format!("Sum: {}\n", report.summary.sum));
    output.push_str(&format!("Maximum: {}\n", max));

    Ok(output)
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
