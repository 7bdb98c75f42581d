// src/reporting/json.rs
//! JSON report output.

use anyhow::Result;

use super::RankReport;

/// Formats the report as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &RankReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Prints the JSON report to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_report(report: &RankReport) -> Result<()> {
    println!("{}", render(report)?);
    Ok(())
}
