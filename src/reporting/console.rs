// src/reporting/console.rs
//! Plain-text report output.

use std::fmt::Write;

use anyhow::Result;

use super::RankReport;

/// Formats the report as the canonical text layout: the component count
/// line followed by one `<label> <score>` line per node.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render(report: &RankReport) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Number of components: {}", report.component_count)?;
    for node in &report.nodes {
        writeln!(out, "{} {}", node.label, node.score)?;
    }
    Ok(out)
}

/// Prints the text report to stdout.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_report(report: &RankReport) -> Result<()> {
    print!("{}", render(report)?);
    Ok(())
}
