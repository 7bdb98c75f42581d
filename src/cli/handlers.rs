// src/cli/handlers.rs
use anyhow::Result;
use colored::Colorize;

use crate::cli::args::Cli;
use crate::graph::components::weak_components;
use crate::graph::loader::{self, LoadStats};
use crate::graph::pagerank::{self, PageRankConfig};
use crate::reporting::{self, OutputFormat};

/// Handles the whole rank run: load, analyze, report.
///
/// The report goes to stdout; warnings and verbose progress go to
/// stderr so piped output stays clean.
///
/// # Errors
/// Returns error if the input cannot be read, the damping factor is
/// invalid, or output formatting fails.
pub fn handle_rank(args: &Cli) -> Result<()> {
    let (graph, stats) = loader::load(&args.input)?;
    report_skips(&stats, args.verbose);
    if args.verbose {
        eprintln!(
            "{}",
            format!(
                "loaded {} nodes, {} edges from {} lines",
                graph.node_count(),
                graph.edge_count(),
                stats.lines
            )
            .dimmed()
        );
    }

    let components = weak_components(&graph);

    let config = PageRankConfig {
        damping: args.damping,
        max_iterations: args.max_iterations,
        tolerance: args.tolerance,
        redistribute_dangling: !args.drop_dangling,
    };
    let ranking = pagerank::compute(&graph, &config)?;
    if args.verbose {
        let outcome = if ranking.converged {
            "converged"
        } else {
            "hit iteration cap"
        };
        eprintln!(
            "{}",
            format!(
                "pagerank {outcome} after {} {}",
                ranking.iterations,
                pluralize("iteration", ranking.iterations)
            )
            .dimmed()
        );
    }

    let report = reporting::build(&graph, &components, &ranking, args.by_score);
    match args.format {
        OutputFormat::Text => reporting::console::print_report(&report)?,
        OutputFormat::Json => reporting::json::print_report(&report)?,
    }
    Ok(())
}

/// Surfaces skipped input records on stderr. Verbose mode lists each
/// one; otherwise only the summary line appears.
fn report_skips(stats: &LoadStats, verbose: bool) {
    if stats.skipped.is_empty() {
        return;
    }
    if verbose {
        for skip in &stats.skipped {
            eprintln!(
                "{} line {}: {}",
                "warn:".yellow().bold(),
                skip.line,
                skip.reason.describe()
            );
        }
    }
    let n = stats.skipped.len();
    eprintln!(
        "{}",
        format!("skipped {} malformed {}", n, pluralize("record", n)).yellow()
    );
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
