// src/graph/loader.rs
//! Reads tab-separated adjacency lists into a [`LinkGraph`].
//!
//! Each input line is `<source>\t<target>[\t<target>...]`. One edge is
//! added per (source, target) pair. Lines that cannot yield an edge are
//! skipped and accounted for in [`LoadStats`] so callers can surface
//! them without failing the load.

use std::fs;
use std::path::Path;

use crate::error::{LinkRankError, Result};
use crate::graph::store::LinkGraph;

/// Why a line (or one of its pairs) was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No tab at all, so no target field to pair with the source.
    TooFewFields,
    /// The source field was empty.
    EmptySource,
    /// A target field was empty; the rest of the line still loads.
    EmptyTarget,
}

impl SkipReason {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::TooFewFields => "fewer than 2 tab-separated fields",
            Self::EmptySource => "empty source label",
            Self::EmptyTarget => "empty target label",
        }
    }
}

/// One skipped record, keyed by its 1-based input line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: SkipReason,
}

/// Accounting for a single load: lines seen, edges added, records skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    pub lines: usize,
    pub edges: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Loads a graph from the adjacency-list file at `path`.
///
/// # Errors
///
/// Returns [`LinkRankError::Io`] when the file cannot be read.
pub fn load(path: &Path) -> Result<(LinkGraph, LoadStats)> {
    let content = fs::read_to_string(path).map_err(|source| LinkRankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(parse(&content))
}

/// Parses adjacency-list `content` into a graph plus load accounting.
///
/// Blank lines are ignored silently. A line without a second field is
/// recorded as [`SkipReason::TooFewFields`]; an empty source skips the
/// whole line; an empty target skips only that pair.
#[must_use]
pub fn parse(content: &str) -> (LinkGraph, LoadStats) {
    let mut graph = LinkGraph::new();
    let mut stats = LoadStats::default();

    for (i, line) in content.lines().enumerate() {
        stats.lines += 1;
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let line_no = i + 1;
        if fields.len() < 2 {
            stats.skipped.push(SkippedLine {
                line: line_no,
                reason: SkipReason::TooFewFields,
            });
            continue;
        }
        let source = fields[0];
        if source.is_empty() {
            stats.skipped.push(SkippedLine {
                line: line_no,
                reason: SkipReason::EmptySource,
            });
            continue;
        }
        for target in &fields[1..] {
            if target.is_empty() {
                stats.skipped.push(SkippedLine {
                    line: line_no,
                    reason: SkipReason::EmptyTarget,
                });
                continue;
            }
            graph.add_edge(source, target);
            stats.edges += 1;
        }
    }

    (graph, stats)
}
