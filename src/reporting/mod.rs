// src/reporting/mod.rs
//! Report assembly and output formatting.

pub mod console;
pub mod json;

use clap::ValueEnum;
use serde::Serialize;

use crate::graph::pagerank::Ranking;
use crate::graph::store::{LinkGraph, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One node's label and final PageRank score.
#[derive(Debug, Clone, Serialize)]
pub struct NodeScore {
    pub label: String,
    pub score: f64,
}

/// Everything the output formatters need, already ordered.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub component_count: usize,
    pub iterations: usize,
    pub converged: bool,
    pub nodes: Vec<NodeScore>,
}

/// Assembles the report from an analyzed graph.
///
/// Nodes appear in first-seen input order. With `by_score` they are
/// instead sorted by descending score; the sort is stable, so ties keep
/// their first-seen order.
#[must_use]
pub fn build(
    graph: &LinkGraph,
    components: &[Vec<NodeId>],
    ranking: &Ranking,
    by_score: bool,
) -> RankReport {
    let mut nodes: Vec<NodeScore> = graph
        .nodes()
        .map(|v| NodeScore {
            label: graph.label(v).to_string(),
            score: ranking.scores[v],
        })
        .collect();

    if by_score {
        nodes.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    RankReport {
        component_count: components.len(),
        iterations: ranking.iterations,
        converged: ranking.converged,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::components::weak_components;
    use crate::graph::pagerank::{compute, PageRankConfig};

    fn report_for(edges: &[(&str, &str)], by_score: bool) -> RankReport {
        let mut graph = LinkGraph::new();
        for (source, target) in edges {
            graph.add_edge(source, target);
        }
        let components = weak_components(&graph);
        let ranking = compute(&graph, &PageRankConfig::default()).unwrap();
        build(&graph, &components, &ranking, by_score)
    }

    #[test]
    fn default_order_is_first_seen() {
        let report = report_for(&[("b", "a"), ("a", "c")], false);
        let labels: Vec<&str> = report.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn by_score_sorts_descending() {
        let report = report_for(&[("a", "b"), ("a", "c"), ("b", "c")], true);
        let labels: Vec<&str> = report.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "b", "a"]);
        assert!(report.nodes[0].score >= report.nodes[1].score);
    }

    #[test]
    fn by_score_keeps_first_seen_order_on_ties() {
        // A symmetric cycle scores every node exactly 0.5.
        let report = report_for(&[("y", "x"), ("x", "y")], true);
        let labels: Vec<&str> = report.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["y", "x"]);
    }

    #[test]
    fn counts_reflect_the_analyses() {
        let report = report_for(&[("a", "b"), ("c", "d")], false);
        assert_eq!(report.component_count, 2);
        assert!(report.converged);
        assert_eq!(report.nodes.len(), 4);
    }

    #[test]
    fn empty_graph_reports_zero_components_and_no_nodes() {
        let report = report_for(&[], false);
        assert_eq!(report.component_count, 0);
        assert!(report.nodes.is_empty());
    }
}
