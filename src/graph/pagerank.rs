// src/graph/pagerank.rs
//! Power-iteration PageRank over a [`LinkGraph`].

use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::error::{LinkRankError, Result};
use crate::graph::store::LinkGraph;

/// Tuning knobs for one PageRank run.
#[derive(Debug, Clone, Copy)]
pub struct PageRankConfig {
    /// Probability of following a link rather than teleporting.
    /// Must lie strictly between 0 and 1.
    pub damping: f64,
    /// Iteration cap when the tolerance is never reached.
    pub max_iterations: usize,
    /// L1 convergence threshold between successive score vectors.
    pub tolerance: f64,
    /// When true, the rank mass of nodes without outgoing edges is
    /// spread uniformly over all nodes each iteration, keeping the
    /// score total at 1. When false that mass simply drains away.
    pub redistribute_dangling: bool,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
            redistribute_dangling: true,
        }
    }
}

/// Result of a PageRank run: one score per node, indexed by [`NodeId`],
/// plus how the iteration ended.
///
/// [`NodeId`]: crate::graph::store::NodeId
#[derive(Debug, Clone)]
pub struct Ranking {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Runs power iteration until the L1 delta between successive score
/// vectors drops below `config.tolerance` or `config.max_iterations`
/// passes have run.
///
/// Scores start uniform at 1/N. Each pass computes
/// `(1 - d)/N + d * sum(score(u) / out_degree(u))` over the incoming
/// edges of every node; parallel edges contribute once per edge.
/// An empty graph yields an empty ranking, already converged.
///
/// # Errors
///
/// Returns [`LinkRankError::InvalidDamping`] when `config.damping` is
/// not strictly between 0 and 1.
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &LinkGraph, config: &PageRankConfig) -> Result<Ranking> {
    // The negated form also rejects NaN.
    if !(config.damping > 0.0 && config.damping < 1.0) {
        return Err(LinkRankError::InvalidDamping(config.damping));
    }

    let n = graph.node_count();
    if n == 0 {
        return Ok(Ranking {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
        });
    }

    let nf = n as f64;
    let d = config.damping;
    let teleport = (1.0 - d) / nf;
    let out_degree: Vec<usize> = graph.nodes().map(|v| graph.out_degree(v)).collect();

    let mut scores = vec![1.0 / nf; n];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        let dangling_share = if config.redistribute_dangling {
            let dangling_mass: f64 = graph
                .nodes()
                .filter(|&v| out_degree[v] == 0)
                .map(|v| scores[v])
                .sum();
            d * dangling_mass / nf
        } else {
            0.0
        };

        // Pull-based update: each node folds its own in-edge list, so
        // the result is identical to a sequential pass.
        let next: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|v| {
                let incoming: f64 = graph
                    .in_edges(v)
                    .iter()
                    .map(|&e| {
                        let u = graph.edge(e).source;
                        scores[u] / out_degree[u] as f64
                    })
                    .sum();
                teleport + dangling_share + d * incoming
            })
            .collect();

        let delta: f64 = scores
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .sum();
        scores = next;

        if delta < config.tolerance {
            converged = true;
            break;
        }
    }

    Ok(Ranking {
        scores,
        iterations,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(edges: &[(&str, &str)]) -> LinkGraph {
        let mut graph = LinkGraph::new();
        for (source, target) in edges {
            graph.add_edge(source, target);
        }
        graph
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn rejects_damping_outside_open_interval() {
        let graph = graph_of(&[("a", "b")]);
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = PageRankConfig {
                damping: bad,
                ..PageRankConfig::default()
            };
            assert!(
                matches!(compute(&graph, &config), Err(LinkRankError::InvalidDamping(_))),
                "damping {bad} should be rejected"
            );
        }
    }

    #[test]
    fn empty_graph_yields_empty_ranking() {
        let ranking = compute(&LinkGraph::new(), &PageRankConfig::default()).unwrap();
        assert!(ranking.scores.is_empty());
        assert_eq!(ranking.iterations, 0);
        assert!(ranking.converged);
    }

    #[test]
    fn symmetric_cycle_stays_uniform() {
        let graph = graph_of(&[("a", "b"), ("b", "a")]);
        let ranking = compute(&graph, &PageRankConfig::default()).unwrap();
        assert_eq!(ranking.scores, vec![0.5, 0.5]);
        assert_eq!(ranking.iterations, 1);
        assert!(ranking.converged);
    }

    #[test]
    fn redistribution_conserves_mass_across_components() {
        // One component drains into a dangling node, the other cycles.
        let graph = graph_of(&[("a", "b"), ("c", "d"), ("d", "c")]);
        let ranking = compute(&graph, &PageRankConfig::default()).unwrap();
        assert!(ranking.converged);
        let total: f64 = ranking.scores.iter().sum();
        assert!(close(total, 1.0));
    }

    #[test]
    fn two_node_chain_matches_fixed_point() {
        // a -> b with b dangling. Solving the redistributed system gives
        // a = 0.5/1.425, b = 1 - a.
        let graph = graph_of(&[("a", "b")]);
        let ranking = compute(&graph, &PageRankConfig::default()).unwrap();
        assert!(ranking.converged);
        assert!(close(ranking.scores[0], 0.350_877));
        assert!(close(ranking.scores[1], 0.649_123));
        let total: f64 = ranking.scores.iter().sum();
        assert!(close(total, 1.0));
    }

    #[test]
    fn star_ranks_sink_highest() {
        let graph = graph_of(&[("a", "b"), ("a", "c"), ("b", "c")]);
        let ranking = compute(&graph, &PageRankConfig::default()).unwrap();
        assert!(ranking.converged);
        let (a, b, c) = (ranking.scores[0], ranking.scores[1], ranking.scores[2]);
        assert!(c > b && b > a);
        assert!(close(a, 0.197_583));
        assert!(close(b, 0.281_551));
        assert!(close(c, 0.520_866));
    }

    #[test]
    fn parallel_edges_weigh_twice() {
        // a splits over three edges, two of which hit b.
        let graph = graph_of(&[("a", "b"), ("a", "b"), ("a", "c"), ("b", "a"), ("c", "a")]);
        let ranking = compute(&graph, &PageRankConfig::default()).unwrap();
        assert!(ranking.converged);
        assert!(ranking.scores[1] > ranking.scores[2]);
    }

    #[test]
    fn dropping_dangling_mass_shrinks_the_total() {
        let graph = graph_of(&[("a", "b")]);
        let config = PageRankConfig {
            redistribute_dangling: false,
            ..PageRankConfig::default()
        };
        let ranking = compute(&graph, &config).unwrap();
        assert!(ranking.converged);
        assert_eq!(ranking.iterations, 3);
        assert!(close(ranking.scores[0], 0.075));
        assert!(close(ranking.scores[1], 0.138_75));
        let total: f64 = ranking.scores.iter().sum();
        assert!(total < 1.0);
    }

    #[test]
    fn iteration_cap_reports_unconverged() {
        let graph = graph_of(&[("a", "b"), ("b", "a"), ("a", "c"), ("c", "a")]);
        let config = PageRankConfig {
            max_iterations: 2,
            tolerance: 0.0,
            ..PageRankConfig::default()
        };
        let ranking = compute(&graph, &config).unwrap();
        assert_eq!(ranking.iterations, 2);
        assert!(!ranking.converged);
    }
}
