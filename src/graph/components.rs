// src/graph/components.rs
//! Weakly-connected components via union-find.

use std::collections::HashMap;

use crate::graph::store::{LinkGraph, NodeId};

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

// Indexing is safe here: all indices passed to find/union must be < n (from new()).
#[allow(clippy::indexing_slicing)]
impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, x: usize, y: usize) {
        let rx = self.find(x);
        let ry = self.find(y);

        if rx == ry {
            return;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
    }
}

/// Groups nodes into weakly-connected components, treating every edge
/// as undirected. Parallel edges and self-loops are harmless no-ops for
/// connectivity.
///
/// Components are ordered by their smallest member id, and each
/// component lists its members in ascending id order, so the result is
/// deterministic for a given graph.
#[must_use]
pub fn weak_components(graph: &LinkGraph) -> Vec<Vec<NodeId>> {
    let mut uf = UnionFind::new(graph.node_count());
    for edge in graph.edges() {
        uf.union(edge.source, edge.target);
    }

    let mut components: Vec<Vec<NodeId>> = Vec::new();
    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    for node in graph.nodes() {
        let root = uf.find(node);
        if let Some(&slot) = slot_of_root.get(&root) {
            components[slot].push(node);
        } else {
            slot_of_root.insert(root, components.len());
            components.push(vec![node]);
        }
    }
    components
}
