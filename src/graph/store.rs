// src/graph/store.rs
//! The directed multigraph and its label/index tables.

use std::collections::HashMap;
use std::ops::Range;

/// Dense node index, assigned in first-seen order.
pub type NodeId = usize;

/// Edge id; doubles as the index into the edge table.
pub type EdgeId = usize;

/// A single directed edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Directed multigraph over string-labeled nodes.
///
/// Labels are interned to dense indices the first time they appear;
/// re-adding a label resolves to the existing node. Parallel edges and
/// self-loops are allowed. Edge ids are assigned monotonically in
/// `add_edge` call order. There is no removal: once loaded, the graph is
/// read-only.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
}

impl LinkGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one directed edge, creating either endpoint on first
    /// reference, and returns the fresh edge id.
    pub fn add_edge(&mut self, source: &str, target: &str) -> EdgeId {
        let source = self.intern(source);
        let target = self.intern(target);
        let id = self.edges.len();
        self.edges.push(Edge { source, target });
        self.outgoing[source].push(id);
        self.incoming[target].push(id);
        id
    }

    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All node ids in first-seen order.
    #[must_use]
    pub fn nodes(&self) -> Range<NodeId> {
        0..self.labels.len()
    }

    /// All edges in id order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    #[must_use]
    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node]
    }

    #[must_use]
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Edge {
        self.edges[edge]
    }

    /// Ids of edges leaving `node`, in insertion order.
    #[must_use]
    pub fn out_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.outgoing[node]
    }

    /// Ids of edges arriving at `node`, in insertion order.
    #[must_use]
    pub fn in_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.incoming[node]
    }

    /// Number of outgoing edges; parallel edges count individually.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing[node].len()
    }
}
