// src/lib.rs
//! Weak-component counts and PageRank scores for tab-separated
//! adjacency-list graphs.

pub mod cli;
pub mod error;
pub mod graph;
pub mod reporting;
