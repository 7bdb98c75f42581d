// src/graph/mod.rs
//! Graph storage, loading, and the analyses that run over it.

pub mod components;
pub mod loader;
pub mod pagerank;
pub mod store;

pub use store::LinkGraph;
