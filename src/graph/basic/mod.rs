//! Basic graph implementations.
//!
//! Dynamic representations for graphs that are built or edited incrementally
//! before being classified.

pub mod adjacency_graph;

pub use adjacency_graph::AdjacencyGraph;
