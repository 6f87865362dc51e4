//! Compressed graph representations.
//!
//! Immutable layouts that keep adjacency in flat arrays indexed by node id.

pub mod csr_graph;

pub use csr_graph::CsrGraph;
