//! Supporting collections for graph decomposition.

pub mod disjoint_set;

pub use disjoint_set::DisjointSet;
