//! # `arbor` - Forest and Tree Recognition
//!
//! Structural classification of graphs as forests, trees, branchings and arborescences.
//! Each predicate is a cheap gate to run before tree-only or forest-only logic
//! (spanning-tree algorithms, hierarchical layout, dependency checks).
//!
//! ## Guarantees
//!
//! - **No cycle search**: acyclicity is decided by exact counting. A connected multigraph
//!   on `n` nodes is acyclic iff it has `n - 1` edges, so every predicate is one component
//!   or connectivity query plus arithmetic.
//! - **Linear cost**: one decomposition pass plus at most one in-degree pass.
//! - **Pure**: predicates never mutate the graph and keep all traversal scratch local,
//!   so one graph can be classified from many threads at once.
//! - **Distinct failures**: an empty graph ([`RecognitionError::PointlessConcept`]) and a
//!   directed-only predicate on an undirected graph
//!   ([`RecognitionError::NotImplementedFor`]) are errors, never `false`.
//!
//! ## Architecture
//!
//! 1. **Capability trait** (`GraphView`):
//!    - Counts, directedness, in-degree and (weak) component decomposition
//!    - Directedness is a type-level marker (`Directed` / `Undirected`) on the backends
//!
//! 2. **Backends**:
//!    - `CsrGraph`: immutable compressed sparse row layout, union-find components
//!    - `AdjacencyGraph`: dynamic adjacency lists, DFS components
//!    - Components are index sets over the parent arena, never sub-graph copies
//!
//! 3. **Predicates** (`recognition`):
//!    - `is_forest`, `is_tree` over any graph
//!    - `is_branching`, `is_arborescence` over directed graphs
//!    - `classify` / `classify_all` for all four at once
//!
//! ## Features
//!
//! - `parallel`: classify batches of graphs on the rayon pool
//! - `tracing`: emit `trace`-level diagnostics explaining negative results
//!
//! ## Example
//!
//! ```rust
//! use arbor::{is_arborescence, is_tree, CsrGraph, Directed};
//!
//! // A -> C, B -> C: a polytree, but C has two parents.
//! let graph = CsrGraph::<Directed>::from_edges(3, &[(0, 2), (1, 2)]);
//!
//! assert_eq!(is_tree(&graph), Ok(true));
//! assert_eq!(is_arborescence(&graph), Ok(false));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod collections;
pub mod error;
pub mod graph;
pub mod io;
pub mod recognition;

pub use error::{GraphBuildError, RecognitionError, Result};
pub use graph::{
    AdjacencyGraph, Component, ComponentView, CsrGraph, Directed, Direction, EdgeType, GraphView,
    Undirected,
};
pub use io::{GraphDocument, LoadedGraph};
pub use recognition::{
    classify, classify_all, is_arborescence, is_branching, is_forest, is_tree, Classification,
    GraphClass,
};

// Compile-time assertions for layout claims.
const _: () = {
    use core::mem;

    // Direction markers are ZSTs.
    assert!(mem::size_of::<Directed>() == 0);
    assert!(mem::size_of::<Undirected>() == 0);

    // A CSR graph is three vectors; the marker adds nothing.
    assert!(mem::size_of::<CsrGraph<Directed>>() == 3 * mem::size_of::<Vec<usize>>());
};
