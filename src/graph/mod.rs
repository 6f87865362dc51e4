//! Graph views and the backends that implement them.
//!
//! Graph implementations are organized into categories:
//! - `basic`: dynamic adjacency-list graphs for incremental construction
//! - `compressed`: immutable compressed sparse row graphs
//!
//! Both implement [`GraphView`], the only surface the recognition predicates use.

pub mod basic;
pub mod component;
pub mod compressed;
pub mod traits;
pub(crate) mod access;

pub use basic::AdjacencyGraph;
pub use component::Component;
pub use compressed::CsrGraph;
pub use traits::{ComponentView, Directed, Direction, EdgeType, GraphView, Undirected};

use crate::error::{RecognitionError, Result};

pub(crate) const NULL_GRAPH_CONNECTIVITY: &str = "Connectivity is undefined for the null graph.";

/// Fails unless `Ty` is directed.
pub(crate) fn require_directed<Ty: EdgeType>() -> Result<()> {
    if Ty::is_directed() {
        Ok(())
    } else {
        Err(RecognitionError::NotImplementedFor(Ty::direction()))
    }
}

/// Fails unless `Ty` is undirected.
pub(crate) fn require_undirected<Ty: EdgeType>() -> Result<()> {
    if Ty::is_directed() {
        Err(RecognitionError::NotImplementedFor(Ty::direction()))
    } else {
        Ok(())
    }
}

/// Fails on the null graph, where connectivity has no meaning.
pub(crate) fn require_non_null(node_count: usize) -> Result<()> {
    if node_count == 0 {
        Err(RecognitionError::PointlessConcept(NULL_GRAPH_CONNECTIVITY))
    } else {
        Ok(())
    }
}
