//! The capability surface every graph backend exposes to the recognition predicates.
//!
//! Predicates never see a concrete representation. Anything that can report its counts,
//! its directedness, per-node in-degrees and a component decomposition implements
//! [`GraphView`] and can be classified.

use core::fmt;

use crate::error::Result;

/// Marker trait for graph edge directionality.
pub trait EdgeType: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;

    /// Returns the runtime direction tag for this marker.
    fn direction() -> Direction {
        if Self::is_directed() {
            Direction::Directed
        } else {
            Direction::Undirected
        }
    }
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// Runtime directedness of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Edges have an orientation.
    Directed,
    /// Edges have no orientation.
    Undirected,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

/// A read-only view of one component of a graph.
pub trait ComponentView {
    /// Number of nodes in the component.
    fn node_count(&self) -> usize;

    /// Number of edges with both endpoints in the component.
    fn edge_count(&self) -> usize;
}

/// The capability set the recognition predicates rely on.
///
/// ### Directedness contract
/// | Query | Directed | Undirected |
/// |-------|----------|------------|
/// | `in_degree` | yes | `NotImplementedFor(Undirected)` |
/// | `connected_components`, `is_connected` | `NotImplementedFor(Directed)` | yes |
/// | `weakly_connected_components`, `is_weakly_connected` | yes | `NotImplementedFor(Undirected)` |
///
/// `is_connected` and `is_weakly_connected` reject the empty graph with
/// `PointlessConcept`; connectivity is undefined there.
pub trait GraphView {
    /// Node identity.
    type NodeId: Copy + Eq + fmt::Debug;

    /// Iterator over every node identity.
    type NodeIds<'a>: Iterator<Item = Self::NodeId>
    where
        Self: 'a;

    /// A component borrowed from this graph.
    type Component<'a>: ComponentView
    where
        Self: 'a;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges. Parallel edges count individually, a self-loop counts once.
    fn edge_count(&self) -> usize;

    /// Whether edges are oriented.
    fn is_directed(&self) -> bool;

    /// Iterates over every node.
    fn node_ids(&self) -> Self::NodeIds<'_>;

    /// Number of edges terminating at `node`.
    ///
    /// # Errors
    /// `NotImplementedFor(Undirected)` on undirected graphs.
    fn in_degree(&self, node: Self::NodeId) -> Result<usize>;

    /// Connected components of an undirected graph.
    ///
    /// # Errors
    /// `NotImplementedFor(Directed)` on directed graphs.
    fn connected_components(&self) -> Result<Vec<Self::Component<'_>>>;

    /// Weakly connected components of a directed graph.
    ///
    /// # Errors
    /// `NotImplementedFor(Undirected)` on undirected graphs.
    fn weakly_connected_components(&self) -> Result<Vec<Self::Component<'_>>>;

    /// Whether an undirected graph is connected.
    ///
    /// # Errors
    /// `NotImplementedFor(Directed)` on directed graphs, `PointlessConcept` when empty.
    fn is_connected(&self) -> Result<bool>;

    /// Whether a directed graph is weakly connected.
    ///
    /// # Errors
    /// `NotImplementedFor(Undirected)` on undirected graphs, `PointlessConcept` when empty.
    fn is_weakly_connected(&self) -> Result<bool>;

    /// Runtime direction tag.
    fn direction(&self) -> Direction {
        if self.is_directed() {
            Direction::Directed
        } else {
            Direction::Undirected
        }
    }
}
