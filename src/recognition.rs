//! Recognition tests for forests, trees, branchings and arborescences.
//!
//! A *forest* is an acyclic undirected graph and a *tree* is a connected forest. Directed
//! graphs follow the convention where direction is ignored for these two: a directed
//! forest (tree) is one whose underlying undirected multigraph is a forest (tree).
//! The in-degree bound is layered on top:
//!
//! | This crate   | Alternative naming |
//! |--------------|--------------------|
//! | forest       | polyforest         |
//! | tree         | polytree           |
//! | branching    | forest             |
//! | arborescence | tree               |
//!
//! - **branching**: a directed forest in which every node has at most one parent.
//! - **arborescence**: a directed tree in which every node has at most one parent.
//!
//! Acyclicity is never searched for directly. A connected multigraph with `n` nodes is
//! acyclic exactly when it has `n - 1` edges, so every check reduces to edge and node
//! counts plus one connectivity or component query.
//!
//! All predicates reject the empty graph with [`RecognitionError::PointlessConcept`].
//! The directed-only predicates reject undirected input with
//! [`RecognitionError::NotImplementedFor`] before anything else is looked at.

use serde::{Deserialize, Serialize};

use crate::error::{RecognitionError, Result};
use crate::graph::{ComponentView, GraphView};
use crate::macros::trace_event;

const EMPTY_GRAPH: &str = "G has no nodes.";

fn require_nodes<G: GraphView + ?Sized>(graph: &G) -> Result<usize> {
    match graph.node_count() {
        0 => Err(RecognitionError::PointlessConcept(EMPTY_GRAPH)),
        n => Ok(n),
    }
}

fn require_directed<G: GraphView + ?Sized>(graph: &G) -> Result<()> {
    if graph.is_directed() {
        Ok(())
    } else {
        Err(RecognitionError::NotImplementedFor(graph.direction()))
    }
}

/// Components of the underlying undirected structure.
fn underlying_components<G: GraphView + ?Sized>(graph: &G) -> Result<Vec<G::Component<'_>>> {
    if graph.is_directed() {
        graph.weakly_connected_components()
    } else {
        graph.connected_components()
    }
}

fn underlying_connected<G: GraphView + ?Sized>(graph: &G) -> Result<bool> {
    if graph.is_directed() {
        graph.is_weakly_connected()
    } else {
        graph.is_connected()
    }
}

/// Stops at the first node with more than one incoming edge.
fn in_degrees_at_most_one<G: GraphView + ?Sized>(graph: &G) -> Result<bool> {
    for node in graph.node_ids() {
        let in_degree = graph.in_degree(node)?;
        if in_degree > 1 {
            trace_event!(?node, in_degree, "node has more than one parent");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns `true` if `graph` is a forest.
///
/// A forest is a graph with no undirected cycles. For directed graphs the underlying
/// undirected multigraph is tested, so a directed forest is what is elsewhere called a
/// *polyforest*.
///
/// # Errors
/// `PointlessConcept` if the graph has no nodes. Errors raised by the graph's
/// component query propagate unchanged.
pub fn is_forest<G: GraphView + ?Sized>(graph: &G) -> Result<bool> {
    require_nodes(graph)?;

    for component in underlying_components(graph)? {
        // A component is a tree iff it has one edge fewer than it has nodes.
        if component.edge_count() + 1 != component.node_count() {
            trace_event!(
                nodes = component.node_count(),
                edges = component.edge_count(),
                "component is not a tree"
            );
            return Ok(false);
        }
    }

    Ok(true)
}

/// Returns `true` if `graph` is a tree.
///
/// A tree is a connected graph with no undirected cycles. For directed graphs the
/// underlying undirected multigraph is tested (weak connectivity), so a directed tree is
/// what is elsewhere called a *polytree*.
///
/// The edge count is compared first; connectivity is only computed when it matches.
///
/// # Errors
/// `PointlessConcept` if the graph has no nodes. Errors raised by the graph's
/// connectivity query propagate unchanged.
pub fn is_tree<G: GraphView + ?Sized>(graph: &G) -> Result<bool> {
    let n = require_nodes(graph)?;

    if graph.edge_count() != n - 1 {
        trace_event!(nodes = n, edges = graph.edge_count(), "edge count is not n - 1");
        return Ok(false);
    }

    underlying_connected(graph)
}

/// Returns `true` if `graph` is a branching: a directed forest with maximum in-degree
/// at most 1.
///
/// # Errors
/// `NotImplementedFor(Undirected)` for undirected graphs (checked first), otherwise
/// whatever [`is_forest`] raises.
pub fn is_branching<G: GraphView + ?Sized>(graph: &G) -> Result<bool> {
    require_directed(graph)?;

    if !is_forest(graph)? {
        return Ok(false);
    }

    in_degrees_at_most_one(graph)
}

/// Returns `true` if `graph` is an arborescence: a directed tree with maximum in-degree
/// at most 1.
///
/// # Errors
/// `NotImplementedFor(Undirected)` for undirected graphs (checked first), otherwise
/// whatever [`is_tree`] raises.
pub fn is_arborescence<G: GraphView + ?Sized>(graph: &G) -> Result<bool> {
    require_directed(graph)?;

    if !is_tree(graph)? {
        return Ok(false);
    }

    in_degrees_at_most_one(graph)
}

/// The most specific class a graph belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphClass {
    /// Directed tree with every in-degree at most 1.
    Arborescence,
    /// Connected forest.
    Tree,
    /// Directed forest with every in-degree at most 1.
    Branching,
    /// Graph without undirected cycles.
    Forest,
}

/// All four recognition results for one graph.
///
/// `branching` and `arborescence` are `None` for undirected graphs, where they are not
/// defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Whether the graph is directed.
    pub directed: bool,
    /// Result of [`is_forest`].
    pub forest: bool,
    /// Result of [`is_tree`].
    pub tree: bool,
    /// Result of [`is_branching`], directed graphs only.
    pub branching: Option<bool>,
    /// Result of [`is_arborescence`], directed graphs only.
    pub arborescence: Option<bool>,
}

impl Classification {
    /// Returns the most specific class that holds, checked in the order
    /// arborescence, tree, branching, forest.
    pub fn strongest(&self) -> Option<GraphClass> {
        if self.arborescence == Some(true) {
            Some(GraphClass::Arborescence)
        } else if self.tree {
            Some(GraphClass::Tree)
        } else if self.branching == Some(true) {
            Some(GraphClass::Branching)
        } else if self.forest {
            Some(GraphClass::Forest)
        } else {
            None
        }
    }
}

/// Evaluates all four predicates from a single component decomposition.
///
/// A forest with exactly one component is a tree, so connectivity needs no second pass.
/// In-degrees are only inspected for directed forests.
///
/// # Errors
/// `PointlessConcept` if the graph has no nodes. Errors raised by the graph's component
/// or in-degree queries propagate unchanged.
pub fn classify<G: GraphView + ?Sized>(graph: &G) -> Result<Classification> {
    require_nodes(graph)?;
    let directed = graph.is_directed();

    let components = underlying_components(graph)?;
    let forest = components
        .iter()
        .all(|c| c.edge_count() + 1 == c.node_count());
    let tree = forest && components.len() == 1;
    trace_event!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        components = components.len(),
        forest,
        tree,
        "classified underlying structure"
    );

    let (branching, arborescence) = if directed {
        let single_parent = forest && in_degrees_at_most_one(graph)?;
        (Some(single_parent), Some(tree && single_parent))
    } else {
        (None, None)
    };

    Ok(Classification {
        directed,
        forest,
        tree,
        branching,
        arborescence,
    })
}

/// Classifies every graph in `graphs`, returning results in input order.
///
/// With the `parallel` feature the graphs are classified on the rayon pool.
#[cfg(not(feature = "parallel"))]
pub fn classify_all<G: GraphView + Sync>(graphs: &[G]) -> Vec<Result<Classification>> {
    graphs.iter().map(classify).collect()
}

/// Classifies every graph in `graphs`, returning results in input order.
///
/// With the `parallel` feature the graphs are classified on the rayon pool.
#[cfg(feature = "parallel")]
pub fn classify_all<G: GraphView + Sync>(graphs: &[G]) -> Vec<Result<Classification>> {
    use rayon::prelude::*;

    graphs.par_iter().map(classify).collect()
}
