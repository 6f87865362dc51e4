//! A dynamic adjacency-list graph.
//!
//! This representation prioritizes **incremental construction**: nodes and edges can
//! be added (and edges removed) at runtime, and the graph can be classified at any
//! point in between. Every edge is recorded twice, in the source's outgoing list and
//! the target's incoming list, so the underlying undirected structure is available
//! without a reverse scan.

use core::marker::PhantomData;
use core::ops::Range;

use crate::error::Result;
use crate::graph::access::visited::VisitedSet;
use crate::graph::component::{partition, Component};
use crate::graph::traits::{Directed, EdgeType, GraphView};
use crate::graph::{require_directed, require_non_null, require_undirected};

/// A dynamic adjacency list graph, directed or undirected by its `Ty` marker.
///
/// Parallel edges are kept as separate entries.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_node` | \(O(1)\) amortized | Appends to internal vectors |
/// | `add_edge` | \(O(1)\) amortized | Appends to both endpoint lists |
/// | `remove_edge` | \(O(\text{degree})\) | Linear scan of both lists |
/// | `out_degree` / `in_degree` | \(O(1)\) | returns `Vec::len` |
/// | components | \(O(n + m)\) | Iterative DFS over out + in lists |
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph<Ty: EdgeType = Directed> {
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
    edge_count: usize,
    _ty: PhantomData<Ty>,
}

impl<Ty: EdgeType> AdjacencyGraph<Ty> {
    /// Creates a graph with `node_count` nodes and zero edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            outgoing: vec![Vec::new(); node_count],
            incoming: vec![Vec::new(); node_count],
            edge_count: 0,
            _ty: PhantomData,
        }
    }

    /// Creates an empty graph with room for `node_capacity` nodes.
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            outgoing: Vec::with_capacity(node_capacity),
            incoming: Vec::with_capacity(node_capacity),
            edge_count: 0,
            _ty: PhantomData,
        }
    }

    /// Creates a graph from an edge list.
    ///
    /// # Panics
    /// Panics if any edge references a node index out of bounds.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(node_count);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds a node to the graph.
    ///
    /// Returns the index of the new node.
    pub fn add_node(&mut self) -> usize {
        let idx = self.outgoing.len();
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        idx
    }

    /// Adds an edge `from -> to`. Existing edges between the same endpoints are kept.
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        assert!(from < self.node_count(), "from vertex {from} out of bounds");
        assert!(to < self.node_count(), "to vertex {to} out of bounds");
        self.outgoing[from].push(to);
        self.incoming[to].push(from);
        self.edge_count += 1;
    }

    /// Removes one edge `from -> to` if present.
    ///
    /// Undirected graphs also match an edge stored as `to -> from`.
    ///
    /// # Panics
    /// Panics if `from` or `to` are out of bounds.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        assert!(from < self.node_count(), "from vertex {from} out of bounds");
        assert!(to < self.node_count(), "to vertex {to} out of bounds");
        if self.remove_stored(from, to) || (!Ty::is_directed() && self.remove_stored(to, from)) {
            self.edge_count -= 1;
            true
        } else {
            false
        }
    }

    fn remove_stored(&mut self, from: usize, to: usize) -> bool {
        let Some(pos) = self.outgoing[from].iter().position(|&v| v == to) else {
            return false;
        };
        self.outgoing[from].swap_remove(pos);
        if let Some(pos) = self.incoming[to].iter().position(|&u| u == from) {
            self.incoming[to].swap_remove(pos);
        }
        true
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph is directed.
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    /// Returns the targets of edges stored with `node` as source.
    pub fn out_neighbors(&self, node: usize) -> &[usize] {
        assert!(node < self.node_count(), "vertex {node} out of bounds");
        &self.outgoing[node]
    }

    /// Returns the sources of edges stored with `node` as target.
    pub fn in_neighbors(&self, node: usize) -> &[usize] {
        assert!(node < self.node_count(), "vertex {node} out of bounds");
        &self.incoming[node]
    }

    /// Returns the out-degree of a node.
    pub fn out_degree(&self, node: usize) -> usize {
        self.out_neighbors(node).len()
    }

    /// Checks if an edge exists from `from` to `to`.
    ///
    /// Undirected graphs also match the reverse orientation.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.out_neighbors(from).contains(&to)
            || (!Ty::is_directed() && self.out_neighbors(to).contains(&from))
    }

    /// Iterative DFS over the underlying undirected adjacency, marking `start`'s
    /// whole component in `visited` and labelling each reached node with `start`.
    fn flood(&self, start: usize, visited: &mut VisitedSet, labels: &mut [usize]) {
        let mut stack = vec![start];
        visited.try_visit(start);
        labels[start] = start;

        while let Some(u) = stack.pop() {
            for &v in self.outgoing[u].iter().chain(&self.incoming[u]) {
                if visited.try_visit(v) {
                    labels[v] = start;
                    stack.push(v);
                }
            }
        }
    }

    fn components(&self) -> Vec<Component<'_>> {
        let n = self.node_count();
        let mut visited = VisitedSet::new(n);
        let mut labels = vec![0usize; n];
        for u in 0..n {
            if !visited.is_visited(u) {
                self.flood(u, &mut visited, &mut labels);
            }
        }
        let sources = self
            .outgoing
            .iter()
            .enumerate()
            .flat_map(|(u, targets)| core::iter::repeat(u).take(targets.len()));
        partition(self, &labels, sources)
    }

    fn single_component(&self) -> Result<bool> {
        let n = self.node_count();
        require_non_null(n)?;
        let mut visited = VisitedSet::new(n);
        let mut labels = vec![0usize; n];
        self.flood(0, &mut visited, &mut labels);
        Ok(visited.count() == n)
    }
}

impl<Ty: EdgeType> GraphView for AdjacencyGraph<Ty> {
    type NodeId = usize;
    type NodeIds<'a> = Range<usize> where Self: 'a;
    type Component<'a> = Component<'a> where Self: 'a;

    fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn node_ids(&self) -> Range<usize> {
        0..self.outgoing.len()
    }

    /// # Panics
    /// Panics if `node` is out of bounds.
    fn in_degree(&self, node: usize) -> Result<usize> {
        require_directed::<Ty>()?;
        Ok(self.in_neighbors(node).len())
    }

    fn connected_components(&self) -> Result<Vec<Component<'_>>> {
        require_undirected::<Ty>()?;
        Ok(self.components())
    }

    fn weakly_connected_components(&self) -> Result<Vec<Component<'_>>> {
        require_directed::<Ty>()?;
        Ok(self.components())
    }

    fn is_connected(&self) -> Result<bool> {
        require_undirected::<Ty>()?;
        self.single_component()
    }

    fn is_weakly_connected(&self) -> Result<bool> {
        require_directed::<Ty>()?;
        self.single_component()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecognitionError;
    use crate::graph::traits::{ComponentView, Direction, Undirected};

    #[test]
    fn test_add_and_remove_edges() {
        let mut graph = AdjacencyGraph::<Directed>::new(3);
        graph.add_edge(0, 1);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.in_degree(1), Ok(2));

        assert!(graph.remove_edge(0, 1));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.in_degree(1), Ok(1));

        assert!(!graph.remove_edge(2, 1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_undirected_remove_matches_reverse() {
        let mut graph = AdjacencyGraph::<Undirected>::from_edges(2, &[(0, 1)]);
        assert!(graph.has_edge(1, 0));
        assert!(graph.remove_edge(1, 0));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_edge(0, 1));
    }

    #[test]
    fn test_add_node_extends_arena() {
        let mut graph = AdjacencyGraph::<Undirected>::with_capacity(4);
        assert_eq!(graph.node_count(), 0);
        let a = graph.add_node();
        let b = graph.add_node();
        graph.add_edge(a, b);
        assert_eq!((a, b), (0, 1));
        assert_eq!(graph.is_connected(), Ok(true));

        graph.add_node();
        assert_eq!(graph.is_connected(), Ok(false));
    }

    #[test]
    fn test_components_follow_reverse_edges() {
        // 1 -> 0 and 2 -> 0 are only reachable from 0 through incoming lists.
        let graph = AdjacencyGraph::<Directed>::from_edges(4, &[(1, 0), (2, 0)]);
        let components = graph.weakly_connected_components().unwrap();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0].nodes(), &[0, 1, 2]);
        assert_eq!(components[0].edge_count(), 2);
        assert_eq!(components[1].nodes(), &[3]);
        assert_eq!(graph.is_weakly_connected(), Ok(false));
    }

    #[test]
    fn test_self_loop_counts_once() {
        let graph = AdjacencyGraph::<Undirected>::from_edges(1, &[(0, 0)]);
        let components = graph.connected_components().unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].node_count(), 1);
        assert_eq!(components[0].edge_count(), 1);
    }

    #[test]
    fn test_direction_contract() {
        let graph = AdjacencyGraph::<Undirected>::new(1);
        assert_eq!(
            graph.in_degree(0),
            Err(RecognitionError::NotImplementedFor(Direction::Undirected))
        );

        let empty = AdjacencyGraph::<Directed>::new(0);
        assert!(matches!(
            empty.is_weakly_connected(),
            Err(RecognitionError::PointlessConcept(_))
        ));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_add_edge_out_of_bounds_panics() {
        let mut graph = AdjacencyGraph::<Directed>::new(1);
        graph.add_edge(0, 1);
    }
}
