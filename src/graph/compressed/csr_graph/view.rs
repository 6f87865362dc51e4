//! `GraphView` for `CsrGraph`: union-find decomposition over the stored edges.

use core::ops::Range;

use super::CsrGraph;
use crate::collections::DisjointSet;
use crate::error::Result;
use crate::graph::component::{partition, Component};
use crate::graph::traits::{EdgeType, GraphView};
use crate::graph::{require_directed, require_non_null, require_undirected};

impl<Ty: EdgeType> CsrGraph<Ty> {
    /// Unions the endpoints of every stored edge, ignoring orientation.
    fn union_find(&self) -> DisjointSet {
        let mut ds = DisjointSet::with_singletons(self.node_count());
        for (u, v) in self.edges() {
            ds.union(u, v);
        }
        ds
    }

    fn components(&self) -> Vec<Component<'_>> {
        let labels = self.union_find().labels();
        partition(self, &labels, self.edges().map(|(u, _)| u))
    }

    fn single_component(&self) -> Result<bool> {
        require_non_null(self.node_count())?;
        Ok(self.union_find().set_count() == 1)
    }
}

impl<Ty: EdgeType> GraphView for CsrGraph<Ty> {
    type NodeId = usize;
    type NodeIds<'a> = Range<usize> where Self: 'a;
    type Component<'a> = Component<'a> where Self: 'a;

    fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    fn edge_count(&self) -> usize {
        self.targets.len()
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn node_ids(&self) -> Range<usize> {
        0..self.in_degrees.len()
    }

    /// # Panics
    /// Panics if `node` is out of bounds.
    fn in_degree(&self, node: usize) -> Result<usize> {
        require_directed::<Ty>()?;
        assert!(node < self.in_degrees.len(), "node {node} out of bounds");
        Ok(self.in_degrees[node])
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
