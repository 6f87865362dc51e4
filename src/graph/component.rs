//! Component views as index sets over a parent graph's node arena.
//!
//! A [`Component`] never copies adjacency. It holds the indices of its nodes and the
//! number of edges it owns, and borrows the parent graph's lifetime so it cannot
//! outlive the graph it describes.

use core::marker::PhantomData;

use crate::graph::traits::ComponentView;

const UNASSIGNED: usize = usize::MAX;

/// One (weakly) connected component of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component<'g> {
    nodes: Vec<usize>,
    edge_count: usize,
    _graph: PhantomData<&'g ()>,
}

impl<'g> Component<'g> {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edge_count: 0,
            _graph: PhantomData,
        }
    }

    /// Indices of the nodes in this component, ascending.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Returns true if `node` belongs to this component.
    pub fn contains(&self, node: usize) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }
}

impl ComponentView for Component<'_> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Groups nodes by component label and tallies edges per component.
///
/// `labels[u]` is any representative node of `u`'s component; nodes sharing a
/// label share a component. Every item of `edge_sources` is the source endpoint of
/// one edge; the edge is credited to the source's component. Components come out in
/// order of their smallest node. The components borrow the graph passed first, the
/// arena the labels index into.
pub(crate) fn partition<'g, G, I>(
    _graph: &'g G,
    labels: &[usize],
    edge_sources: I,
) -> Vec<Component<'g>>
where
    G: ?Sized,
    I: IntoIterator<Item = usize>,
{
    let mut slot = vec![UNASSIGNED; labels.len()];
    let mut components: Vec<Component<'g>> = Vec::new();

    for (node, &label) in labels.iter().enumerate() {
        if slot[label] == UNASSIGNED {
            slot[label] = components.len();
            components.push(Component::new());
        }
        components[slot[label]].nodes.push(node);
    }

    for source in edge_sources {
        components[slot[labels[source]]].edge_count += 1;
    }

    components
}
