//! Serialized graph documents.
//!
//! A document is a node count, a directedness flag and an edge list:
//!
//! ```json
//! { "directed": true, "node_count": 3, "edges": [[0, 1], [1, 2]] }
//! ```
//!
//! Loading validates every endpoint before a graph is built, so malformed input is
//! reported as a [`GraphBuildError`] instead of a panic.

use serde::{Deserialize, Serialize};

use crate::error::{GraphBuildError, Result};
use crate::graph::{CsrGraph, Directed, Undirected};
use crate::recognition::{classify, Classification};

/// An edge-list description of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Whether edges are oriented `source -> target`.
    pub directed: bool,
    /// Nodes are `0..node_count`.
    pub node_count: usize,
    /// `(source, target)` pairs. Parallel edges and self-loops are allowed.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
}

impl GraphDocument {
    /// Parses a document from JSON.
    ///
    /// # Errors
    /// `Malformed` if the text is not a valid document.
    pub fn from_json(text: &str) -> Result<Self, GraphBuildError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes the document as JSON.
    ///
    /// # Errors
    /// `Malformed` if serialization fails.
    pub fn to_json(&self) -> Result<String, GraphBuildError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks that every edge endpoint names a declared node.
    ///
    /// # Errors
    /// `NodeOutOfBounds` for the first offending edge.
    pub fn validate(&self) -> Result<(), GraphBuildError> {
        let node_count = self.node_count;
        match self
            .edges
            .iter()
            .find(|&&(u, v)| u >= node_count || v >= node_count)
        {
            Some(&(source, target)) => Err(GraphBuildError::NodeOutOfBounds {
                source,
                target,
                node_count,
            }),
            None => Ok(()),
        }
    }

    /// Validates the document and builds a CSR graph of the declared directedness.
    ///
    /// # Errors
    /// `NodeOutOfBounds` if an edge names an undeclared node.
    pub fn build(&self) -> Result<LoadedGraph, GraphBuildError> {
        self.validate()?;
        Ok(if self.directed {
            LoadedGraph::Directed(CsrGraph::from_edges(self.node_count, &self.edges))
        } else {
            LoadedGraph::Undirected(CsrGraph::from_edges(self.node_count, &self.edges))
        })
    }
}

/// A graph built from a [`GraphDocument`], tagged with its directedness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedGraph {
    /// Built from a document with `"directed": true`.
    Directed(CsrGraph<Directed>),
    /// Built from a document with `"directed": false`.
    Undirected(CsrGraph<Undirected>),
}

impl LoadedGraph {
    /// Classifies the loaded graph.
    ///
    /// # Errors
    /// `PointlessConcept` if the document declared zero nodes.
    pub fn classify(&self) -> Result<Classification> {
        match self {
            Self::Directed(graph) => classify(graph),
            Self::Undirected(graph) => classify(graph),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Directed(graph) => graph.node_count(),
            Self::Undirected(graph) => graph.node_count(),
        }
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        match self {
            Self::Directed(graph) => graph.edge_count(),
            Self::Undirected(graph) => graph.edge_count(),
        }
    }
}
