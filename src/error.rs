//! Error types for recognition and graph construction.
//!
//! Recognition has exactly two failure modes and they are kept apart so callers can
//! branch on which contract was violated:
//! - [`RecognitionError::PointlessConcept`]: the question has no answer (empty graph).
//! - [`RecognitionError::NotImplementedFor`]: the operation does not exist for this
//!   directedness (e.g. in-degree on an undirected graph).
//!
//! Neither is ever folded into a `false` result.

use core::fmt;

use crate::graph::Direction;

/// The error type for recognition predicates and graph-view queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionError {
    /// The query is undefined on this input, e.g. the graph has no nodes.
    PointlessConcept(&'static str),
    /// The operation is not defined for graphs of the given directedness.
    NotImplementedFor(Direction),
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointlessConcept(reason) => write!(f, "pointless concept: {reason}"),
            Self::NotImplementedFor(direction) => {
                write!(f, "not implemented for {direction} graphs")
            }
        }
    }
}

impl std::error::Error for RecognitionError {}

/// Shorthand for results of recognition and graph-view queries.
pub type Result<T, E = RecognitionError> = core::result::Result<T, E>;

/// The error type for building graphs from serialized documents.
#[derive(Debug)]
pub enum GraphBuildError {
    /// The document could not be parsed or written.
    Malformed(serde_json::Error),
    /// An edge names a node outside `0..node_count`.
    NodeOutOfBounds {
        /// Edge source.
        source: usize,
        /// Edge target.
        target: usize,
        /// Number of nodes declared by the document.
        node_count: usize,
    },
}

impl fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed graph document: {err}"),
            Self::NodeOutOfBounds {
                source,
                target,
                node_count,
            } => write!(
                f,
                "edge {source}->{target} is out of bounds for n={node_count}"
            ),
        }
    }
}

impl std::error::Error for GraphBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::NodeOutOfBounds { .. } => None,
        }
    }
}

impl From<serde_json::Error> for GraphBuildError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let empty = RecognitionError::PointlessConcept("G has no nodes.");
        assert_eq!(empty.to_string(), "pointless concept: G has no nodes.");

        let undirected = RecognitionError::NotImplementedFor(Direction::Undirected);
        assert_eq!(undirected.to_string(), "not implemented for undirected graphs");

        let oob = GraphBuildError::NodeOutOfBounds {
            source: 0,
            target: 7,
            node_count: 3,
        };
        assert_eq!(oob.to_string(), "edge 0->7 is out of bounds for n=3");
    }

    #[test]
    fn test_variants_are_distinct() {
        assert_ne!(
            RecognitionError::PointlessConcept("G has no nodes."),
            RecognitionError::NotImplementedFor(Direction::Directed)
        );
    }
}
