//! Tests for CSR graph implementation.

use super::*;
use crate::error::RecognitionError;
use crate::graph::traits::{ComponentView, Direction, GraphView, Undirected};

#[test]
fn test_csr_from_edges_rows() {
    // 0 -> 1, 2
    // 1 -> 2
    // 2 ->
    // 3 -> 1
    let graph = CsrGraph::<Directed>::from_edges(4, &[(0, 1), (1, 2), (3, 1), (0, 2)]);

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.neighbors(0), &[1, 2]);
    assert_eq!(graph.neighbors(1), &[2]);
    assert!(graph.neighbors(2).is_empty());
    assert_eq!(graph.neighbors(3), &[1]);

    assert_eq!(graph.in_degree(0), Ok(0));
    assert_eq!(graph.in_degree(1), Ok(2));
    assert_eq!(graph.in_degree(2), Ok(2));
    assert_eq!(graph.out_degree(0), 2);
    assert_eq!(graph.degree(1), 3);
}

#[test]
fn test_from_adjacency_matches_from_edges() {
    let adjacency = vec![vec![1, 2], vec![2], vec![], vec![1]];
    let a = CsrGraph::<Directed>::from_adjacency(&adjacency);
    let b = CsrGraph::<Directed>::from_edges(4, &[(0, 1), (0, 2), (1, 2), (3, 1)]);
    assert_eq!(a, b);
}

#[test]
fn test_from_csr_parts_reconstruction() {
    let offsets = vec![0, 2, 3, 3];
    let targets = vec![1, 2, 2];

    let graph = CsrGraph::<Directed>::from_csr_parts(offsets, targets);

    assert_eq!(graph.neighbors(0), &[1, 2]);
    assert_eq!(graph.in_degree(2), Ok(2));
    assert_eq!(
        graph.edges().collect::<Vec<_>>(),
        vec![(0, 1), (0, 2), (1, 2)]
    );
}

#[test]
#[should_panic(expected = "offsets must be monotone")]
fn test_from_csr_parts_rejects_non_monotone() {
    let _ = CsrGraph::<Directed>::from_csr_parts(vec![0, 2, 1], vec![0, 1]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_from_edges_rejects_out_of_bounds() {
    let _ = CsrGraph::<Undirected>::from_edges(2, &[(0, 2)]);
}

#[test]
fn test_parallel_edges_and_self_loops_are_kept() {
    let graph = CsrGraph::<Undirected>::from_edges(2, &[(0, 1), (1, 0), (1, 1)]);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(1, 1));
    assert!(graph.has_edge(0, 1));
    // self-loop contributes two endpoints
    assert_eq!(graph.degree(1), 4);
}

#[test]
fn test_undirected_has_edge_is_symmetric() {
    let graph = CsrGraph::<Undirected>::from_edges(3, &[(0, 1)]);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 0));
    assert!(!graph.has_edge(1, 2));

    let directed = CsrGraph::<Directed>::from_edges(3, &[(0, 1)]);
    assert!(!directed.has_edge(1, 0));
}

#[test]
fn test_empty_graph() {
    let graph = CsrGraph::<Undirected>::from_edges(0, &[]);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(
        graph.is_connected(),
        Err(RecognitionError::PointlessConcept(
            crate::graph::NULL_GRAPH_CONNECTIVITY
        ))
    );
    assert_eq!(graph.connected_components(), Ok(Vec::new()));
}

#[test]
fn test_weak_components_ignore_direction() {
    // 0 -> 1 <- 2 ; 3 -> 4 -> 3 ; 5
    let graph = CsrGraph::<Directed>::from_edges(6, &[(0, 1), (2, 1), (3, 4), (4, 3)]);
    let components = graph.weakly_connected_components().unwrap();

    assert_eq!(components.len(), 3);
    assert_eq!(components[0].nodes(), &[0, 1, 2]);
    assert_eq!(components[0].edge_count(), 2);
    assert_eq!(components[1].nodes(), &[3, 4]);
    assert_eq!(components[1].edge_count(), 2);
    assert_eq!(components[2].nodes(), &[5]);
    assert_eq!(components[2].node_count(), 1);
    assert_eq!(components[2].edge_count(), 0);

    assert_eq!(graph.is_weakly_connected(), Ok(false));
}

#[test]
fn test_direction_contract() {
    let directed = CsrGraph::<Directed>::from_edges(2, &[(0, 1)]);
    let undirected = CsrGraph::<Undirected>::from_edges(2, &[(0, 1)]);

    let wrong_directed = RecognitionError::NotImplementedFor(Direction::Directed);
    let wrong_undirected = RecognitionError::NotImplementedFor(Direction::Undirected);

    assert_eq!(directed.connected_components().unwrap_err(), wrong_directed);
    assert_eq!(directed.is_connected().unwrap_err(), wrong_directed);
    assert_eq!(directed.is_weakly_connected(), Ok(true));

    assert_eq!(undirected.weakly_connected_components().unwrap_err(), wrong_undirected);
    assert_eq!(undirected.is_weakly_connected().unwrap_err(), wrong_undirected);
    assert_eq!(undirected.in_degree(1).unwrap_err(), wrong_undirected);
    assert_eq!(undirected.is_connected(), Ok(true));
}

#[test]
fn test_node_ids_cover_arena() {
    let graph = CsrGraph::<Directed>::from_edges(4, &[]);
    assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}
