use arbor::{
    classify, classify_all, CsrGraph, Directed, GraphBuildError, GraphClass, GraphDocument,
    LoadedGraph, RecognitionError,
};

#[test]
fn directed_document_builds_and_classifies() {
    let doc = GraphDocument::from_json(
        r#"{ "directed": true, "node_count": 4, "edges": [[0, 1], [0, 2], [2, 3]] }"#,
    )
    .unwrap();

    let graph = doc.build().unwrap();
    assert!(matches!(graph, LoadedGraph::Directed(_)));
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);

    let report = graph.classify().unwrap();
    assert_eq!(report.strongest(), Some(GraphClass::Arborescence));
}

#[test]
fn undirected_document_builds_undirected_graph() {
    let doc = GraphDocument {
        directed: false,
        node_count: 3,
        edges: vec![(0, 1), (1, 2), (2, 0)],
    };
    let graph = doc.build().unwrap();
    assert!(matches!(graph, LoadedGraph::Undirected(_)));

    let report = graph.classify().unwrap();
    assert!(!report.forest);
    assert_eq!(report.strongest(), None);
}

#[test]
fn document_survives_json_round_trip() {
    let doc = GraphDocument {
        directed: true,
        node_count: 2,
        edges: vec![(0, 1), (0, 1)],
    };
    let text = doc.to_json().unwrap();
    assert_eq!(GraphDocument::from_json(&text).unwrap(), doc);
}

#[test]
fn out_of_bounds_edge_is_a_build_error() {
    let doc = GraphDocument {
        directed: false,
        node_count: 2,
        edges: vec![(0, 2)],
    };
    let err = doc.build().unwrap_err();
    assert!(matches!(
        err,
        GraphBuildError::NodeOutOfBounds {
            source: 0,
            target: 2,
            node_count: 2
        }
    ));
}

#[test]
fn empty_document_loads_but_cannot_be_classified() {
    let doc = GraphDocument::from_json(r#"{ "directed": true, "node_count": 0, "edges": [] }"#)
        .unwrap();
    let graph = doc.build().unwrap();
    assert!(matches!(
        graph.classify(),
        Err(RecognitionError::PointlessConcept(_))
    ));
}

#[test]
fn classification_serializes_with_nulls_for_undirected() {
    let doc = GraphDocument {
        directed: false,
        node_count: 2,
        edges: vec![(0, 1)],
    };
    let report = doc.build().unwrap().classify().unwrap();
    let value = serde_json::to_value(report).unwrap();

    assert_eq!(value["tree"], serde_json::Value::Bool(true));
    assert!(value["branching"].is_null());
    assert_eq!(
        serde_json::to_value(GraphClass::Arborescence).unwrap(),
        serde_json::json!("arborescence")
    );
}

#[test]
fn classify_all_preserves_order_and_errors() {
    let graphs = vec![
        CsrGraph::<Directed>::from_edges(3, &[(0, 1), (1, 2)]),
        CsrGraph::<Directed>::from_edges(0, &[]),
        CsrGraph::<Directed>::from_edges(2, &[(0, 1), (1, 0)]),
    ];

    let results = classify_all(&graphs);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], classify(&graphs[0]));
    assert!(matches!(
        results[1],
        Err(RecognitionError::PointlessConcept(_))
    ));
    assert_eq!(results[2].as_ref().map(|r| r.forest), Ok(false));
}
