use std::sync::Arc;

use force_panel::{Dashboard, EdgeData, GraphData, MemoryControls, NodeData, RecordingEngine};
use serde_json::{json, Value};

#[test]
fn node_attributes_flatten_next_to_the_id() {
    let node = NodeData::new(1).attr("label", "alpha").attr("size", 12);

    let value = serde_json::to_value(&node).expect("node serializes");
    assert_eq!(value, json!({"id": 1, "label": "alpha", "size": 12}));
}

#[test]
fn edges_use_from_and_to_keys() {
    let edge = EdgeData::new("a", "b").attr("weight", 2.5);

    let value = serde_json::to_value(&edge).expect("edge serializes");
    assert_eq!(value, json!({"from": "a", "to": "b", "weight": 2.5}));
}

#[test]
fn graph_serializes_node_and_edge_lists_separately() {
    let mut graph = GraphData::new();
    graph.add_node(NodeData::new("a"));
    graph.add_node(NodeData::new("b").attr("label", "beta"));
    graph.add_edge(EdgeData::new("a", "b"));

    let nodes: Value =
        serde_json::from_str(&graph.nodes_json().expect("nodes serialize")).expect("valid json");
    let edges: Value =
        serde_json::from_str(&graph.edges_json().expect("edges serialize")).expect("valid json");

    assert_eq!(nodes, json!([{"id": "a"}, {"id": "b", "label": "beta"}]));
    assert_eq!(edges, json!([{"from": "a", "to": "b"}]));
}

#[test]
fn dashboard_forwards_graph_data_to_the_engine() {
    let engine = Arc::new(RecordingEngine::new());
    let dashboard = Dashboard::new(MemoryControls::with_all_controls(), engine.clone());

    let mut graph = GraphData::new();
    graph.add_node(NodeData::new(1));
    dashboard.load_graph(&graph);

    assert_eq!(engine.graph_load_count(), 1);
}
