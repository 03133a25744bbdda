//! Node and edge records in the engine's wire format.
//!
//! The engine expects nodes as `{"id": ..., ...attrs}` and edges as
//! `{"from": ..., "to": ..., ...attrs}`; free-form attributes (labels,
//! colors, sizes) are flattened alongside the fixed fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single graph node with its display attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: Value,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl NodeData {
    pub fn new(id: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            attrs: Map::new(),
        }
    }

    /// Adds a display attribute, builder style.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// A single graph edge with its display attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub from: Value,
    pub to: Value,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl EdgeData {
    pub fn new(from: impl Into<Value>, to: impl Into<Value>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            attrs: Map::new(),
        }
    }

    /// Adds a display attribute, builder style.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// Complete node/edge dataset handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<NodeData>,
    pub edges: Vec<EdgeData>,
}

impl GraphData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: NodeData) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: EdgeData) {
        self.edges.push(edge);
    }

    /// Serializes the node list to the engine's JSON wire format.
    pub fn nodes_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.nodes)
    }

    /// Serializes the edge list to the engine's JSON wire format.
    pub fn edges_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.edges)
    }
}
