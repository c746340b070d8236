// src/document.rs
//! The persisted node/edge records.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::graph::title_case;

/// Root persisted entity: the node list and the edge list, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// A person in the graph.
///
/// Fields other than `id` and `label` (colors, groups, ...) are carried
/// through untouched so a load/save cycle does not lose them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// `None` when the key is absent; an explicit `null` is `Some(Null)`.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Value>,
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A connection between two people, referenced by their raw names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl NodeRecord {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            extra: Map::new(),
        }
    }
}

impl EdgeRecord {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            extra: Map::new(),
        }
    }

    /// True if either endpoint names `label` once both are title-cased.
    #[must_use]
    pub fn touches(&self, label: &str) -> bool {
        let wanted = title_case(label);
        title_case(&self.from) == wanted || title_case(&self.to) == wanted
    }
}

impl HistoryDocument {
    #[must_use]
    pub fn new(nodes: Vec<NodeRecord>, edges: Vec<EdgeRecord>) -> Self {
        Self { nodes, edges }
    }

    /// Appends a node unless one with the same title-cased label exists.
    /// Returns whether the document changed.
    pub fn add_node(&mut self, label: &str) -> bool {
        let wanted = title_case(label);
        if self.nodes.iter().any(|n| title_case(&n.label) == wanted) {
            return false;
        }
        self.nodes.push(NodeRecord::new(label));
        true
    }

    /// Appends an edge verbatim.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.edges.push(EdgeRecord::new(from, to));
    }

    /// Removes every node record matching `label` and every edge touching it.
    /// Returns whether anything was removed.
    pub fn remove_node(&mut self, label: &str) -> bool {
        let wanted = title_case(label);
        let before = self.nodes.len() + self.edges.len();
        self.nodes.retain(|n| title_case(&n.label) != wanted);
        self.edges.retain(|e| !e.touches(label));
        before != self.nodes.len() + self.edges.len()
    }
}
