// src/graph/graph.rs
//! The derived undirected graph used for ranking and drawing.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Undirected simple graph over title-cased labels.
///
/// Nodes iterate in first-insertion order. Adding an edge that already
/// exists in either direction is a no-op.
#[derive(Debug, Clone, Default)]
pub struct AbstractGraph {
    inner: UnGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl AbstractGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node if it is not present yet.
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&ix) = self.index.get(label) {
            return ix;
        }
        let ix = self.inner.add_node(label.to_string());
        self.index.insert(label.to_string(), ix);
        ix
    }

    /// Adds an undirected edge, creating missing endpoints.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        let a = self.add_node(a);
        let b = self.add_node(b);
        self.inner.update_edge(a, b, ());
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.inner.node_indices().map(move |ix| self.inner[ix].as_str())
    }

    /// Edges as label pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.edge_references().map(move |e| {
            (
                self.inner[e.source()].as_str(),
                self.inner[e.target()].as_str(),
            )
        })
    }

    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => self.inner.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Number of distinct neighbors, or `None` for an unknown label.
    #[must_use]
    pub fn degree(&self, label: &str) -> Option<usize> {
        let ix = *self.index.get(label)?;
        Some(self.inner.neighbors(ix).collect::<HashSet<_>>().len())
    }

    /// Distinct neighbors of `label`, sorted.
    #[must_use]
    pub fn neighbors(&self, label: &str) -> Vec<&str> {
        let Some(&ix) = self.index.get(label) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self
            .inner
            .neighbors(ix)
            .collect::<HashSet<_>>()
            .into_iter()
            .map(|n| self.inner[n].as_str())
            .collect();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_edge_collapses() {
        let mut g = AbstractGraph::new();
        g.add_edge("A", "B");
        g.add_edge("B", "A");
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree("A"), Some(1));
    }

    #[test]
    fn self_loop_kept() {
        let mut g = AbstractGraph::new();
        g.add_edge("A", "A");
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge("A", "A"));
        assert_eq!(g.degree("A"), Some(1));
    }

    #[test]
    fn labels_keep_insertion_order() {
        let mut g = AbstractGraph::new();
        g.add_edge("C", "A");
        g.add_edge("B", "C");
        assert_eq!(g.labels().collect::<Vec<_>>(), ["C", "A", "B"]);
        assert_eq!(g.neighbors("C"), ["A", "B"]);
    }

    #[test]
    fn unknown_label_has_no_degree() {
        assert_eq!(AbstractGraph::new().degree("nobody"), None);
    }
}
