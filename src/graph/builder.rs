// src/graph/builder.rs
//! Turns a [`HistoryDocument`] into an [`AbstractGraph`].

use std::collections::HashSet;

use super::graph::AbstractGraph;
use super::title::title_case;
use crate::document::HistoryDocument;

/// Options controlling graph construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Also add nodes that no edge references. Off by default, so the graph
    /// only holds people with at least one connection.
    pub include_disconnected_nodes: bool,
}

/// Builds the graph from the document's edges.
///
/// Endpoints are title-cased, so differently-cased references to the same
/// person unify. The document is not modified.
#[must_use]
pub fn build(document: &HistoryDocument, options: BuildOptions) -> AbstractGraph {
    let mut graph = AbstractGraph::new();

    for edge in &document.edges {
        graph.add_edge(&title_case(&edge.from), &title_case(&edge.to));
    }

    if options.include_disconnected_nodes {
        for label in disconnected_nodes(document) {
            graph.add_node(&label);
        }
    }

    graph
}

/// Title-cased labels of node records no edge references, in document order.
#[must_use]
pub fn disconnected_nodes(document: &HistoryDocument) -> Vec<String> {
    let connected: HashSet<String> = document
        .edges
        .iter()
        .flat_map(|e| [title_case(&e.from), title_case(&e.to)])
        .collect();

    let mut seen = HashSet::new();
    document
        .nodes
        .iter()
        .map(|n| title_case(&n.label))
        .filter(|label| !connected.contains(label))
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{EdgeRecord, NodeRecord};

    #[test]
    fn disconnected_set_ignores_case() {
        let doc = HistoryDocument::new(
            vec![
                NodeRecord::new("alan turing"),
                NodeRecord::new("Herbert Simon"),
                NodeRecord::new("herbert simon"),
            ],
            vec![EdgeRecord::new("Alan Turing", "Claude Shannon")],
        );
        assert_eq!(disconnected_nodes(&doc), ["Herbert Simon"]);
    }

    #[test]
    fn edge_only_endpoints_become_nodes() {
        let doc = HistoryDocument::new(vec![], vec![EdgeRecord::new("a", "b")]);
        let g = build(&doc, BuildOptions::default());
        assert!(g.contains("A"));
        assert!(g.contains("B"));
    }
}
