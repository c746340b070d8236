// src/connectivity.rs
//! Degree statistics over the derived graph.

use crate::graph::AbstractGraph;

/// Every node with its degree, least connected first.
///
/// The sort is stable on degree alone: equal-degree nodes keep the graph's
/// insertion order.
#[must_use]
pub fn degree_ranking(graph: &AbstractGraph) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = graph
        .labels()
        .map(|label| (label.to_string(), graph.degree(label).unwrap_or(0)))
        .collect();
    ranked.sort_by_key(|(_, degree)| *degree);
    ranked
}

/// Total degree divided by node count; zero for an empty graph.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_degree(ranking: &[(String, usize)]) -> f64 {
    if ranking.is_empty() {
        return 0.0;
    }
    let total: usize = ranking.iter().map(|(_, d)| d).sum();
    total as f64 / ranking.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_and_stable() {
        let mut g = AbstractGraph::new();
        g.add_edge("Hub", "A");
        g.add_edge("Hub", "B");
        g.add_edge("C", "D");

        let ranked = degree_ranking(&g);
        let labels: Vec<&str> = ranked.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["A", "B", "C", "D", "Hub"]);
        assert_eq!(ranked.last().map(|(_, d)| *d), Some(2));
    }

    #[test]
    fn mean_of_triangle_is_two() {
        let mut g = AbstractGraph::new();
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        g.add_edge("A", "C");
        assert!((mean_degree(&degree_ranking(&g)) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_graph() {
        let ranked = degree_ranking(&AbstractGraph::new());
        assert!(ranked.is_empty());
        assert!(mean_degree(&ranked).abs() < f64::EPSILON);
    }
}
