// src/render/figure.rs
//! Everything a canvas needs to draw the graph.

use super::layout::Positions;
use crate::config::RenderConfig;
use crate::graph::AbstractGraph;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub node_color: String,
    /// Marker area in square points.
    pub node_size: f64,
    pub alpha: f64,
    pub edge_color: String,
    pub edge_width: f64,
    pub font_size: u32,
    pub label_x_offset: f64,
    pub label_y_offset: f64,
    /// Figure size in inches.
    pub width: f64,
    pub height: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for DrawStyle {
    fn from(cfg: &RenderConfig) -> Self {
        Self {
            node_color: cfg.node_color.clone(),
            node_size: cfg.node_size,
            alpha: cfg.alpha,
            edge_color: cfg.edge_color.clone(),
            edge_width: cfg.edge_width,
            font_size: cfg.font_size,
            label_x_offset: cfg.label_x_offset,
            label_y_offset: cfg.label_y_offset,
            width: cfg.width,
            height: cfg.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub nodes: Positions,
    /// Node positions shifted by the label offset.
    pub labels: Positions,
    pub edges: Vec<(String, String)>,
    pub style: DrawStyle,
}

impl Figure {
    /// Pairs a layout with the graph's edges and the drawing style.
    #[must_use]
    pub fn compose(graph: &AbstractGraph, nodes: Positions, style: DrawStyle) -> Self {
        let labels = nodes.shifted(style.label_x_offset, style.label_y_offset);
        let edges = graph
            .edges()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        Self {
            nodes,
            labels,
            edges,
            style,
        }
    }
}

/// Draw capability: consumes a composed figure.
pub trait Canvas {
    fn draw(&mut self, figure: &Figure);
}
