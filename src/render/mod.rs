// src/render/mod.rs
//! Layout, figure composition and output for the history graph.

pub mod bars;
pub mod engines;
pub mod figure;
pub mod graphviz;
pub mod layout;
pub mod svg;

pub use engines::{CircularLayout, ShellLayout, SpectralLayout, SpringLayout};
pub use figure::{Canvas, DrawStyle, Figure};
pub use graphviz::GraphvizLayout;
pub use layout::{Layout, LayoutKind, Point, Positions, UnknownLayoutWarning};
pub use svg::SvgCanvas;

use crate::config::RenderConfig;

/// Picks the engine for `kind`.
#[must_use]
pub fn layout_for(kind: LayoutKind, config: &RenderConfig) -> Box<dyn Layout> {
    match kind {
        LayoutKind::Graphviz => Box::new(GraphvizLayout::new(config.graphviz_program.clone())),
        LayoutKind::Circular => Box::new(CircularLayout),
        LayoutKind::Spectral => Box::new(SpectralLayout),
        LayoutKind::Spring => Box::new(SpringLayout::default()),
        LayoutKind::Shell => Box::new(ShellLayout),
    }
}
