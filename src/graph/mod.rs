// src/graph/mod.rs
pub mod builder;
pub mod graph;
pub mod title;

pub use builder::{build, disconnected_nodes, BuildOptions};
pub use graph::AbstractGraph;
pub use title::title_case;
