pub mod cli;
pub mod codec;
pub mod config;
pub mod connectivity;
pub mod document;
pub mod error;
pub mod events;
pub mod exit;
pub mod graph;
pub mod render;
pub mod session;
pub mod sync;
