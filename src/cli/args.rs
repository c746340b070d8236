use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "history-graph",
    version,
    about = "Rank, draw and edit the cognitive science history graph"
)]
pub struct Cli {
    /// Config file (defaults to ./history_graph.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// List people by number of connections, least connected first
    Rank {
        /// Draw a bar chart instead of a table
        #[arg(long)]
        bars: bool,
        #[arg(long, default_value = "50")]
        width: usize,
    },
    /// Draw the graph to an SVG file
    Render {
        /// graphviz, circular, spectral, spring or shell
        #[arg(long)]
        layout: Option<String>,
        #[arg(long, short, default_value = "history_graph.svg")]
        out: PathBuf,
    },
    /// Add a person
    AddNode {
        label: String,
        /// Commit and push with this message
        #[arg(long, short)]
        message: Option<String>,
    },
    /// Connect two people
    AddEdge {
        from: String,
        to: String,
        /// Commit and push with this message
        #[arg(long, short)]
        message: Option<String>,
    },
    /// Remove a person and their connections
    RemoveNode {
        label: String,
        /// Commit and push with this message
        #[arg(long, short)]
        message: Option<String>,
    },
    /// Print the effective configuration
    Config,
}
