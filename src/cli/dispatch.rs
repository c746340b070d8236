//! Command dispatch logic extracted from the binary.

use super::args::Commands;
use super::handlers::{handle_config, handle_edit, handle_rank, handle_render, Edit};
use crate::config::Config;
use crate::exit::HistoryExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config: &Config) -> Result<HistoryExit> {
    match command {
        Commands::Rank { bars, width } => handle_rank(config, bars, width),
        Commands::Render { layout, out } => handle_render(config, layout.as_deref(), &out),
        Commands::AddNode { label, message } => {
            handle_edit(config, &Edit::AddNode(label), message.as_deref())
        }
        Commands::AddEdge { from, to, message } => {
            handle_edit(config, &Edit::AddEdge(from, to), message.as_deref())
        }
        Commands::RemoveNode { label, message } => {
            handle_edit(config, &Edit::RemoveNode(label), message.as_deref())
        }
        Commands::Config => handle_config(config),
    }
}
