// src/bin/history-graph.rs
use clap::Parser;
use colored::Colorize;

use history_graph_core::cli::{dispatch, Cli};
use history_graph_core::config::Config;
use history_graph_core::exit::HistoryExit;

fn main() -> HistoryExit {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());

    match dispatch::execute(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            HistoryExit::for_error(&e)
        }
    }
}
