// src/cli/handlers.rs
use crate::config::Config;
use crate::connectivity;
use crate::exit::HistoryExit;
use crate::render::bars::render_bars;
use crate::render::{Canvas, SvgCanvas};
use crate::session::HistorySession;
use crate::sync::GitCli;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// A document edit requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    AddNode(String),
    AddEdge(String, String),
    RemoveNode(String),
}

fn open_session(config: &Config) -> Result<HistorySession<GitCli>> {
    println!(
        "{} {}",
        "Cloning".blue().bold(),
        config.repository.remote_url
    );
    let session = HistorySession::open(config, GitCli::default())
        .context("Failed to load the history graph")?;
    let doc = session.document();
    println!(
        "{} {} people, {} connections",
        "Loaded".green().bold(),
        doc.nodes.len(),
        doc.edges.len()
    );
    Ok(session)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if the graph cannot be loaded.
pub fn handle_rank(config: &Config, bars: bool, width: usize) -> Result<HistoryExit> {
    let session = open_session(config)?;
    let ranking = session.degree_ranking();

    if bars {
        print!("{}", render_bars(&ranking, width));
    } else {
        for (label, degree) in &ranking {
            println!("{degree:>4}  {label}");
        }
    }

    println!(
        "{} mean degree {:.2}",
        "--".dimmed(),
        connectivity::mean_degree(&ranking)
    );

    let disconnected = session.disconnected_nodes();
    if !disconnected.is_empty() && !config.graph.include_disconnected_nodes {
        println!(
            "{} {} people have no connections and are not shown: {}",
            "note:".yellow(),
            disconnected.len(),
            disconnected.join(", ")
        );
    }
    Ok(HistoryExit::Success)
}

/// Handles the render command.
///
/// # Errors
/// Returns error if loading, layout or writing the SVG fails.
pub fn handle_render(config: &Config, layout: Option<&str>, out: &Path) -> Result<HistoryExit> {
    let session = open_session(config)?;
    let name = layout.unwrap_or(config.render.layout.as_str());

    let (figure, warning) = session.figure(name, &config.render)?;
    if let Some(w) = warning {
        eprintln!("{} {w}", "warning:".yellow().bold());
    }

    let mut canvas = SvgCanvas::new();
    canvas.draw(&figure);
    fs::write(out, canvas.into_svg())
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!("{} {}", "Wrote".green().bold(), out.display());
    Ok(HistoryExit::Success)
}

/// Applies an edit, then either pushes it or only writes the file.
///
/// # Errors
/// Returns error if loading, writing or syncing fails.
pub fn handle_edit(config: &Config, edit: &Edit, message: Option<&str>) -> Result<HistoryExit> {
    let mut session = open_session(config)?;

    let changed = match edit {
        Edit::AddNode(label) => session.add_node(label),
        Edit::AddEdge(from, to) => {
            session.add_edge(from, to);
            true
        }
        Edit::RemoveNode(label) => session.remove_node(label),
    };

    if !changed {
        println!("{}", "Nothing to change.".yellow());
        return Ok(HistoryExit::Success);
    }

    match message {
        Some(msg) => {
            session.sync(msg)?;
            println!(
                "{} {}/{}",
                "Pushed to".green().bold(),
                config.repository.remote_name,
                config.repository.branch
            );
        }
        None => {
            let path = session.save_local()?;
            println!(
                "{} {} (not pushed; pass --message to sync)",
                "Wrote".green().bold(),
                path.display()
            );
        }
    }
    Ok(HistoryExit::Success)
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the config cannot be serialized.
pub fn handle_config(config: &Config) -> Result<HistoryExit> {
    print!("{}", config.to_toml()?);
    Ok(HistoryExit::Success)
}
