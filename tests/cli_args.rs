// tests/cli_args.rs
use clap::Parser;
use history_graph_core::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_rank_defaults() {
    let cli = Cli::try_parse_from(["history-graph", "rank"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Rank {
            bars: false,
            width: 50
        }
    );
    assert!(cli.config.is_none());
}

#[test]
fn test_render_with_layout_and_global_config() {
    let cli = Cli::try_parse_from([
        "history-graph",
        "render",
        "--layout",
        "spring",
        "--config",
        "alt.toml",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    assert_eq!(
        cli.command,
        Commands::Render {
            layout: Some("spring".into()),
            out: PathBuf::from("history_graph.svg"),
        }
    );
}

#[test]
fn test_add_edge_with_message() {
    let cli = Cli::try_parse_from([
        "history-graph",
        "add-edge",
        "noam chomsky",
        "george miller",
        "-m",
        "link chomsky and miller",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Commands::AddEdge {
            from: "noam chomsky".into(),
            to: "george miller".into(),
            message: Some("link chomsky and miller".into()),
        }
    );
}

#[test]
fn test_missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["history-graph"]).is_err());
}
