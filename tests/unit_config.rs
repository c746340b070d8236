// tests/unit_config.rs
use history_graph_core::config::Config;
use std::fs;
use tempfile::tempdir;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn test_defaults_match_upstream_repository() {
    let config = Config::new();
    assert_eq!(
        config.repository.remote_url,
        "https://github.com/jyoshimi/history_graph"
    );
    assert_eq!(config.repository.data_file, "history_net_data.js");
    assert_eq!(config.repository.branch, "master");
    assert_eq!(config.codec.prefix, "data = ");
    assert!(!config.graph.include_disconnected_nodes);
    assert_eq!(config.render.layout, "graphviz");
}

#[test]
fn test_partial_toml_keeps_other_defaults() -> Result<()> {
    let config = Config::parse(
        r#"
[repository]
branch = "main"

[graph]
include_disconnected_nodes = true
"#,
    )?;
    assert_eq!(config.repository.branch, "main");
    assert_eq!(config.repository.remote_name, "origin");
    assert!(config.build_options().include_disconnected_nodes);
    assert_eq!(config.sync_settings().branch, "main");
    Ok(())
}

#[test]
fn test_invalid_toml_is_error() {
    assert!(Config::parse("[graph]\ninclude_disconnected_nodes = \"maybe\"").is_err());
}

#[test]
fn test_load_falls_back_on_bad_file() -> Result<()> {
    let d = tempdir()?;
    let path = d.path().join("history_graph.toml");
    fs::write(&path, "this is = = not toml")?;
    assert_eq!(Config::load(Some(&path)), Config::new());
    Ok(())
}

#[test]
fn test_load_missing_file_gives_defaults() -> Result<()> {
    let d = tempdir()?;
    assert_eq!(Config::load(Some(&d.path().join("absent.toml"))), Config::new());
    Ok(())
}

#[test]
fn test_save_then_load() -> Result<()> {
    let d = tempdir()?;
    let path = d.path().join("history_graph.toml");
    let mut config = Config::new();
    config.render.layout = "spring".into();
    config.codec.pretty = true;

    config.save(Some(&path))?;
    assert_eq!(Config::load(Some(&path)), config);
    Ok(())
}

#[test]
fn test_disabled_events_have_no_path() {
    let mut config = Config::new();
    config.events.enabled = false;
    assert!(config.event_logger().path().is_none());
}
