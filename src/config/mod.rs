// src/config/mod.rs
pub mod types;

pub use self::types::{
    CodecConfig, Config, EventsConfig, GraphConfig, RenderConfig, RepositoryConfig,
};

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::Codec;
use crate::events::EventLogger;
use crate::graph::BuildOptions;
use crate::sync::SyncSettings;

pub const CONFIG_FILE: &str = "history_graph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path` (or `history_graph.toml`), falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or invalid one prints a
    /// warning and yields defaults.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or(Path::new(CONFIG_FILE));
        if !path.exists() {
            return Self::new();
        }
        match fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
            .and_then(|content| Self::parse(&content))
        {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} {e:#}; using defaults", "warning:".yellow().bold());
                Self::new()
            }
        }
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns error if the TOML is invalid or a key has the wrong type.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML in history graph config")
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Saves the configuration to `path` (or `history_graph.toml`).
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = path.unwrap_or(Path::new(CONFIG_FILE));
        let content = self.to_toml()?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    #[must_use]
    pub fn codec(&self) -> Codec {
        Codec::new(self.codec.prefix.clone(), self.codec.pretty)
    }

    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            include_disconnected_nodes: self.graph.include_disconnected_nodes,
        }
    }

    #[must_use]
    pub fn sync_settings(&self) -> SyncSettings {
        SyncSettings {
            remote_name: self.repository.remote_name.clone(),
            branch: self.repository.branch.clone(),
        }
    }

    #[must_use]
    pub fn event_logger(&self) -> EventLogger {
        if self.events.enabled {
            EventLogger::new(Path::new(&self.events.dir))
        } else {
            EventLogger::disabled()
        }
    }

    #[must_use]
    pub fn clone_dir(&self) -> PathBuf {
        PathBuf::from(&self.repository.clone_dir)
    }

    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        PathBuf::from(&self.repository.data_file)
    }
}
