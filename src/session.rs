// src/session.rs
//! Holds the current document and its location; everything else is derived.

use std::path::{Path, PathBuf};

use crate::codec::Codec;
use crate::config::{Config, RenderConfig};
use crate::connectivity;
use crate::document::HistoryDocument;
use crate::error::{HistoryError, Result};
use crate::events::{EventKind, EventLogger};
use crate::graph::{self, AbstractGraph, BuildOptions};
use crate::render::{layout_for, DrawStyle, Figure, LayoutKind, UnknownLayoutWarning};
use crate::sync::{SyncSettings, SyncState, Synchronizer, VersionControlClient};

pub struct HistorySession<C> {
    document: HistoryDocument,
    data_file: PathBuf,
    options: BuildOptions,
    sync: Synchronizer<C>,
    events: EventLogger,
}

impl<C: VersionControlClient> HistorySession<C> {
    /// Clones the configured repository and loads its data file.
    ///
    /// # Errors
    /// Returns error if the clone fails or the data file cannot be decoded.
    pub fn open(config: &Config, client: C) -> Result<Self> {
        let events = config.event_logger();
        let mut sync = Synchronizer::new(client, config.codec(), config.sync_settings())
            .with_events(events.clone());
        sync.initialize(&config.repository.remote_url, &config.clone_dir())?;

        let data_file = config.data_file();
        let work_dir = sync.work_dir().ok_or(HistoryError::NotCloned)?;
        let document = sync.codec().read_from(&work_dir.join(&data_file))?;
        events.log(EventKind::DocumentLoaded {
            nodes: document.nodes.len(),
            edges: document.edges.len(),
        });

        Ok(Self {
            document,
            data_file,
            options: config.build_options(),
            sync,
            events,
        })
    }

    /// A session over an in-memory document with no clone behind it.
    #[must_use]
    pub fn from_document(
        document: HistoryDocument,
        client: C,
        codec: Codec,
        options: BuildOptions,
    ) -> Self {
        Self {
            document,
            data_file: PathBuf::new(),
            options,
            sync: Synchronizer::new(client, codec, SyncSettings::default()),
            events: EventLogger::disabled(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &HistoryDocument {
        &self.document
    }

    #[must_use]
    pub fn sync_state(&self) -> SyncState {
        self.sync.state()
    }

    #[must_use]
    pub fn synchronizer(&self) -> &Synchronizer<C> {
        &self.sync
    }

    /// Full path of the data file inside the clone, once cloned.
    #[must_use]
    pub fn data_path(&self) -> Option<PathBuf> {
        self.sync.work_dir().map(|dir| dir.join(&self.data_file))
    }

    /// Rebuilds the graph from the current document.
    #[must_use]
    pub fn graph(&self) -> AbstractGraph {
        graph::build(&self.document, self.options)
    }

    #[must_use]
    pub fn degree_ranking(&self) -> Vec<(String, usize)> {
        connectivity::degree_ranking(&self.graph())
    }

    #[must_use]
    pub fn disconnected_nodes(&self) -> Vec<String> {
        graph::disconnected_nodes(&self.document)
    }

    /// Lays out the graph with the named algorithm and composes a figure.
    ///
    /// An unknown name falls back to Graphviz; the warning is returned
    /// alongside the figure and logged.
    ///
    /// # Errors
    /// Returns error if the layout engine fails.
    pub fn figure(
        &self,
        layout_name: &str,
        render: &RenderConfig,
    ) -> Result<(Figure, Option<UnknownLayoutWarning>)> {
        let (kind, warning) = LayoutKind::resolve(layout_name);
        if let Some(w) = &warning {
            self.events.log(EventKind::LayoutFallback {
                requested: w.requested.clone(),
            });
        }
        let graph = self.graph();
        let positions = layout_for(kind, render).positions(&graph)?;
        Ok((
            Figure::compose(&graph, positions, DrawStyle::from(render)),
            warning,
        ))
    }

    /// Adds a person unless already present (case-insensitively).
    pub fn add_node(&mut self, label: &str) -> bool {
        let changed = self.document.add_node(label);
        if changed {
            self.sync.mark_modified();
        }
        changed
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.document.add_edge(from, to);
        self.sync.mark_modified();
    }

    /// Removes a person and every edge touching them.
    pub fn remove_node(&mut self, label: &str) -> bool {
        let changed = self.document.remove_node(label);
        if changed {
            self.sync.mark_modified();
        }
        changed
    }

    /// Writes the document into the clone without touching the remote.
    ///
    /// # Errors
    /// `NotCloned` without a clone, or the write error.
    pub fn save_local(&self) -> Result<PathBuf> {
        let path = self.data_path().ok_or(HistoryError::NotCloned)?;
        let bytes = self.sync.codec().write_to(&self.document, &path)?;
        self.events.log(EventKind::DocumentWritten {
            path: path.display().to_string(),
            bytes,
        });
        Ok(path)
    }

    /// Writes the document and pushes it with `message`.
    ///
    /// # Errors
    /// See [`Synchronizer::commit_and_push`].
    pub fn sync(&mut self, message: &str) -> Result<()> {
        let data_file: &Path = &self.data_file;
        self.sync.commit_and_push(&self.document, data_file, message)
    }
}
