// src/events.rs
//! Machine-readable event logging for load and sync activity.
//!
//! Events are appended to `<dir>/events.jsonl`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    CloneStarted {
        remote: String,
    },
    CloneSucceeded {
        path: String,
    },
    CloneFailed {
        exit_code: i32,
    },
    DocumentLoaded {
        nodes: usize,
        edges: usize,
    },
    DocumentWritten {
        path: String,
        bytes: usize,
    },
    SyncStepFailed {
        step: String,
        command: String,
        exit_code: i32,
        duration_ms: u64,
    },
    PushSucceeded {
        remote: String,
        branch: String,
    },
    LayoutFallback {
        requested: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub timestamp: u64,
    pub kind: EventKind,
}

#[derive(Debug, Clone)]
pub struct EventLogger {
    log_path: Option<PathBuf>,
}

impl EventLogger {
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        Self {
            log_path: Some(dir.join("events.jsonl")),
        }
    }

    /// A logger that drops every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self { log_path: None }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    pub fn log(&self, kind: EventKind) {
        let Some(path) = &self.log_path else {
            return;
        };
        // Best-effort: a failed log write never fails the operation.
        if let Ok(json) = Self::serialize_event(kind) {
            let _ = Self::append_to_file(path, &json);
        }
    }

    fn serialize_event(kind: EventKind) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = HistoryEvent { timestamp, kind };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(path: &Path, line: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
