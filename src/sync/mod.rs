// src/sync/mod.rs
//! Clone-on-open and push-on-save of the data file.

pub mod client;
pub mod command;
pub mod git;

pub use client::VersionControlClient;
pub use command::CommandResult;
pub use git::GitCli;

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::Codec;
use crate::document::HistoryDocument;
use crate::error::{HistoryError, Result, SyncStep};
use crate::events::{EventKind, EventLogger};

/// Where the working copy stands relative to the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Absent,
    Cloned,
    Modified,
    Pushed,
    SyncFailed,
}

/// Remote name and branch that pushes target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    pub remote_name: String,
    pub branch: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            remote_name: "origin".to_string(),
            branch: "master".to_string(),
        }
    }
}

/// Drives a [`VersionControlClient`] through clone and add/commit/push.
///
/// Every remote operation runs exactly once per call. A failed sub-step
/// stops the sequence but leaves earlier sub-steps applied.
pub struct Synchronizer<C> {
    client: C,
    codec: Codec,
    settings: SyncSettings,
    work_dir: Option<PathBuf>,
    state: SyncState,
    events: EventLogger,
}

impl<C: VersionControlClient> Synchronizer<C> {
    #[must_use]
    pub fn new(client: C, codec: Codec, settings: SyncSettings) -> Self {
        Self {
            client,
            codec,
            settings,
            work_dir: None,
            state: SyncState::Absent,
            events: EventLogger::disabled(),
        }
    }

    #[must_use]
    pub fn with_events(mut self, events: EventLogger) -> Self {
        self.events = events;
        self
    }

    #[must_use]
    pub fn state(&self) -> SyncState {
        self.state
    }

    #[must_use]
    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    #[must_use]
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Replaces `local_path` with a fresh clone of `remote_url`.
    ///
    /// Anything already at `local_path` is deleted first; there is no
    /// merge with an existing checkout.
    ///
    /// # Errors
    /// `Io` if the old directory cannot be removed, `Clone` if the clone
    /// command fails or cannot be run.
    pub fn initialize(&mut self, remote_url: &str, local_path: &Path) -> Result<()> {
        if local_path.exists() {
            fs::remove_dir_all(local_path).map_err(|e| HistoryError::io(e, local_path))?;
        }
        self.work_dir = None;
        self.state = SyncState::Absent;

        self.events.log(EventKind::CloneStarted {
            remote: remote_url.to_string(),
        });

        let result = self
            .client
            .clone_repo(remote_url, local_path)
            .map_err(|e| HistoryError::Clone {
                remote: remote_url.to_string(),
                output: e.to_string(),
            })?;

        if !result.passed() {
            self.events.log(EventKind::CloneFailed {
                exit_code: result.exit_code(),
            });
            return Err(HistoryError::Clone {
                remote: remote_url.to_string(),
                output: result.output(),
            });
        }

        self.events.log(EventKind::CloneSucceeded {
            path: local_path.display().to_string(),
        });
        self.work_dir = Some(local_path.to_path_buf());
        self.state = SyncState::Cloned;
        Ok(())
    }

    /// Records that the document diverged from what was last pushed.
    pub fn mark_modified(&mut self) {
        if matches!(self.state, SyncState::Cloned | SyncState::Pushed) {
            self.state = SyncState::Modified;
        }
    }

    /// Writes `document` to `file_path` (relative to the clone) and runs
    /// stage, commit and push in that order.
    ///
    /// # Errors
    /// `NotCloned` before [`initialize`](Self::initialize) succeeded, `Io` or
    /// `Format` if the file cannot be written, `Sync` naming the first
    /// sub-step that failed.
    pub fn commit_and_push(
        &mut self,
        document: &HistoryDocument,
        file_path: &Path,
        message: &str,
    ) -> Result<()> {
        let work_dir = self.work_dir.clone().ok_or(HistoryError::NotCloned)?;

        let target = work_dir.join(file_path);
        let bytes = self.codec.write_to(document, &target)?;
        self.events.log(EventKind::DocumentWritten {
            path: target.display().to_string(),
            bytes,
        });

        self.run_step(SyncStep::Stage, |c| c.add(&work_dir, file_path))?;
        self.run_step(SyncStep::Commit, |c| c.commit(&work_dir, message))?;

        let SyncSettings {
            remote_name,
            branch,
        } = self.settings.clone();
        self.run_step(SyncStep::Push, |c| c.push(&work_dir, &remote_name, &branch))?;

        self.events.log(EventKind::PushSucceeded {
            remote: remote_name,
            branch,
        });
        self.state = SyncState::Pushed;
        Ok(())
    }

    fn run_step<F>(&mut self, step: SyncStep, op: F) -> Result<()>
    where
        F: FnOnce(&mut C) -> std::io::Result<CommandResult>,
    {
        let (command, exit_code, duration_ms, output) = match op(&mut self.client) {
            Ok(result) if result.passed() => return Ok(()),
            Ok(result) => (
                result.command().to_string(),
                result.exit_code(),
                result.duration_ms(),
                result.output(),
            ),
            Err(e) => (step.to_string(), -1, 0, e.to_string()),
        };

        self.state = SyncState::SyncFailed;
        self.events.log(EventKind::SyncStepFailed {
            step: step.to_string(),
            command,
            exit_code,
            duration_ms,
        });
        Err(HistoryError::Sync { step, output })
    }
}
