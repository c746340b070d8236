// src/error.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One of the three remote-sync sub-steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStep {
    Stage,
    Commit,
    Push,
}

impl fmt::Display for SyncStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stage => "stage",
            Self::Commit => "commit",
            Self::Push => "push",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Unreadable history data: {0}")]
    Format(String),

    #[error("History data has the wrong shape: {0}")]
    Schema(String),

    #[error("Cloning {remote} failed! Error message:\n{output}")]
    Clone { remote: String, output: String },

    #[error("Sync failed at {step}! Error message:\n{output}")]
    Sync { step: SyncStep, output: String },

    #[error("Repository has not been cloned yet")]
    NotCloned,

    #[error("Layout failed: {0}")]
    Layout(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl HistoryError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// The failing sub-step, for sync errors.
    #[must_use]
    pub fn sync_step(&self) -> Option<SyncStep> {
        match self {
            Self::Sync { step, .. } => Some(*step),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;

// Allow `?` on std::io::Error by converting to HistoryError::Io with unknown path.
impl From<std::io::Error> for HistoryError {
    fn from(source: std::io::Error) -> Self {
        HistoryError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
