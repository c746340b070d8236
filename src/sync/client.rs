// src/sync/client.rs
//! The version-control capability the synchronizer drives.

use std::path::Path;

use super::command::CommandResult;

/// The four remote operations the synchronizer needs.
///
/// Implementations report what the command did; a non-zero exit code is not
/// an `Err`. `Err` is reserved for failing to run the command at all.
pub trait VersionControlClient {
    /// Clones `remote` into `dest`.
    ///
    /// # Errors
    /// Returns error if the command could not be started.
    fn clone_repo(&mut self, remote: &str, dest: &Path) -> std::io::Result<CommandResult>;

    /// Stages `path` (relative to `work_dir`).
    ///
    /// # Errors
    /// Returns error if the command could not be started.
    fn add(&mut self, work_dir: &Path, path: &Path) -> std::io::Result<CommandResult>;

    /// Commits staged changes with `message`.
    ///
    /// # Errors
    /// Returns error if the command could not be started.
    fn commit(&mut self, work_dir: &Path, message: &str) -> std::io::Result<CommandResult>;

    /// Pushes `branch` to the remote named `remote`.
    ///
    /// # Errors
    /// Returns error if the command could not be started.
    fn push(&mut self, work_dir: &Path, remote: &str, branch: &str)
        -> std::io::Result<CommandResult>;
}
