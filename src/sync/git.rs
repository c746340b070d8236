// src/sync/git.rs
use std::path::Path;
use std::process::Command;
use std::time::Instant;

use super::client::VersionControlClient;
use super::command::CommandResult;

/// [`VersionControlClient`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, cwd: Option<&Path>, args: &[&str]) -> std::io::Result<CommandResult> {
        let start = Instant::now();
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        let output = cmd.output()?;

        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = start.elapsed().as_millis() as u64;
        Ok(CommandResult::new(
            format!("{} {}", self.program, args.join(" ")),
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            duration_ms,
        ))
    }
}

impl VersionControlClient for GitCli {
    fn clone_repo(&mut self, remote: &str, dest: &Path) -> std::io::Result<CommandResult> {
        let dest = dest.to_string_lossy();
        self.run(None, &["clone", remote, &dest])
    }

    fn add(&mut self, work_dir: &Path, path: &Path) -> std::io::Result<CommandResult> {
        let path = path.to_string_lossy();
        self.run(Some(work_dir), &["add", &path])
    }

    fn commit(&mut self, work_dir: &Path, message: &str) -> std::io::Result<CommandResult> {
        self.run(Some(work_dir), &["commit", "-m", message])
    }

    fn push(
        &mut self,
        work_dir: &Path,
        remote: &str,
        branch: &str,
    ) -> std::io::Result<CommandResult> {
        self.run(Some(work_dir), &["push", remote, branch])
    }
}
