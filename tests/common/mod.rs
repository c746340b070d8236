// tests/common/mod.rs
//! A recording stand-in for the `git` client.
#![allow(dead_code)]

use history_graph_core::sync::{CommandResult, VersionControlClient};
use std::fs;
use std::path::Path;

pub const DATA_FILE: &str = "history_net_data.js";

pub const SCENARIO: &str = r#"data = {"nodes":[{"label":"alan turing"},{"label":"claude shannon"}],"edges":[{"from":"alan turing","to":"claude shannon"}]}"#;

/// Records every call. The step named in `fail_on` exits 1 with a
/// diagnostic; a successful clone writes `seed` as the data file. Once
/// `clones_left` reaches zero every further clone fails.
#[derive(Debug, Default)]
pub struct FakeVcs {
    pub calls: Vec<String>,
    pub fail_on: Option<&'static str>,
    pub seed: Option<String>,
    pub clones_left: Option<usize>,
}

impl FakeVcs {
    pub fn failing(step: &'static str) -> Self {
        Self {
            fail_on: Some(step),
            ..Self::default()
        }
    }

    pub fn seeded(text: &str) -> Self {
        Self {
            seed: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn cloning_once() -> Self {
        Self {
            clones_left: Some(1),
            ..Self::default()
        }
    }

    pub fn verbs(&self) -> Vec<&str> {
        self.calls
            .iter()
            .map(|c| c.split_whitespace().next().unwrap_or(""))
            .collect()
    }

    fn finish(&mut self, verb: &'static str, call: String) -> CommandResult {
        self.calls.push(call.clone());
        if self.fail_on == Some(verb) {
            CommandResult::new(call, 1, String::new(), format!("fatal: {verb} rejected"), 0)
        } else {
            CommandResult::success(call)
        }
    }
}

impl VersionControlClient for FakeVcs {
    fn clone_repo(&mut self, remote: &str, dest: &Path) -> std::io::Result<CommandResult> {
        if self.clones_left == Some(0) {
            self.fail_on = Some("clone");
        }
        self.clones_left = self.clones_left.map(|n| n.saturating_sub(1));
        let result = self.finish("clone", format!("clone {remote} {}", dest.display()));
        if result.passed() {
            fs::create_dir_all(dest)?;
            if let Some(seed) = &self.seed {
                fs::write(dest.join(DATA_FILE), seed)?;
            }
        }
        Ok(result)
    }

    fn add(&mut self, _work_dir: &Path, path: &Path) -> std::io::Result<CommandResult> {
        Ok(self.finish("add", format!("add {}", path.display())))
    }

    fn commit(&mut self, _work_dir: &Path, message: &str) -> std::io::Result<CommandResult> {
        Ok(self.finish("commit", format!("commit {message}")))
    }

    fn push(
        &mut self,
        _work_dir: &Path,
        remote: &str,
        branch: &str,
    ) -> std::io::Result<CommandResult> {
        Ok(self.finish("push", format!("push {remote} {branch}")))
    }
}
