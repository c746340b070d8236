//! Result of an external command execution.

use serde::Serialize;

/// Result of an external command execution.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResult {
    /// The command that was executed (display form).
    command: String,
    /// Process exit code (-1 if unavailable, e.g., killed by signal).
    exit_code: i32,
    stdout: String,
    stderr: String,
    duration_ms: u64,
}

impl CommandResult {
    #[must_use]
    pub fn new(
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
        duration_ms: u64,
    ) -> Self {
        Self {
            command,
            exit_code,
            stdout,
            stderr,
            duration_ms,
        }
    }

    /// Shorthand for a zero-exit result with no output.
    #[must_use]
    pub fn success(command: impl Into<String>) -> Self {
        Self::new(command.into(), 0, String::new(), String::new(), 0)
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Whether the command succeeded (exit code 0).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Combined stdout and stderr output, trimmed.
    #[must_use]
    pub fn output(&self) -> String {
        let out = self.stdout.trim();
        let err = self.stderr.trim();
        if err.is_empty() {
            out.to_string()
        } else if out.is_empty() {
            err.to_string()
        } else {
            format!("{out}\n{err}")
        }
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_only_on_zero() {
        assert!(CommandResult::success("git add").passed());
        let r = CommandResult::new("git push".into(), 128, String::new(), String::new(), 0);
        assert!(!r.passed());
        let killed = CommandResult::new("git push".into(), -1, String::new(), String::new(), 0);
        assert!(!killed.passed());
    }

    #[test]
    fn output_combines_streams() {
        let r = CommandResult::new("git".into(), 1, "out\n".into(), "err\n".into(), 3);
        assert_eq!(r.output(), "out\nerr");
        let only_err = CommandResult::new("git".into(), 1, String::new(), "fatal".into(), 0);
        assert_eq!(only_err.output(), "fatal");
    }
}
