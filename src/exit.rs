// src/exit.rs
//! Process exit codes for `history-graph`.

use std::process::Termination;

use crate::error::HistoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum HistoryExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (I/O, config, layout).
    Error = 1,
    /// The data file could not be decoded.
    InvalidData = 2,
    /// Clone, stage, commit or push failed.
    SyncFailed = 3,
}

impl HistoryExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit code for an error chain, looking for a [`HistoryError`] in it.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<HistoryError>() {
            Some(HistoryError::Format(_) | HistoryError::Schema(_)) => Self::InvalidData,
            Some(
                HistoryError::Clone { .. } | HistoryError::Sync { .. } | HistoryError::NotCloned,
            ) => Self::SyncFailed,
            _ => Self::Error,
        }
    }
}

impl Termination for HistoryExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let code = self.code() as u8;
        std::process::ExitCode::from(code)
    }
}
