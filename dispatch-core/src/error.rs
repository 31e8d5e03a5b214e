//! Dispatch failures (made by FontLab https://www.fontlab.com/)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code a shell reports when a command cannot be executed.
pub const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("failed to run build tool {program}: {source}")]
    Spawn { program: String, source: io::Error },
    /// The build tool ran and reported failure. It has already printed its
    /// own diagnostics.
    #[error("build tool exited with status {code}")]
    BuildFailed { code: i32 },
    #[error("failed to install {} to {}: {source}", .from.display(), .to.display())]
    Install {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

impl DispatchError {
    /// Process exit code the dispatcher should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::Spawn { .. } => SPAWN_FAILURE_EXIT_CODE,
            DispatchError::BuildFailed { code } if *code != 0 => *code,
            DispatchError::BuildFailed { .. } => 1,
            DispatchError::Install { .. } => 1,
        }
    }

    /// Whether the failing step already reported the problem itself.
    pub fn already_reported(&self) -> bool {
        matches!(self, DispatchError::BuildFailed { .. })
    }
}
