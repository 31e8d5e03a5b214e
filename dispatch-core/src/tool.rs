//! Build tool invocation (made by FontLab https://www.fontlab.com/)

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use log::debug;

use crate::error::DispatchError;
use crate::request::DispatchRequest;

/// Something that turns a request into built artifacts under the target dir.
pub trait BuildTool {
    fn build(&self, request: &DispatchRequest) -> Result<(), DispatchError>;
}

/// Runs `cargo build` as a blocking subprocess with inherited stdio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoTool {
    program: PathBuf,
}

impl CargoTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `$CARGO` when set, otherwise `cargo` from `PATH`.
    pub fn from_env() -> Self {
        Self::from_override(env::var_os("CARGO"))
    }

    fn from_override(raw: Option<OsString>) -> Self {
        match raw {
            Some(program) if !program.is_empty() => Self::new(program),
            _ => Self::new("cargo"),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Assemble the command without running it.
    pub fn command(&self, request: &DispatchRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(request.build_args());
        cmd.envs(request.child_env());
        cmd
    }
}

impl BuildTool for CargoTool {
    fn build(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        let mut cmd = self.command(request);
        debug!("running {} {:?}", self.program.display(), request.build_args());

        let status = cmd.status().map_err(|source| DispatchError::Spawn {
            program: self.program.display().to_string(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(DispatchError::BuildFailed {
                code: failure_code(status),
            })
        }
    }
}

fn failure_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
