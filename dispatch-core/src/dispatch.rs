//! Build-then-install pipeline (made by FontLab https://www.fontlab.com/)

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::install::install_artifact;
use crate::profile::BuildProfile;
use crate::request::DispatchRequest;
use crate::tool::BuildTool;

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub profile: BuildProfile,
    pub artifact: PathBuf,
    pub output: PathBuf,
    pub bytes: u64,
}

/// Everything a dispatch would do, resolved up front. Paths are rendered
/// lossily; the plan is for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchPlan {
    pub profile: BuildProfile,
    pub build_type: String,
    pub app_id: String,
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    pub manifest: PathBuf,
    pub target_dir: PathBuf,
    pub cargo_home: PathBuf,
    pub artifact: PathBuf,
    pub output: PathBuf,
}

impl DispatchPlan {
    pub fn new(request: &DispatchRequest, program: &Path) -> Self {
        Self {
            profile: request.profile(),
            build_type: request.build_type().to_string(),
            app_id: request.app_id().to_string(),
            program: program.to_path_buf(),
            args: request
                .build_args()
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
            env: request
                .child_env()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string_lossy().into_owned()))
                .collect(),
            manifest: request.manifest_path(),
            target_dir: request.target_dir(),
            cargo_home: request.cargo_home(),
            artifact: request.artifact_path(),
            output: request.output().to_path_buf(),
        }
    }
}

/// Announce the profile, run the build, then install the artifact.
///
/// The status line goes to `status_out` before the build starts. When the
/// build fails nothing is copied and `request.output()` is left as it was.
pub fn dispatch(
    request: &DispatchRequest,
    tool: &dyn BuildTool,
    mut status_out: impl Write,
) -> Result<DispatchReport, DispatchError> {
    let profile = request.profile();
    let announced = writeln!(status_out, "{}", profile.status_line())
        .and_then(|_| status_out.flush());
    if let Err(err) = announced {
        warn!("could not write status line: {err}");
    }

    tool.build(request)?;

    let artifact = request.artifact_path();
    let bytes = install_artifact(&artifact, request.output())?;
    info!(
        "installed {} build of {} to {}",
        profile,
        request.binary_name(),
        request.output().display()
    );

    Ok(DispatchReport {
        profile,
        artifact,
        output: request.output().to_path_buf(),
        bytes,
    })
}
