//! Dispatch parameters and derived build paths (made by FontLab https://www.fontlab.com/)

use std::env::consts::EXE_SUFFIX;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::profile::BuildProfile;

/// Binary produced by the application manifest.
pub const DEFAULT_BINARY_NAME: &str = "crypto-usage-analyzer";

/// Everything a single dispatch needs, passed explicitly instead of through
/// the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    build_root: PathBuf,
    source_root: PathBuf,
    output: PathBuf,
    build_type: String,
    profile: BuildProfile,
    app_id: String,
    binary_name: String,
    verbose: bool,
}

impl DispatchRequest {
    pub fn new(
        build_root: impl Into<PathBuf>,
        source_root: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        build_type: impl Into<String>,
        app_id: impl Into<String>,
    ) -> Self {
        let build_type = build_type.into();
        let profile = BuildProfile::from_build_type(&build_type);
        Self {
            build_root: build_root.into(),
            source_root: source_root.into(),
            output: output.into(),
            build_type,
            profile,
            app_id: app_id.into(),
            binary_name: DEFAULT_BINARY_NAME.to_string(),
            verbose: false,
        }
    }

    pub fn with_binary_name(mut self, name: impl Into<String>) -> Self {
        self.binary_name = name.into();
        self
    }

    /// Forward `--verbose` to the build tool.
    pub fn with_verbose(mut self, yes: bool) -> Self {
        self.verbose = yes;
        self
    }

    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Build type exactly as the caller passed it.
    pub fn build_type(&self) -> &str {
        &self.build_type
    }

    pub fn profile(&self) -> BuildProfile {
        self.profile
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.source_root.join("Cargo.toml")
    }

    pub fn target_dir(&self) -> PathBuf {
        self.build_root.join("target")
    }

    pub fn cargo_home(&self) -> PathBuf {
        self.build_root.join("cargo-home")
    }

    /// Where Cargo leaves the binary for the selected profile.
    pub fn artifact_path(&self) -> PathBuf {
        self.target_dir()
            .join(self.profile.dir_name())
            .join(format!("{}{EXE_SUFFIX}", self.binary_name))
    }

    /// Arguments after the program name for `cargo build`.
    pub fn build_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "build".into(),
            "--manifest-path".into(),
            self.manifest_path().into_os_string(),
        ];
        args.extend(self.profile.cargo_args().iter().map(OsString::from));
        if self.verbose {
            args.push("--verbose".into());
        }
        args
    }

    /// Variables set on the build tool's process. The dispatcher's own
    /// environment is never modified. Paths are passed through byte for byte.
    pub fn child_env(&self) -> Vec<(&'static str, OsString)> {
        vec![
            ("MESON_BUILD_ROOT", self.build_root.as_os_str().to_owned()),
            ("MESON_SOURCE_ROOT", self.source_root.as_os_str().to_owned()),
            ("CARGO_TARGET_DIR", self.target_dir().into_os_string()),
            ("CARGO_HOME", self.cargo_home().into_os_string()),
            ("OUTPUT", self.output.as_os_str().to_owned()),
            ("BUILDTYPE", self.build_type.as_str().into()),
            ("APP_ID", self.app_id.as_str().into()),
        ]
    }
}
