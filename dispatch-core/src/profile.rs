//! Build profile selection (made by FontLab https://www.fontlab.com/)

use std::fmt;

use serde::{Deserialize, Serialize};

/// The only build type string that selects an optimized build.
pub const RELEASE_BUILD_TYPE: &str = "release";

/// Cargo profile used for one dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    #[default]
    Debug,
    Release,
}

impl BuildProfile {
    /// Map a Meson build type onto a profile.
    ///
    /// Only the exact string `"release"` selects [`BuildProfile::Release`].
    /// Everything else, including `"Release"`, `" release"` and the empty
    /// string, falls back to [`BuildProfile::Debug`].
    pub fn from_build_type(raw: &str) -> Self {
        if raw == RELEASE_BUILD_TYPE {
            BuildProfile::Release
        } else {
            BuildProfile::Debug
        }
    }

    /// Directory Cargo writes this profile's artifacts into, below the target dir.
    pub fn dir_name(self) -> &'static str {
        match self {
            BuildProfile::Debug => "debug",
            BuildProfile::Release => "release",
        }
    }

    /// Extra `cargo build` arguments selecting this profile.
    pub fn cargo_args(self) -> &'static [&'static str] {
        match self {
            BuildProfile::Debug => &[],
            BuildProfile::Release => &["--release"],
        }
    }

    pub fn status_line(self) -> &'static str {
        match self {
            BuildProfile::Debug => "DEBUG MODE",
            BuildProfile::Release => "RELEASE MODE",
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
