//! Drives the real subprocess path with a stand-in `cargo` script.
#![cfg(unix)]

use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use dispatch_core::dispatch::dispatch;
use dispatch_core::error::DispatchError;
use dispatch_core::request::DispatchRequest;
use dispatch_core::tool::CargoTool;
use tempfile::{tempdir, TempDir};

/// Writes the artifact for whichever profile was requested, recording the
/// forwarded environment inside it.
const FAKE_CARGO: &str = r#"#!/bin/sh
profile=debug
for arg in "$@"; do
    [ "$arg" = "--release" ] && profile=release
done
mkdir -p "$CARGO_TARGET_DIR/$profile"
{
    echo "profile=$profile"
    echo "args=$*"
    echo "app_id=$APP_ID"
    echo "buildtype=$BUILDTYPE"
    echo "source=$MESON_SOURCE_ROOT"
} > "$CARGO_TARGET_DIR/$profile/crypto-usage-analyzer"
"#;

const FAILING_CARGO: &str = "#!/bin/sh\necho 'error: could not compile' >&2\nexit 3\n";

/// Succeeds without producing anything.
const LAZY_CARGO: &str = "#!/bin/sh\nexit 0\n";

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    let mut perms = fs::metadata(&path).expect("metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod");
    path
}

struct Fixture {
    tmp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let tmp = tempdir().expect("tempdir");
        fs::create_dir_all(tmp.path().join("out")).expect("mkdir out");
        Self { tmp }
    }

    fn request(&self, build_type: &str) -> DispatchRequest {
        DispatchRequest::new(
            self.tmp.path().join("build"),
            self.tmp.path().join("src"),
            self.output(),
            build_type,
            "myapp",
        )
    }

    fn output(&self) -> PathBuf {
        self.tmp.path().join("out/app")
    }

    fn tool(&self, body: &str) -> CargoTool {
        CargoTool::new(write_script(self.tmp.path(), "cargo", body))
    }
}

#[test]
fn release_build_installs_release_artifact() {
    let fx = Fixture::new();
    let req = fx.request("release");
    let mut status = Vec::new();

    let report = dispatch(&req, &fx.tool(FAKE_CARGO), &mut status).expect("dispatch");

    assert_eq!(status, b"RELEASE MODE\n");
    assert_eq!(
        report.artifact,
        fx.tmp.path().join("build/target/release/crypto-usage-analyzer")
    );
    let installed = fs::read_to_string(fx.output()).expect("read output");
    assert!(installed.contains("profile=release"));
    assert!(installed.contains("--release"));
    assert!(installed.contains("app_id=myapp"));
}

#[test]
fn unrecognised_build_types_install_debug_artifact() {
    for build_type in ["debug", "garbage", "Release", ""] {
        let fx = Fixture::new();
        let req = fx.request(build_type);
        let mut status = Vec::new();

        dispatch(&req, &fx.tool(FAKE_CARGO), &mut status).expect("dispatch");

        assert_eq!(status, b"DEBUG MODE\n", "build type {build_type:?}");
        let installed = fs::read_to_string(fx.output()).expect("read output");
        assert!(installed.contains("profile=debug"));
        assert!(!installed.contains("--release"));
        assert!(installed.contains(&format!("buildtype={build_type}\n")));
    }
}

#[test]
fn manifest_path_points_into_source_root() {
    let fx = Fixture::new();
    let req = fx.request("debug");

    dispatch(&req, &fx.tool(FAKE_CARGO), Vec::new()).expect("dispatch");

    let installed = fs::read_to_string(fx.output()).expect("read output");
    let manifest = fx.tmp.path().join("src/Cargo.toml");
    assert!(installed.contains(&format!("--manifest-path {}", manifest.display())));
}

#[test]
fn existing_output_is_overwritten() {
    let fx = Fixture::new();
    fs::write(fx.output(), b"old").expect("seed output");

    dispatch(&fx.request("release"), &fx.tool(FAKE_CARGO), Vec::new()).expect("dispatch");

    let installed = fs::read_to_string(fx.output()).expect("read output");
    assert!(installed.starts_with("profile=release"));
}

#[test]
fn failing_build_propagates_exit_code_without_copy() {
    let fx = Fixture::new();

    let err = dispatch(&fx.request("release"), &fx.tool(FAILING_CARGO), Vec::new())
        .expect_err("build fails");

    assert!(matches!(err, DispatchError::BuildFailed { code: 3 }));
    assert_eq!(err.exit_code(), 3);
    assert!(!fx.output().exists());
}

#[test]
fn missing_artifact_is_an_install_failure() {
    let fx = Fixture::new();

    let err = dispatch(&fx.request("debug"), &fx.tool(LAZY_CARGO), Vec::new())
        .expect_err("install fails");

    assert!(matches!(err, DispatchError::Install { .. }));
    assert_ne!(err.exit_code(), 0);
    assert!(!fx.output().exists());
}

#[test]
fn non_utf8_build_root_builds_and_installs_from_same_tree() {
    let fx = Fixture::new();
    let build_root = fx.tmp.path().join(OsStr::from_bytes(b"build-\xff"));
    let req = DispatchRequest::new(
        &build_root,
        fx.tmp.path().join("src"),
        fx.output(),
        "debug",
        "myapp",
    );

    dispatch(&req, &fx.tool(FAKE_CARGO), Vec::new()).expect("dispatch");

    assert!(build_root
        .join("target/debug/crypto-usage-analyzer")
        .exists());
    let installed = fs::read_to_string(fx.output()).expect("read output");
    assert!(installed.starts_with("profile=debug"));
}
