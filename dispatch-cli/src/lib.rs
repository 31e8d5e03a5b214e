//! dispatcher CLI (made by FontLab https://www.fontlab.com/)

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};
use log::debug;

use dispatch_core::dispatch::{dispatch, DispatchPlan};
use dispatch_core::error::DispatchError;
use dispatch_core::output::write_plan_json;
use dispatch_core::profile::{BuildProfile, RELEASE_BUILD_TYPE};
use dispatch_core::request::{DispatchRequest, DEFAULT_BINARY_NAME};
use dispatch_core::tool::CargoTool;

/// CLI entrypoint for the dispatcher.
#[derive(Debug, Parser)]
#[command(
    name = "dispatcher",
    about = "Build a Cargo project for Meson and install the binary (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    /// Meson build root; Cargo artifacts land in <BUILD_ROOT>/target
    #[arg(value_hint = ValueHint::DirPath)]
    build_root: PathBuf,

    /// Meson source root containing Cargo.toml
    #[arg(value_hint = ValueHint::DirPath)]
    source_root: PathBuf,

    /// Where the built binary is copied to
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Meson build type; only `release` selects an optimized build
    #[arg(allow_hyphen_values = true)]
    build_type: String,

    /// Application ID forwarded to the build as APP_ID
    #[arg(allow_hyphen_values = true)]
    app_id: String,

    /// Name of the binary target to install
    #[arg(long = "bin-name", default_value = DEFAULT_BINARY_NAME)]
    bin_name: String,

    /// Build tool to run instead of $CARGO or `cargo` on PATH
    #[arg(long = "cargo", value_hint = ValueHint::ExecutablePath)]
    cargo: Option<PathBuf>,

    /// Pass --verbose through to cargo
    #[arg(long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print the resolved plan as JSON instead of building
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    dry_run: bool,
}

/// Parse CLI args and run the dispatch.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    execute(&cli, stdout.lock())
}

fn execute(cli: &Cli, mut out: impl Write) -> Result<()> {
    let request = build_request(cli);
    let tool = match &cli.cargo {
        Some(program) => CargoTool::new(program),
        None => CargoTool::from_env(),
    };

    if cli.dry_run {
        let plan = DispatchPlan::new(&request, tool.program());
        return write_plan_json(&plan, &mut out);
    }

    let report = dispatch(&request, &tool, &mut out)?;
    debug!("copied {} bytes from {}", report.bytes, report.artifact.display());
    Ok(())
}

fn build_request(cli: &Cli) -> DispatchRequest {
    let request = DispatchRequest::new(
        &cli.build_root,
        &cli.source_root,
        &cli.output,
        cli.build_type.as_str(),
        cli.app_id.as_str(),
    )
    .with_binary_name(cli.bin_name.as_str())
    .with_verbose(cli.verbose);

    if request.profile() == BuildProfile::Debug && cli.build_type != "debug" {
        debug!(
            "build type {:?} is not {RELEASE_BUILD_TYPE:?}; using the debug profile",
            cli.build_type
        );
    }

    request
}

/// Process exit code for a failed run.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DispatchError>()
        .map(DispatchError::exit_code)
        .unwrap_or(1)
}

/// True when the failing step already printed its own diagnostics.
pub fn already_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<DispatchError>()
        .is_some_and(DispatchError::already_reported)
}
