//! dispatch-core: build a Cargo project on behalf of Meson and install the binary.
//!
//! Meson hands over five positional values (build root, source root, output
//! path, build type, application id). They become a [`request::DispatchRequest`],
//! which fixes the [`profile::BuildProfile`] and every derived path. [`dispatch::dispatch`]
//! then prints the profile's status line, runs one [`tool::BuildTool`] invocation
//! and copies the artifact into place.
//!
//! ```rust,no_run
//! use dispatch_core::dispatch::dispatch;
//! use dispatch_core::request::DispatchRequest;
//! use dispatch_core::tool::CargoTool;
//!
//! let request = DispatchRequest::new(
//!     "/tmp/build",
//!     "/tmp/src",
//!     "/tmp/out/app",
//!     "release",
//!     "org.gnome.CryptoUsageAnalyzer",
//! );
//! let report = dispatch(&request, &CargoTool::from_env(), std::io::stdout())?;
//! println!("installed {} bytes", report.bytes);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Only the exact build type `"release"` selects an optimized build; any other
//! value builds the debug profile.
//!
//! Made by FontLab https://www.fontlab.com/

pub mod dispatch;
pub mod error;
pub mod install;
pub mod output;
pub mod profile;
pub mod request;
pub mod tool;
