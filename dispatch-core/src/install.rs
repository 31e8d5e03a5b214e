//! Artifact installation (made by FontLab https://www.fontlab.com/)

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::DispatchError;

/// Copy a built artifact to its destination, replacing any existing file.
///
/// Parent directories of `dest` are not created. The source is opened before
/// the destination, so a missing artifact leaves `dest` untouched.
///
/// The installed file takes the artifact's permission bits, even when `dest`
/// already existed with a different mode. This differs from `cp`, which keeps
/// the mode of an existing destination.
pub fn install_artifact(source: &Path, dest: &Path) -> Result<u64, DispatchError> {
    debug!("installing {} -> {}", source.display(), dest.display());

    fs::copy(source, dest).map_err(|err| DispatchError::Install {
        from: source.to_path_buf(),
        to: dest.to_path_buf(),
        source: err,
    })
}
