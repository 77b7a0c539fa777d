//! Filesystem steps: destination checks, renaming, archive cleanup.
//!
//! Checks use `symlink_metadata()` so a symlink is never mistaken for the
//! directory or file it points at.

use std::fs;
use std::path::Path;

use crate::errors::{Result, StarterKitError};

/// Returns `true` if the path is a regular directory (not a symlink).
#[must_use]
pub(crate) fn is_regular_dir(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

/// Returns `true` if the path is a regular file (not a symlink).
#[must_use]
pub(crate) fn is_regular_file(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

/// Returns `true` if anything exists at `path`, including a dangling symlink.
#[must_use]
fn is_occupied(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Fail with [`StarterKitError::DestinationExists`] if `path` is taken.
pub fn ensure_destination_free(path: &Path) -> Result<()> {
    if is_occupied(path) {
        return Err(StarterKitError::DestinationExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Rename the extracted template directory to its final name.
///
/// Renaming a directory onto itself is a no-op.
pub fn move_into_place(from: &Path, to: &Path) -> Result<()> {
    if from == to {
        return Ok(());
    }
    ensure_destination_free(to)?;
    fs::rename(from, to)?;
    tracing::debug!("renamed {} to {}", from.display(), to.display());
    Ok(())
}

/// Delete the downloaded archive.
pub fn remove_archive(path: &Path) -> Result<()> {
    if !is_regular_file(path) {
        return Err(StarterKitError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("archive {} is not a regular file", path.display()),
        )));
    }
    fs::remove_file(path)?;
    Ok(())
}
