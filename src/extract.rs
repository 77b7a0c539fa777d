//! Archive extraction via the system `tar` tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::errors::{Result, StarterKitError};
use crate::workspace::is_regular_dir;

/// Extract the single top-level directory `dir_name` from a gzip tarball.
///
/// Runs `tar -xzf <archive> -C <extract_to> <dir_name>` and returns the
/// path of the extracted directory. Fails if tar cannot be launched, exits
/// unsuccessfully, or the expected directory is not present afterwards.
pub fn extract_archive(archive: &Path, extract_to: &Path, dir_name: &str) -> Result<PathBuf> {
    tracing::debug!(
        "extracting {dir_name} from {} into {}",
        archive.display(),
        extract_to.display()
    );

    let output = Command::new("tar")
        .arg("-xzf")
        .arg(archive)
        .arg("-C")
        .arg(extract_to)
        .arg(dir_name)
        .output()
        .map_err(|e| StarterKitError::Extract {
            message: format!("could not run tar: {e}"),
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !output.status.success() {
        let detail = if stderr.is_empty() {
            format!("tar exited with {}", output.status)
        } else {
            stderr.to_string()
        };
        return Err(StarterKitError::Extract { message: detail });
    }
    if !stderr.is_empty() {
        tracing::warn!("tar: {stderr}");
    }

    let extracted = extract_to.join(dir_name);
    if !is_regular_dir(&extracted) {
        return Err(StarterKitError::Extract {
            message: format!("{} is not a directory after extraction", extracted.display()),
        });
    }
    Ok(extracted)
}
