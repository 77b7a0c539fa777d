//! Repository setup: version control and dependency install.
//!
//! Every child process runs in the project directory with inherited stdio,
//! so the user sees git and package-manager output as it happens.

use std::path::Path;
use std::process::Command;

use crate::errors::{Result, StarterKitError};

/// Run `program args...` in `dir`, failing on spawn error or non-zero exit.
fn run_step(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    tracing::debug!("running `{program} {}` in {}", args.join(" "), dir.display());
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| StarterKitError::Command {
            program: program.to_string(),
            message: format!("could not start: {e}"),
        })?;
    if !status.success() {
        return Err(StarterKitError::Command {
            program: program.to_string(),
            message: format!("`{program} {}` exited with {status}", args.join(" ")),
        });
    }
    Ok(())
}

/// Initialize an empty git repository in `dir`.
pub fn git_init(dir: &Path) -> Result<()> {
    tracing::info!("Initializing Git repository...");
    run_step(dir, "git", &["init"])?;
    tracing::info!("Git repository initialized.");
    Ok(())
}

/// Install dependencies with `<package_manager> install`.
///
/// Returns whether the install succeeded. Failure is logged, not returned:
/// a broken install still leaves a usable checkout.
pub fn install_dependencies(dir: &Path, package_manager: &str) -> bool {
    tracing::info!("Installing dependencies with {package_manager}...");
    match run_step(dir, package_manager, &["install"]) {
        Ok(()) => {
            tracing::info!("Dependencies installed.");
            true
        }
        Err(e) => {
            tracing::warn!("dependency install did not complete: {e}");
            false
        }
    }
}

/// Stage everything and record the first commit.
pub fn initial_commit(dir: &Path, message: &str) -> Result<()> {
    run_step(dir, "git", &["add", "."])?;
    run_step(dir, "git", &["commit", "-m", message])?;
    tracing::info!("Initial commit made.");
    Ok(())
}
