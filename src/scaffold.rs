//! End-to-end scaffolding run.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::{
    ScaffoldConfig, ARCHIVE_FILE_NAME, ARCHIVE_ROOT_DIR, COMMIT_MESSAGE, DEFAULT_DIRECTORY_NAME,
};
use crate::download::download_file;
use crate::errors::Result;
use crate::extract::extract_archive;
use crate::repo::{git_init, initial_commit, install_dependencies};
use crate::workspace::{ensure_destination_free, move_into_place, remove_archive};

/// User input for one scaffolding run.
#[derive(Debug, Clone)]
pub struct ScaffoldSpec {
    /// Name of the directory to create. Defaults to `platform-starter-kit`.
    pub directory_name: String,
    /// Directory the archive is downloaded to and the project created in.
    pub working_dir: PathBuf,
    pub config: ScaffoldConfig,
}

impl Default for ScaffoldSpec {
    fn default() -> Self {
        Self {
            directory_name: DEFAULT_DIRECTORY_NAME.to_string(),
            working_dir: PathBuf::from("."),
            config: ScaffoldConfig::default(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    pub template_url: String,
    pub bytes_downloaded: u64,
    pub git_initialized: bool,
    /// `None` when the install step was skipped.
    pub dependencies_installed: Option<bool>,
    pub committed: bool,
}

/// Download the template, unpack it under its final name and set up the repository.
///
/// Steps run strictly in order and the first failure aborts the run. The
/// destination and the extraction folder are checked before anything is
/// downloaded, so leftovers from an earlier run are never merged in.
pub fn scaffold(spec: &ScaffoldSpec) -> Result<ScaffoldReport> {
    let config = &spec.config;
    let project_dir = spec.working_dir.join(&spec.directory_name);
    let staging_dir = spec.working_dir.join(ARCHIVE_ROOT_DIR);
    let archive = spec.working_dir.join(ARCHIVE_FILE_NAME);

    ensure_destination_free(&project_dir)?;
    if staging_dir != project_dir {
        ensure_destination_free(&staging_dir)?;
    }

    tracing::info!("Downloading the platform starter kit...");
    let bytes_downloaded = download_file(&config.template_url, &archive)?;

    tracing::info!("Download completed. Extracting...");
    let extracted = extract_archive(&archive, &spec.working_dir, ARCHIVE_ROOT_DIR)?;
    move_into_place(&extracted, &project_dir)?;
    tracing::info!("Extraction completed.");

    remove_archive(&archive)?;
    tracing::info!("Deleted the downloaded archive.");

    if !config.skip_git {
        git_init(&project_dir)?;
    }

    let dependencies_installed = if config.skip_install {
        None
    } else {
        Some(install_dependencies(&project_dir, &config.package_manager))
    };

    if !config.skip_git {
        initial_commit(&project_dir, COMMIT_MESSAGE)?;
    }

    Ok(ScaffoldReport {
        project_dir,
        template_url: config.template_url.clone(),
        bytes_downloaded,
        git_initialized: !config.skip_git,
        dependencies_installed,
        committed: !config.skip_git,
    })
}
