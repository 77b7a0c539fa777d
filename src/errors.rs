use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum StarterKitError {
    /// Fetching the template archive failed.
    #[error("download error: {url}: {message}")]
    Download { url: String, message: String },

    /// Unpacking the template archive failed.
    #[error("extraction error: {message}")]
    Extract { message: String },

    /// Something already occupies the destination directory.
    #[error("destination already exists: {}", path.display())]
    DestinationExists { path: PathBuf },

    /// An external program could not be run or exited unsuccessfully.
    #[error("{program} failed: {message}")]
    Command { program: String, message: String },

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, StarterKitError>`.
pub type Result<T> = std::result::Result<T, StarterKitError>;
