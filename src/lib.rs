pub mod config;
pub mod download;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod repo;
pub mod scaffold;
pub mod workspace;

// Re-export key types at crate root for convenience.
pub use config::ScaffoldConfig;
pub use download::download_file;
pub use errors::{Result, StarterKitError};
pub use extract::extract_archive;
pub use scaffold::{scaffold, ScaffoldReport, ScaffoldSpec};
