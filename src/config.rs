//! Template source constants and runtime configuration.

use std::env;

/// Location of the template tarball.
pub const TEMPLATE_URL: &str =
    "https://github.com/calcom/platform-starter-kit/archive/refs/heads/main.tar.gz";

/// File name the archive is downloaded to, relative to the working directory.
pub const ARCHIVE_FILE_NAME: &str = "platform-starter-kit-main.tar.gz";

/// Top-level folder inside the archive. Must match what the server packs.
pub const ARCHIVE_ROOT_DIR: &str = "platform-starter-kit-main";

/// Destination used when the user does not name one.
pub const DEFAULT_DIRECTORY_NAME: &str = "platform-starter-kit";

/// Message for the first commit in the new repository.
pub const COMMIT_MESSAGE: &str = "Initial commit from @calcom/starter-kit";

/// Program used to install the template's dependencies.
pub const DEFAULT_PACKAGE_MANAGER: &str = "yarn";

/// Upper bound on the redirect chain followed during download.
pub const MAX_REDIRECTS: u32 = 10;

/// Environment variable overriding [`TEMPLATE_URL`].
pub const URL_ENV: &str = "STARTER_KIT_URL";

/// Environment variable overriding [`DEFAULT_PACKAGE_MANAGER`].
pub const PACKAGE_MANAGER_ENV: &str = "STARTER_KIT_PACKAGE_MANAGER";

/// Settings for a single scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub template_url: String,
    pub package_manager: String,
    /// Skip the dependency install step.
    pub skip_install: bool,
    /// Skip `git init` and the initial commit.
    pub skip_git: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_url: TEMPLATE_URL.to_string(),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            skip_install: false,
            skip_git: false,
        }
    }
}

impl ScaffoldConfig {
    /// Build a configuration from process environment variables.
    ///
    /// Reads `STARTER_KIT_URL` and `STARTER_KIT_PACKAGE_MANAGER`; unset or
    /// empty variables leave the defaults in place.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(url) = non_empty(URL_ENV) {
            config.template_url = url;
        }
        if let Some(pm) = non_empty(PACKAGE_MANAGER_ENV) {
            config.package_manager = pm;
        }
        config
    }
}
