//! Streaming download of the template archive.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::Duration;

use ureq::Agent;

use crate::config::MAX_REDIRECTS;
use crate::errors::{Result, StarterKitError};

const USER_AGENT: &str = concat!("starter-kit/", env!("CARGO_PKG_VERSION"));

/// Time allowed to establish the connection. The transfer itself is unbounded.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Download `url` to `output_path`, following redirects.
///
/// The response body is streamed to disk rather than buffered. A final
/// status outside 2xx is an error. On any failure the partially written
/// file is removed. Returns the number of bytes written.
pub fn download_file(url: &str, output_path: &Path) -> Result<u64> {
    tracing::info!("Downloading from URL {url} to: {}", output_path.display());

    let agent: Agent = Agent::config_builder()
        .max_redirects(MAX_REDIRECTS)
        .timeout_connect(Some(CONNECT_TIMEOUT))
        .build()
        .into();

    let result = fetch_to(&agent, url, output_path);
    if result.is_err() && output_path.exists() {
        if let Err(e) = fs::remove_file(output_path) {
            tracing::warn!(
                "could not remove partial download {}: {e}",
                output_path.display()
            );
        }
    }
    result
}

fn fetch_to(agent: &Agent, url: &str, output_path: &Path) -> Result<u64> {
    let mut response = agent
        .get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| StarterKitError::Download {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!("response status {}", response.status());

    let mut file = File::create(output_path)?;
    let mut reader = response.body_mut().as_reader();
    let bytes = io::copy(&mut reader, &mut file).map_err(|e| StarterKitError::Download {
        url: url.to_string(),
        message: format!("transfer interrupted: {e}"),
    })?;
    file.sync_all()?;

    tracing::debug!("wrote {bytes} bytes to {}", output_path.display());
    Ok(bytes)
}
