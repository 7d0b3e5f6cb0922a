//! Artifact fetcher backed by a blocking reqwest client.

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, StepFailure};
use crate::ports::ArtifactFetcher;

const DOWNLOAD_TIMEOUT_SECS: u64 = 600;

/// HTTP downloader for versioned source tarballs.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher").finish()
    }
}

impl HttpFetcher {
    /// Create a fetcher with the default download timeout.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl ArtifactFetcher for HttpFetcher {
    fn fetch(&self, url: &Url, dest: &Path) -> Result<u64, StepFailure> {
        let network = |details: String| StepFailure::Network { details };

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| network(format!("GET {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(network(format!("GET {} returned {}", url, response.status())));
        }

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    network(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let mut file = File::create(dest)
            .map_err(|e| network(format!("Failed to create {}: {}", dest.display(), e)))?;
        io::copy(&mut response, &mut file)
            .map_err(|e| network(format!("Failed to write {}: {}", dest.display(), e)))
    }
}
