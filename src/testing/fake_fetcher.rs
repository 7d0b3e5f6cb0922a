use std::path::{Path, PathBuf};
use std::sync::Mutex;

use url::Url;

use crate::domain::StepFailure;
use crate::ports::ArtifactFetcher;

/// Recording fetcher that writes configurable bytes to the destination,
/// so checksum verification downstream is exercised for real.
pub struct FakeFetcher {
    fetches: Mutex<Vec<(Url, PathBuf)>>,
    content: Mutex<Vec<u8>>,
    failure: Mutex<Option<String>>,
}

impl Default for FakeFetcher {
    fn default() -> Self {
        Self {
            fetches: Mutex::new(Vec::new()),
            content: Mutex::new(b"artifact".to_vec()),
            failure: Mutex::new(None),
        }
    }
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_content(&self, bytes: &[u8]) {
        *self.content.lock().unwrap() = bytes.to_vec();
    }

    pub fn fail_with(&self, details: &str) {
        *self.failure.lock().unwrap() = Some(details.to_string());
    }

    pub fn fetches(&self) -> Vec<(Url, PathBuf)> {
        self.fetches.lock().unwrap().clone()
    }
}

impl ArtifactFetcher for FakeFetcher {
    fn fetch(&self, url: &Url, dest: &Path) -> Result<u64, StepFailure> {
        self.fetches.lock().unwrap().push((url.clone(), dest.to_path_buf()));

        if let Some(details) = self.failure.lock().unwrap().clone() {
            return Err(StepFailure::Network { details });
        }

        let content = self.content.lock().unwrap().clone();
        std::fs::write(dest, &content)
            .map_err(|e| StepFailure::Network { details: e.to_string() })?;
        Ok(content.len() as u64)
    }
}
