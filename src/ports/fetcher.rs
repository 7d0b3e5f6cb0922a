use std::path::Path;

use url::Url;

use crate::domain::StepFailure;

/// Capability to download an artifact over HTTP.
pub trait ArtifactFetcher {
    /// Download `url` into the file at `dest`, returning the bytes written.
    fn fetch(&self, url: &Url, dest: &Path) -> Result<u64, StepFailure>;
}
