//! Manifest loading from disk.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Step, parse_manifest_content};

/// Default manifest filename, looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "provision.yml";

/// Resolve the manifest path: an explicit `--manifest` value wins, otherwise
/// `provision.yml` in the working directory.
pub fn resolve_manifest_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
}

/// Load and parse the provisioning manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Vec<Step>, AppError> {
    if !path.exists() {
        return Err(AppError::ManifestMissing(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_manifest_content(&content)
}
