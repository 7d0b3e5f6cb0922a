//! Init command: write the provisioning manifest scaffold.

use std::path::Path;

use crate::domain::AppError;
use crate::services::scaffold_files;

/// Write the embedded scaffold into `target`, refusing to overwrite an
/// existing manifest. Returns the relative paths written.
pub fn execute(target: &Path) -> Result<Vec<String>, AppError> {
    if target.join("provision.yml").exists() {
        return Err(AppError::ManifestExists);
    }

    std::fs::create_dir_all(target)?;

    let mut written = Vec::new();
    for file in scaffold_files() {
        let dest = target.join(&file.path);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&dest, file.content)?;
        written.push(file.path);
    }

    Ok(written)
}
