//! Repository cloner backed by git2.

use std::path::Path;

use git2::build::RepoBuilder;
use url::Url;

use crate::domain::StepFailure;
use crate::ports::RepositoryCloner;

/// Clones repositories in-process via libgit2.
#[derive(Debug, Clone, Default)]
pub struct GitCloner;

impl GitCloner {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryCloner for GitCloner {
    fn clone_repository(
        &self,
        url: &Url,
        dest: &Path,
        branch: Option<&str>,
    ) -> Result<(), StepFailure> {
        if dest.exists() && !is_empty_dir(dest) {
            return Err(StepFailure::Clone {
                details: format!("Destination '{}' exists and is not empty", dest.display()),
            });
        }

        let mut builder = RepoBuilder::new();
        if let Some(branch) = branch {
            builder.branch(branch);
        }

        builder.clone(url.as_str(), dest).map_err(|e| StepFailure::Clone {
            details: format!("git clone {} failed: {}", url, e.message()),
        })?;
        Ok(())
    }
}

fn is_empty_dir(path: &Path) -> bool {
    path.read_dir().map(|mut entries| entries.next().is_none()).unwrap_or(false)
}
