use std::path::Path;

use url::Url;

use crate::domain::StepFailure;

/// Capability to clone a repository.
pub trait RepositoryCloner {
    /// Clone `url` into `dest`, checking out `branch` when given.
    fn clone_repository(
        &self,
        url: &Url,
        dest: &Path,
        branch: Option<&str>,
    ) -> Result<(), StepFailure>;
}
