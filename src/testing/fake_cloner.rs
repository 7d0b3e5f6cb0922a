use std::path::{Path, PathBuf};
use std::sync::Mutex;

use url::Url;

use crate::domain::StepFailure;
use crate::ports::RepositoryCloner;

/// Recording cloner with an optional scripted failure.
#[derive(Default)]
pub struct FakeCloner {
    clones: Mutex<Vec<(Url, PathBuf, Option<String>)>>,
    failure: Mutex<Option<String>>,
}

impl FakeCloner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, details: &str) {
        *self.failure.lock().unwrap() = Some(details.to_string());
    }

    pub fn clones(&self) -> Vec<(Url, PathBuf, Option<String>)> {
        self.clones.lock().unwrap().clone()
    }
}

impl RepositoryCloner for FakeCloner {
    fn clone_repository(
        &self,
        url: &Url,
        dest: &Path,
        branch: Option<&str>,
    ) -> Result<(), StepFailure> {
        self.clones.lock().unwrap().push((
            url.clone(),
            dest.to_path_buf(),
            branch.map(str::to_string),
        ));

        if let Some(details) = self.failure.lock().unwrap().clone() {
            return Err(StepFailure::Clone { details });
        }
        Ok(())
    }
}
