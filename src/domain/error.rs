use std::io;

use thiserror::Error;

/// Library-wide error type for rigup operations.
///
/// These errors abort a command before or outside step execution. Failures
/// of individual provisioning steps are recorded as
/// [`StepFailure`](crate::domain::StepFailure) values in the run report
/// instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No provisioning manifest at the expected location.
    #[error("Provisioning manifest not found: {0}")]
    ManifestMissing(String),

    /// A manifest already exists at the init target.
    #[error("provision.yml already exists at the target location")]
    ManifestExists,

    /// The manifest could not be parsed.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// The manifest parsed but is semantically invalid.
    #[error("{0}")]
    Validation(String),

    /// Variable interpolation failed for a step field.
    #[error("Template expansion failed in step '{step}': {details}")]
    Template { step: String, details: String },
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
