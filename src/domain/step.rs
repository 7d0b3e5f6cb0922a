//! Provisioning step domain model.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::path::PathBuf;

use url::Url;

/// One provisioning step, built from a manifest entry.
///
/// Steps execute strictly in declaration order. A failing step marked
/// `required` halts the run; an optional step's failure is recorded as a
/// warning and the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Step name (unique within the manifest).
    pub name: String,
    /// What the step does when dispatched.
    pub action: StepAction,
    /// Whether a failure of this step halts the entire run.
    pub required: bool,
    /// Working directory for command actions.
    pub dir: Option<PathBuf>,
    /// Extra environment variables for command actions.
    pub env: BTreeMap<String, String>,
}

/// The effect a step performs against the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Invoke an external tool (package manager, compiler, `umount`, ...).
    Command { program: String, args: Vec<String> },
    /// Download an artifact over HTTP, optionally verifying its SHA-256.
    Fetch { url: Url, dest: PathBuf, sha256: Option<String> },
    /// Clone a repository.
    Clone { url: Url, dest: PathBuf, branch: Option<String> },
}

impl StepAction {
    /// One-line description used in plan listings.
    pub fn summary(&self) -> String {
        match self {
            StepAction::Command { program, args } => {
                let mut line = program.clone();
                for arg in args {
                    line.push(' ');
                    line.push_str(arg);
                }
                line
            }
            StepAction::Fetch { url, dest, .. } => {
                format!("fetch {} -> {}", url, dest.display())
            }
            StepAction::Clone { url, dest, .. } => {
                format!("clone {} -> {}", url, dest.display())
            }
        }
    }
}

/// Why a dispatched step did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepFailure {
    /// The invoked tool exited non-zero.
    Tool { code: i32, stderr: String },
    /// The command could not be spawned at all (e.g. missing binary).
    Launch { details: String },
    /// A fetch step failed to download or write its artifact.
    Network { details: String },
    /// The fetched artifact's digest does not match the manifest.
    ChecksumMismatch { expected: String, actual: String },
    /// A clone step failed.
    Clone { details: String },
    /// The child process was terminated by a signal. Always fatal.
    Signal { signal: i32 },
}

impl StepFailure {
    /// Signal deaths abort the run regardless of the step's `required` flag.
    pub fn is_signal(&self) -> bool {
        matches!(self, StepFailure::Signal { .. })
    }
}

impl Display for StepFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepFailure::Tool { code, stderr } => {
                if stderr.is_empty() {
                    write!(f, "exited with status {}", code)
                } else {
                    write!(f, "exited with status {}: {}", code, stderr)
                }
            }
            StepFailure::Launch { details } => write!(f, "{}", details),
            StepFailure::Network { details } => write!(f, "{}", details),
            StepFailure::ChecksumMismatch { expected, actual } => {
                write!(f, "checksum mismatch: expected {}, got {}", expected, actual)
            }
            StepFailure::Clone { details } => write!(f, "{}", details),
            StepFailure::Signal { signal } => {
                write!(f, "terminated by signal {}", signal)
            }
        }
    }
}
