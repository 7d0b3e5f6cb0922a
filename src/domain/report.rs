//! Terminal outcome of a provisioning run.

use crate::domain::step::StepFailure;

/// A non-fatal failure recorded against an optional step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWarning {
    /// Name of the step that failed.
    pub step: String,
    /// What went wrong.
    pub failure: StepFailure,
}

/// How the run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every step was dispatched; optional failures are listed as warnings.
    Completed { warnings: Vec<StepWarning> },
    /// A required step failed (or a child died to a signal) and the run
    /// stopped there. No later step was invoked.
    Fatal { step: String, failure: StepFailure },
}

/// Result of a provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Terminal outcome.
    pub outcome: RunOutcome,
    /// Number of steps actually dispatched (zero for a dry run).
    pub executed: usize,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunReport {
    /// Process exit code derived from the outcome: 0 on completion (warnings
    /// included), 130 when the fatal cause was a signal-terminated child,
    /// 1 for any other fatal failure.
    pub fn exit_code(&self) -> i32 {
        match &self.outcome {
            RunOutcome::Completed { .. } => 0,
            RunOutcome::Fatal { failure, .. } if failure.is_signal() => 130,
            RunOutcome::Fatal { .. } => 1,
        }
    }
}
