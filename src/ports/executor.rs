use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::StepFailure;

/// A fully resolved external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; the process inherits the current one when unset.
    pub dir: Option<PathBuf>,
    /// Extra environment variables layered over the inherited environment.
    pub env: BTreeMap<String, String>,
}

impl Invocation {
    /// Space-joined command line for logs and assertions.
    pub fn cmdline(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// How an invoked command terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStatus {
    /// Normal exit with the given code.
    Exited(i32),
    /// Terminated by the given signal (unix).
    Signaled(i32),
}

/// Result of a completed invocation.
#[derive(Debug, Clone)]
pub struct ExecReport {
    pub status: ExecStatus,
    /// Last lines of captured stderr, for failure diagnostics.
    pub stderr_tail: String,
}

/// Capability to run external commands against the machine.
pub trait CommandExecutor {
    /// Spawn the command and block until it terminates.
    ///
    /// `Err` means the command could not be dispatched at all; a non-zero
    /// exit comes back as `Ok` with the status for the caller to interpret.
    fn run(&self, invocation: &Invocation) -> Result<ExecReport, StepFailure>;
}
