//! Command executor backed by `std::process::Command`.

use std::process::Command;

use crate::domain::StepFailure;
use crate::ports::{CommandExecutor, ExecReport, ExecStatus, Invocation};

const STDERR_TAIL_LINES: usize = 20;

/// Runs invocations as real child processes, capturing their output.
///
/// The child shares the foreground process group, so a Ctrl-C reaches it
/// directly; a signal death is surfaced as [`ExecStatus::Signaled`].
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for ProcessExecutor {
    fn run(&self, invocation: &Invocation) -> Result<ExecReport, StepFailure> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.dir {
            command.current_dir(dir);
        }
        for (key, value) in &invocation.env {
            command.env(key, value);
        }

        let output = command.output().map_err(|e| StepFailure::Launch {
            details: format!("Failed to execute {}: {}", invocation.program, e),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let status = match output.status.code() {
            Some(code) => ExecStatus::Exited(code),
            None => ExecStatus::Signaled(termination_signal(&output.status)),
        };

        Ok(ExecReport { status, stderr_tail: tail_lines(&stderr, STDERR_TAIL_LINES) })
    }
}

#[cfg(unix)]
fn termination_signal(status: &std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or(0)
}

#[cfg(not(unix))]
fn termination_signal(_status: &std::process::ExitStatus) -> i32 {
    0
}

fn tail_lines(text: &str, limit: usize) -> String {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(limit);
    lines[start..].join("\n")
}
