use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::domain::StepFailure;
use crate::ports::{CommandExecutor, ExecReport, ExecStatus, Invocation};

/// Recording executor with scripted outcomes, keyed by program name.
/// Programs without a scripted outcome succeed with exit status 0.
#[derive(Default)]
pub struct FakeExecutor {
    invocations: Mutex<Vec<Invocation>>,
    exit_codes: Mutex<HashMap<String, i32>>,
    signals: Mutex<HashMap<String, i32>>,
    launch_failures: Mutex<HashSet<String>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_program(&self, program: &str, code: i32) {
        self.exit_codes.lock().unwrap().insert(program.to_string(), code);
    }

    pub fn signal_program(&self, program: &str, signal: i32) {
        self.signals.lock().unwrap().insert(program.to_string(), signal);
    }

    pub fn refuse_launch(&self, program: &str) {
        self.launch_failures.lock().unwrap().insert(program.to_string());
    }

    /// Programs dispatched so far, in order.
    pub fn invoked_programs(&self) -> Vec<String> {
        self.invocations.lock().unwrap().iter().map(|i| i.program.clone()).collect()
    }

    /// Full command lines dispatched so far, in order.
    pub fn invoked_cmdlines(&self) -> Vec<String> {
        self.invocations.lock().unwrap().iter().map(Invocation::cmdline).collect()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandExecutor for FakeExecutor {
    fn run(&self, invocation: &Invocation) -> Result<ExecReport, StepFailure> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if self.launch_failures.lock().unwrap().contains(&invocation.program) {
            return Err(StepFailure::Launch {
                details: format!("Failed to execute {}: scripted launch failure", invocation.program),
            });
        }

        if let Some(signal) = self.signals.lock().unwrap().get(&invocation.program).copied() {
            return Ok(ExecReport { status: ExecStatus::Signaled(signal), stderr_tail: String::new() });
        }

        let code = self.exit_codes.lock().unwrap().get(&invocation.program).copied().unwrap_or(0);
        Ok(ExecReport { status: ExecStatus::Exited(code), stderr_tail: String::new() })
    }
}
