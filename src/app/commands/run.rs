//! Provisioning run logic.
//!
//! Dispatches the step plan strictly in declaration order. A failing
//! required step stops the run immediately; an optional failure is recorded
//! as a warning and the next step still runs. A child that dies to a signal
//! stops the run regardless of the step's flag.

use crate::app::AppContext;
use crate::domain::{
    AppError, RunOutcome, RunReport, Step, StepAction, StepFailure, StepWarning, hash_file,
};
use crate::ports::{ArtifactFetcher, CommandExecutor, ExecStatus, Invocation, RepositoryCloner};

/// Options for the run command.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Print the plan without dispatching anything.
    pub dry_run: bool,
}

/// Execute the provisioning plan.
pub fn execute<E, F, G>(
    ctx: &AppContext<E, F, G>,
    plan: &[Step],
    options: &RunOptions,
) -> Result<RunReport, AppError>
where
    E: CommandExecutor,
    F: ArtifactFetcher,
    G: RepositoryCloner,
{
    let total = plan.len();

    if options.dry_run {
        for (index, step) in plan.iter().enumerate() {
            let marker = if step.required { "" } else { " (optional)" };
            println!("[{}/{}] {}{}", index + 1, total, step.name, marker);
            println!("       {}", step.action.summary());
        }
        return Ok(RunReport {
            outcome: RunOutcome::Completed { warnings: vec![] },
            executed: 0,
            dry_run: true,
        });
    }

    let mut warnings = Vec::new();
    let mut executed = 0;

    for step in plan {
        executed += 1;
        println!("[{}/{}] {}", executed, total, step.name);

        if let Err(failure) = run_step(ctx, step) {
            if step.required || failure.is_signal() {
                return Ok(RunReport {
                    outcome: RunOutcome::Fatal { step: step.name.clone(), failure },
                    executed,
                    dry_run: false,
                });
            }
            println!("⚠️  {} failed ({}), continuing", step.name, failure);
            warnings.push(StepWarning { step: step.name.clone(), failure });
        }
    }

    Ok(RunReport { outcome: RunOutcome::Completed { warnings }, executed, dry_run: false })
}

fn run_step<E, F, G>(ctx: &AppContext<E, F, G>, step: &Step) -> Result<(), StepFailure>
where
    E: CommandExecutor,
    F: ArtifactFetcher,
    G: RepositoryCloner,
{
    match &step.action {
        StepAction::Command { program, args } => {
            let invocation = Invocation {
                program: program.clone(),
                args: args.clone(),
                dir: step.dir.clone(),
                env: step.env.clone(),
            };
            let report = ctx.executor().run(&invocation)?;
            match report.status {
                ExecStatus::Exited(0) => Ok(()),
                ExecStatus::Exited(code) => {
                    Err(StepFailure::Tool { code, stderr: report.stderr_tail })
                }
                ExecStatus::Signaled(signal) => Err(StepFailure::Signal { signal }),
            }
        }
        StepAction::Fetch { url, dest, sha256 } => {
            ctx.fetcher().fetch(url, dest)?;
            if let Some(expected) = sha256 {
                let actual = hash_file(dest).map_err(|e| StepFailure::Network {
                    details: format!("Failed to read downloaded file {}: {}", dest.display(), e),
                })?;
                if !actual.eq_ignore_ascii_case(expected) {
                    return Err(StepFailure::ChecksumMismatch {
                        expected: expected.clone(),
                        actual,
                    });
                }
            }
            Ok(())
        }
        StepAction::Clone { url, dest, branch } => {
            ctx.cloner().clone_repository(url, dest, branch.as_deref())
        }
    }
}
