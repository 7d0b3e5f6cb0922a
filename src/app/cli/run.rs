//! Run command implementation.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use dialoguer::Confirm;

use crate::app::AppContext;
use crate::app::commands::run::{self, RunOptions};
use crate::app::config::{load_manifest, resolve_manifest_path};
use crate::domain::{AppError, RunOutcome};
use crate::services::{GitCloner, HttpFetcher, ProcessExecutor};

pub fn run_provision(
    manifest: Option<PathBuf>,
    dry_run: bool,
    yes: bool,
) -> Result<i32, AppError> {
    let path = resolve_manifest_path(manifest.as_deref());
    let plan = load_manifest(&path)?;

    if !dry_run && !yes && !confirm_run(plan.len())? {
        println!("Aborted.");
        return Ok(1);
    }

    if !dry_run {
        println!("Provisioning started {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    }
    let started = Instant::now();

    let ctx = AppContext::new(ProcessExecutor::new(), HttpFetcher::new()?, GitCloner::new());
    let report = run::execute(&ctx, &plan, &RunOptions { dry_run })?;

    match &report.outcome {
        RunOutcome::Completed { warnings } => {
            if report.dry_run {
                println!("Dry run: {} step(s) planned, nothing executed.", plan.len());
            } else if warnings.is_empty() {
                println!(
                    "✅ Provisioned {} step(s) in {:.1}s",
                    report.executed,
                    started.elapsed().as_secs_f64()
                );
            } else {
                println!(
                    "✅ Provisioned {} step(s) in {:.1}s with {} warning(s):",
                    report.executed,
                    started.elapsed().as_secs_f64(),
                    warnings.len()
                );
                for warning in warnings {
                    println!("  ⚠️  {}: {}", warning.step, warning.failure);
                }
            }
        }
        RunOutcome::Fatal { step, failure } => {
            eprintln!("Provisioning failed at step '{}': {}", step, failure);
        }
    }

    Ok(report.exit_code())
}

fn confirm_run(total: usize) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(format!("Run {} provisioning step(s) against this machine?", total))
        .default(false)
        .interact()
        .map_err(|e| AppError::config_error(format!("Confirmation prompt failed: {}", e)))
}
