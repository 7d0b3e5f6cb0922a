//! List command implementation.

use std::path::PathBuf;

use crate::app::commands::list::plan_summaries;
use crate::app::config::{load_manifest, resolve_manifest_path};
use crate::domain::AppError;

pub fn run_list(manifest: Option<PathBuf>, json: bool) -> Result<(), AppError> {
    let path = resolve_manifest_path(manifest.as_deref());
    let plan = load_manifest(&path)?;
    let summaries = plan_summaries(&plan);

    if json {
        let rendered = serde_json::to_string_pretty(&summaries).map_err(|e| {
            AppError::Configuration(format!("Failed to render plan as JSON: {}", e))
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("Provisioning plan ({} step(s)):", summaries.len());
    for step in &summaries {
        let marker = if step.required { "" } else { " (optional)" };
        println!("  {}. {}{}", step.position, step.name, marker);
        println!("     {}", step.action);
    }
    Ok(())
}
