//! Init command implementation.

use std::path::PathBuf;

use crate::app::commands::init;
use crate::domain::AppError;

pub fn run_init(path: Option<PathBuf>) -> Result<(), AppError> {
    let target = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };

    let written = init::execute(&target)?;

    println!("✅ Wrote provisioning scaffold ({} file(s))", written.len());
    for file in &written {
        println!("  • {}", file);
    }
    println!("Review provision.yml, then start with 'rigup run --dry-run'.");
    Ok(())
}
