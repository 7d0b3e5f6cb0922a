//! CLI adapter.

mod init;
mod list;
mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "rigup")]
#[command(version)]
#[command(
    about = "Provision a data-acquisition workstation from a step manifest",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a provision.yml scaffold into the target directory
    #[clap(visible_alias = "i")]
    Init {
        /// Target directory (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Show the ordered provisioning plan
    #[clap(visible_alias = "ls")]
    List {
        /// Manifest path (defaults to ./provision.yml)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Execute the provisioning plan
    #[clap(visible_alias = "r")]
    Run {
        /// Manifest path (defaults to ./provision.yml)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Print the plan without executing anything
        #[arg(long)]
        dry_run: bool,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { path } => init::run_init(path).map(|_| 0),
        Commands::List { manifest, json } => list::run_list(manifest, json).map(|_| 0),
        Commands::Run { manifest, dry_run, yes } => run::run_provision(manifest, dry_run, yes),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
