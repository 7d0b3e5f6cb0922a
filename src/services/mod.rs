//! Production implementations of the capability ports.

mod cloner_git;
mod executor_process;
mod fetcher_http;
mod scaffold_embedded;

pub use cloner_git::GitCloner;
pub use executor_process::ProcessExecutor;
pub use fetcher_http::HttpFetcher;
pub use scaffold_embedded::{ScaffoldFile, scaffold_files};
