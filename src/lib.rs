//! rigup: provision a data-acquisition workstation from a declarative step
//! manifest.
//!
//! A manifest (`provision.yml`) declares an ordered list of steps, each one
//! an external tool invocation, an HTTP artifact fetch, or a repository
//! clone. Steps run strictly in order; a failing required step stops the run,
//! an optional step's failure is recorded as a warning. The machine is only
//! touched through the capability traits in [`ports`], so tests substitute
//! fakes instead of mutating a real host.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::commands::run::RunOptions;
pub use domain::{AppError, RunOutcome, RunReport, Step, StepAction, StepFailure, StepWarning};
