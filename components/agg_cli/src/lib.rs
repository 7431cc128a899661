//! Converge CLI library.
//!
//! Provides the scenario model, runner, and argument definitions for the
//! `converge` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod runner;
pub mod scenario;

pub use cli::{Cli, PolicyArg};
pub use error::{CliError, CliResult};
pub use runner::{OutcomeReport, PolicyReport, Report, Runner};
pub use scenario::{OperationSpec, Scenario};
