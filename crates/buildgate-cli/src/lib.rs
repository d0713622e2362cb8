//! `buildgate` command-line front end.
//!
//! Wires the PATH probe and process runner from `buildgate-runtime` into the
//! core dispatcher and turns the outcome into a process exit code.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the integration tests
#[cfg(test)]
use tempfile as _;

// Used by main.rs
use anyhow as _;

pub mod error;
pub mod logging;
pub mod parser;

pub use error::CliError;
pub use parser::Cli;

use std::io::Write;

use buildgate_core::{Dispatcher, ToolchainSpec};
use buildgate_runtime::{PathProbe, ProcessBuildRunner};
use tracing::debug;

/// Run one dispatch against the real host and return the exit code.
///
/// The fallback notice, if any, goes to `out`.
pub fn run(out: &mut impl Write) -> Result<i32, CliError> {
    let dispatcher = Dispatcher::new(
        ToolchainSpec::default(),
        PathProbe::new(),
        ProcessBuildRunner::new(),
    );

    let outcome = dispatcher.run(out)?;
    debug!(?outcome, "dispatch finished");
    Ok(outcome.exit_code())
}
