//! Host adapters for buildgate.
//!
//! Implements the ports from `buildgate-core` against the real machine:
//! [`PathProbe`] looks executables up on the search path and
//! [`ProcessBuildRunner`] runs the release build as a child process.

#![deny(unsafe_code)]

mod probe;
mod runner;

pub use probe::PathProbe;
pub use runner::{ProcessBuildRunner, exit_code_of};
