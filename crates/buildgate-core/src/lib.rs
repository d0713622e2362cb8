//! Core domain for buildgate.
//!
//! buildgate decides, once per invocation, whether a build toolchain is
//! present on the host. If it is, a release build is delegated to it and its
//! exit status becomes ours. If not, a notice announces that the prebuilt
//! artifact will be used and the run succeeds.
//!
//! This crate holds the pure parts of that decision: the toolchain constants,
//! the availability and outcome types, and the [`Dispatcher`] itself. Host
//! access goes through the traits in [`ports`]; implementations live in
//! `buildgate-runtime`.

#![deny(unused_crate_dependencies)]

pub mod dispatch;
pub mod error;
pub mod ports;
pub mod toolchain;

pub use dispatch::{DispatchOutcome, Dispatcher, FallbackNotice};
pub use error::{DispatchError, DispatchResult};
pub use ports::{BuildRunner, BuildStatus, ToolchainProbe};
pub use toolchain::{DEFAULT_TOOLCHAIN, RELEASE_BUILD_ARGS, ToolchainAvailability, ToolchainSpec};
