//! Port definitions (trait abstractions) for host access.
//!
//! The dispatcher only ever talks to the host through these traits.
//!
//! # Design Rules
//!
//! - Core owns the traits and types (pure)
//! - Runtime owns the implementations (`which` lookup, `Command::new`)
//! - CLI wires the implementations together in main.rs

pub mod build_runner;
pub mod toolchain_probe;

pub use build_runner::{BuildRunner, BuildStatus};
pub use toolchain_probe::ToolchainProbe;
