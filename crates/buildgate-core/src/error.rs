//! Error types for dispatching a build.
//!
//! A missing toolchain is not an error, and neither is a build that exits
//! non-zero: both are ordinary [`DispatchOutcome`](crate::DispatchOutcome)s.
//! The variants here cover the host refusing to cooperate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while dispatching a build.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The toolchain was located but could not be started.
    #[error("failed to start {toolchain} at {path}: {source}")]
    Spawn {
        toolchain: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fallback notice could not be written.
    #[error("failed to write fallback notice: {0}")]
    Notice(#[source] std::io::Error),
}

impl DispatchError {
    /// Create a `Spawn` error for the given toolchain and resolved path.
    pub fn spawn(
        toolchain: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Spawn {
            toolchain: toolchain.into(),
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
