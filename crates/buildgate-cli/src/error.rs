//! CLI-specific error types and exit code mapping.
//!
//! A failed build is not a `CliError`; its exit code is passed through as
//! is. These errors cover the host failing underneath us.

use buildgate_core::DispatchError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The toolchain was found but could not be started.
    #[error("Process error: {0}")]
    Process(String),

    /// Writing to stdout failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 71: EX_OSERR, could not spawn the toolchain
    /// - 74: EX_IOERR, could not write output
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Process(_) => 71,
            Self::Io(_) => 74,
        }
    }
}

impl From<DispatchError> for CliError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Spawn { .. } => Self::Process(err.to_string()),
            DispatchError::Notice(_) => Self::Io(err.to_string()),
        }
    }
}
