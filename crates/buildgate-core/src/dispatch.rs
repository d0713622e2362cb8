//! The build dispatcher.
//!
//! One probe, then one of two branches:
//!
//! - toolchain present: run its release build and adopt its exit status
//! - toolchain absent: print a [`FallbackNotice`] and succeed

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{DispatchError, DispatchResult};
use crate::ports::{BuildRunner, BuildStatus, ToolchainProbe};
use crate::toolchain::{ToolchainAvailability, ToolchainSpec};

/// What a dispatch run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The release build was delegated to the toolchain.
    Built {
        /// Resolved toolchain executable.
        toolchain: PathBuf,
        /// How the build exited.
        status: BuildStatus,
    },
    /// The toolchain was absent and the prebuilt artifact was announced.
    FellBack {
        /// Name of the executable that was not found.
        toolchain: String,
    },
}

impl DispatchOutcome {
    /// Process exit code for this outcome.
    ///
    /// Mirrors the build's exit code when one ran; a fallback is a success.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Built { status, .. } => status.code(),
            Self::FellBack { .. } => 0,
        }
    }
}

/// The line printed when the toolchain is absent.
#[derive(Debug, Clone, Copy)]
pub struct FallbackNotice<'a> {
    spec: &'a ToolchainSpec,
}

impl<'a> FallbackNotice<'a> {
    #[must_use]
    pub const fn new(spec: &'a ToolchainSpec) -> Self {
        Self { spec }
    }
}

impl fmt::Display for FallbackNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} not found on PATH, using prebuilt binary instead",
            self.spec.executable()
        )
    }
}

/// Decides between delegating a release build and falling back to the
/// prebuilt artifact.
///
/// Holds no state between runs; every [`run`](Self::run) probes afresh.
#[derive(Debug)]
pub struct Dispatcher<P, R> {
    spec: ToolchainSpec,
    probe: P,
    runner: R,
}

impl<P: ToolchainProbe, R: BuildRunner> Dispatcher<P, R> {
    pub fn new(spec: ToolchainSpec, probe: P, runner: R) -> Self {
        Self {
            spec,
            probe,
            runner,
        }
    }

    /// Probe for the toolchain and take the matching branch.
    ///
    /// The fallback notice goes to `out`, exactly once, and only when the
    /// toolchain is absent. Nothing is written to `out` when a build runs.
    pub fn run(&self, out: &mut impl Write) -> DispatchResult<DispatchOutcome> {
        let availability = self.probe.probe(&self.spec);
        debug!(toolchain = %self.spec, available = availability.is_available(), "probed toolchain");

        match availability {
            ToolchainAvailability::Present { path } => {
                info!(
                    toolchain = %path.display(),
                    command = %self.spec.command_line(),
                    "delegating release build"
                );
                let status = self.runner.run(&path, self.spec.build_args())?;
                debug!(%status, success = status.success(), "release build exited");
                Ok(DispatchOutcome::Built {
                    toolchain: path,
                    status,
                })
            }
            ToolchainAvailability::Absent => {
                info!(toolchain = %self.spec, "toolchain absent, falling back to prebuilt");
                writeln!(out, "{}", FallbackNotice::new(&self.spec))
                    .and_then(|()| out.flush())
                    .map_err(DispatchError::Notice)?;
                Ok(DispatchOutcome::FellBack {
                    toolchain: self.spec.executable().to_string(),
                })
            }
        }
    }
}
