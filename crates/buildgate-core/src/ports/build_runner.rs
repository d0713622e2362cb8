//! Build runner port.
//!
//! Runs the toolchain's release build to completion and reports how it
//! exited. The runner never interprets the build's output.

use std::fmt;
use std::path::Path;

use crate::error::DispatchResult;

/// Exit status of a delegated build, as a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStatus(i32);

impl BuildStatus {
    /// Wrap a raw exit code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// The exit code to hand back to our own caller.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Whether the build succeeded.
    #[must_use]
    pub const fn success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit code {}", self.0)
    }
}

/// Port for running a release build synchronously.
pub trait BuildRunner {
    /// Run `program` with `args` in the current working directory and block
    /// until it exits.
    ///
    /// A non-zero exit is `Ok`; `Err` means the program could not be run at all.
    fn run(&self, program: &Path, args: &[String]) -> DispatchResult<BuildStatus>;
}

impl<T: BuildRunner + ?Sized> BuildRunner for &T {
    fn run(&self, program: &Path, args: &[String]) -> DispatchResult<BuildStatus> {
        (**self).run(program, args)
    }
}
