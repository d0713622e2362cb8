//! Synchronous child-process build runner.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use buildgate_core::{BuildRunner, BuildStatus, DispatchError, DispatchResult};
use tracing::debug;

/// Runs the release build as a blocking child process.
///
/// The child inherits stdin, stdout and stderr, so the toolchain's own output
/// reaches the user untouched. It runs in the current working directory
/// unless [`with_working_dir`](Self::with_working_dir) says otherwise.
#[derive(Debug, Clone, Default)]
pub struct ProcessBuildRunner {
    working_dir: Option<PathBuf>,
}

impl ProcessBuildRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_working_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }
}

impl BuildRunner for ProcessBuildRunner {
    fn run(&self, program: &Path, args: &[String]) -> DispatchResult<BuildStatus> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|e| {
            let name = program
                .file_name()
                .map_or_else(|| program.display().to_string(), |n| n.to_string_lossy().into_owned());
            DispatchError::spawn(name, program, e)
        })?;

        debug!(?status, "build process exited");
        Ok(BuildStatus::from_code(exit_code_of(status)))
    }
}

/// Map a child's exit status to the code we exit with ourselves.
///
/// A normal exit keeps its code. On unix a child killed by a signal maps to
/// `128 + signal`, as shells report it. Anything else is 1.
#[must_use]
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
