//! Executable lookup on the search path.

use std::ffi::OsString;
use std::path::PathBuf;

use buildgate_core::{ToolchainAvailability, ToolchainProbe, ToolchainSpec};
use tracing::debug;

/// Probes the executable search path with `which`.
///
/// By default the process `PATH` is read at probe time, so changes to the
/// environment between runs are always observed. An explicit search path can
/// be pinned with [`PathProbe::with_search_path`].
///
/// Every lookup failure counts as [`ToolchainAvailability::Absent`], not just
/// "not on the search path": an empty or unreadable search path leaves the
/// toolchain just as unusable, and the prebuilt fallback still applies.
///
/// # Example
///
/// ```no_run
/// use buildgate_core::{ToolchainProbe, ToolchainSpec};
/// use buildgate_runtime::PathProbe;
///
/// let probe = PathProbe::new();
/// if probe.probe(&ToolchainSpec::default()).is_available() {
///     println!("cargo is installed");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    search_path: Option<OsString>,
}

impl PathProbe {
    /// Create a probe that reads the process `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a probe that searches only `search_path` (same syntax as `PATH`).
    #[must_use]
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn locate(&self, executable: &str) -> Result<PathBuf, which::Error> {
        match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(executable, Some(paths), cwd)
            }
            None => which::which(executable),
        }
    }
}

impl ToolchainProbe for PathProbe {
    fn probe(&self, spec: &ToolchainSpec) -> ToolchainAvailability {
        match self.locate(spec.executable()) {
            Ok(path) => {
                debug!(toolchain = spec.executable(), path = %path.display(), "found on search path");
                ToolchainAvailability::Present { path }
            }
            Err(e) => {
                debug!(toolchain = spec.executable(), error = %e, "not on search path");
                ToolchainAvailability::Absent
            }
        }
    }
}
