//! Toolchain constants and availability.

use std::fmt;
use std::path::{Path, PathBuf};

/// Executable name probed for when no other toolchain is configured.
pub const DEFAULT_TOOLCHAIN: &str = "cargo";

/// Arguments that request an optimized build from [`DEFAULT_TOOLCHAIN`].
pub const RELEASE_BUILD_ARGS: &[&str] = &["build", "--release"];

/// The toolchain to probe for and the arguments of its release build.
///
/// These are conventions of the surrounding project, not something buildgate
/// infers. [`ToolchainSpec::default`] yields `cargo build --release`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainSpec {
    executable: String,
    build_args: Vec<String>,
}

impl ToolchainSpec {
    /// Create a spec for an arbitrary toolchain.
    #[must_use]
    pub fn new(
        executable: impl Into<String>,
        build_args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            executable: executable.into(),
            build_args: build_args.into_iter().map(Into::into).collect(),
        }
    }

    /// Name of the executable looked up on the search path.
    #[must_use]
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Arguments passed to the executable for a release build.
    #[must_use]
    pub fn build_args(&self) -> &[String] {
        &self.build_args
    }

    /// The build command as a user would type it, e.g. `cargo build --release`.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.as_str())
            .chain(self.build_args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ToolchainSpec {
    fn default() -> Self {
        Self::new(DEFAULT_TOOLCHAIN, RELEASE_BUILD_ARGS.iter().copied())
    }
}

impl fmt::Display for ToolchainSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.executable)
    }
}

/// Result of probing the host for a toolchain.
///
/// Computed once per run and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainAvailability {
    /// The executable was found on the search path.
    Present {
        /// Resolved location of the executable.
        path: PathBuf,
    },
    /// No executable with that name is on the search path.
    Absent,
}

impl ToolchainAvailability {
    /// Whether the toolchain can be invoked.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    /// Resolved executable path, if present.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Present { path } => Some(path),
            Self::Absent => None,
        }
    }
}

impl From<Option<PathBuf>> for ToolchainAvailability {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Absent, |path| Self::Present { path })
    }
}
