//! Toolchain probe port.

use crate::toolchain::{ToolchainAvailability, ToolchainSpec};

/// Port for checking whether a toolchain executable is on the search path.
///
/// Implementations must not cache: two calls under the same host conditions
/// return the same answer because they look again, not because they remember.
pub trait ToolchainProbe {
    /// Look up `spec.executable()` and report where it lives, if anywhere.
    fn probe(&self, spec: &ToolchainSpec) -> ToolchainAvailability;
}

impl<T: ToolchainProbe + ?Sized> ToolchainProbe for &T {
    fn probe(&self, spec: &ToolchainSpec) -> ToolchainAvailability {
        (**self).probe(spec)
    }
}
