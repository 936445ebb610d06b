//! Build metadata.
//!
//! Values are fixed at compile time. Set `NBJRNLCTL_GIT_COMMIT` and
//! `NBJRNLCTL_BUILD_DATE` in the build environment to record them.

use std::env::consts::{ARCH, OS};
use std::fmt;

/// Immutable description of the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Semantic version of the package
    pub version: &'static str,
    /// Git commit hash the binary was built from
    pub git_commit: &'static str,
    /// Build timestamp
    pub build_date: &'static str,
    /// Target operating system
    pub os: &'static str,
    /// Target architecture
    pub arch: &'static str,
}

/// Build information for this binary.
pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    git_commit: match option_env!("NBJRNLCTL_GIT_COMMIT") {
        Some(commit) => commit,
        None => "unknown",
    },
    build_date: match option_env!("NBJRNLCTL_BUILD_DATE") {
        Some(date) => date,
        None => "unknown",
    },
    os: OS,
    arch: ARCH,
};

impl BuildInfo {
    /// Just the semantic version.
    pub fn short(&self) -> &'static str {
        self.version
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nbjrnlctl version {} (commit: {}, built: {}, platform: {}/{})",
            self.version, self.git_commit, self.build_date, self.os, self.arch
        )
    }
}
