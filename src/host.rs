//! Local hostname detection.
//!
//! Commands that take an optional device name fall back to the machine's
//! hostname, on the assumption that NetBox names devices after their hosts.

use crate::constants::{ENV_VAR_HOSTNAME, UNKNOWN_HOST};
use std::env;
use std::fs;
use std::process::Command;
use tracing::debug;

/// Returns the local hostname.
///
/// Sources, first non-blank wins: the `HOSTNAME` environment variable,
/// `/etc/hostname`, the output of the `hostname` command. Falls back to
/// `unknown-host`.
pub fn hostname() -> String {
    let from_env = env::var(ENV_VAR_HOSTNAME).ok();
    let from_file = || fs::read_to_string("/etc/hostname").ok();
    let from_command = || {
        Command::new("hostname")
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| String::from_utf8(output.stdout).ok())
    };

    let name = first_non_blank([from_env])
        .or_else(|| first_non_blank([from_file()]))
        .or_else(|| first_non_blank([from_command()]))
        .unwrap_or_else(|| UNKNOWN_HOST.to_string());

    debug!("Local hostname: {}", name);
    name
}

fn first_non_blank<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|candidate| candidate.trim().to_string())
        .find(|candidate| !candidate.is_empty())
}

/// Resolves an optional device argument, defaulting to the local hostname.
///
/// Returns the device name and whether the hostname was used.
pub fn device_or_hostname(device: Option<&str>) -> (String, bool) {
    match device.map(str::trim).filter(|d| !d.is_empty()) {
        Some(device) => (device.to_string(), false),
        None => (hostname(), true),
    }
}
