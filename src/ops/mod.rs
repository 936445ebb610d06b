//! High-level operations behind each command.
//!
//! This module provides user-facing operations that orchestrate device
//! resolution, the NetBox client and local post-processing. Printing is left
//! to the caller except where an operation has to talk to the user (delete
//! confirmation).

pub mod create;
pub mod delete;
pub mod device;
pub mod list;
pub mod read;
pub mod update;

use crate::errors::{AppError, AppResult};

// Re-export commonly used functions
pub use create::create_entry;
pub use delete::{delete_entry, DeleteOutcome};
pub use device::{device_info, DeviceInfo};
pub use list::list_entries;
pub use read::read_entry;
pub use update::update_entry;

/// Parses a journal entry id given on the command line.
///
/// # Examples
///
/// ```
/// use nbjrnlctl::ops::parse_entry_id;
///
/// assert_eq!(parse_entry_id("42").unwrap(), 42);
/// assert!(parse_entry_id("-1").is_err());
/// assert!(parse_entry_id("abc").is_err());
/// ```
pub fn parse_entry_id(raw: &str) -> AppResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| AppError::Argument(format!("Invalid journal ID '{}': {}", raw, e)))
}
