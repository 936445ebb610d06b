//! Read a single journal entry.

use crate::errors::{AppError, AppResult};
use crate::models::JournalEntry;
use crate::netbox::{NetboxClient, Transport};

/// Fetches a journal entry by id.
///
/// A 404 from the service is reported as `AppError::NotFound`; every other
/// failure is passed through unchanged.
pub fn read_entry<T: Transport>(
    client: &NetboxClient<T>,
    entry_id: u64,
) -> AppResult<JournalEntry> {
    client.get_journal_entry(entry_id).map_err(|e| match e {
        AppError::Remote { status: 404, .. } => AppError::NotFound {
            what: "journal entry",
            target: format!("id: {}", entry_id),
        },
        other => other,
    })
}
