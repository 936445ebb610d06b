//! List a device's journal entries.

use crate::errors::AppResult;
use crate::models::JournalEntry;
use crate::netbox::{NetboxClient, Transport};
use crate::render::{limit_entries, sort_newest_first};
use tracing::info;

/// Lists the journal entries of the named device, newest first.
///
/// `limit` is applied after sorting, so it keeps the most recent entries.
/// `None` or `0` keeps everything.
pub fn list_entries<T: Transport>(
    client: &NetboxClient<T>,
    device_name: &str,
    limit: Option<usize>,
) -> AppResult<Vec<JournalEntry>> {
    let device_id = client.device_id_by_name(device_name)?;

    let mut entries = client.list_journal_entries(device_id)?;
    sort_newest_first(&mut entries);
    let entries = limit_entries(entries, limit);

    info!(
        "Listing {} journal entries for device '{}'",
        entries.len(),
        device_name
    );
    Ok(entries)
}
