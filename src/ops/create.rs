//! Create a journal entry on a device.

use crate::errors::AppResult;
use crate::models::JournalEntry;
use crate::netbox::{NetboxClient, Transport};
use tracing::info;

/// Creates a journal entry on the named device.
///
/// # Flow
///
/// 1. Resolve the device name to its NetBox id
/// 2. POST the entry to the device's journal
/// 3. Return the server's copy (with id and creation time)
///
/// # Arguments
///
/// * `client` - NetBox client
/// * `device_name` - Exact NetBox device name
/// * `comments` - Entry text
/// * `kind` - Entry kind (e.g., "info", "warning")
///
/// # Errors
///
/// Returns an error if:
/// - No device has this name
/// - The service rejects the entry or is unreachable
pub fn create_entry<T: Transport>(
    client: &NetboxClient<T>,
    device_name: &str,
    comments: &str,
    kind: &str,
) -> AppResult<JournalEntry> {
    let device_id = client.device_id_by_name(device_name)?;
    let entry = JournalEntry::new(comments, kind);

    let created = client.create_journal_entry(device_id, &entry)?;
    info!(
        "Journal entry {} created on device '{}'",
        created.id, device_name
    );
    Ok(created)
}
