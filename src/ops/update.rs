//! Update an existing journal entry.

use super::read::read_entry;
use crate::errors::{AppError, AppResult};
use crate::models::JournalEntry;
use crate::netbox::{NetboxClient, Transport};
use tracing::debug;

/// Updates the comments and/or kind of a journal entry.
///
/// # Flow
///
/// 1. Fetch the current entry (so unchanged comments are re-sent as-is)
/// 2. Overlay the provided values
/// 3. PATCH the merged entry
///
/// # Arguments
///
/// * `client` - NetBox client
/// * `entry_id` - Journal entry id
/// * `comments` - New comments, if changing
/// * `kind` - New kind, if changing
///
/// # Errors
///
/// Returns an error if:
/// - Neither comments nor kind is given (`AppError::Argument`)
/// - The entry does not exist (`AppError::NotFound`)
/// - The service rejects the update or is unreachable
pub fn update_entry<T: Transport>(
    client: &NetboxClient<T>,
    entry_id: u64,
    comments: Option<&str>,
    kind: Option<&str>,
) -> AppResult<JournalEntry> {
    let comments = comments.filter(|c| !c.is_empty());
    let kind = kind.filter(|k| !k.is_empty());
    if comments.is_none() && kind.is_none() {
        return Err(AppError::Argument(
            "Nothing to update: pass --comments and/or --kind".to_string(),
        ));
    }

    let current = read_entry(client, entry_id)?;
    debug!("Current entry {}: kind '{}'", entry_id, current.kind);

    let patch = JournalEntry {
        id: entry_id,
        comments: comments.map_or(current.comments, str::to_string),
        kind: kind.map_or(current.kind, str::to_string),
        ..JournalEntry::default()
    };

    client.update_journal_entry(entry_id, &patch)
}
