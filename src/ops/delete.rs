//! Delete a journal entry, with interactive confirmation.

use super::read::read_entry;
use crate::constants::DELETE_CONFIRMATION;
use crate::errors::AppResult;
use crate::netbox::{NetboxClient, Transport};
use crate::render::{entry_details, OutputStyle};
use std::io::{BufRead, Write};
use tracing::info;

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The entry was deleted.
    Deleted,
    /// The user declined the confirmation prompt.
    Cancelled,
}

/// Deletes a journal entry.
///
/// Unless `force` is set, the entry is fetched and shown on `output`, and the
/// deletion only proceeds if the user types exactly `yes` on `input`.
///
/// # Arguments
///
/// * `client` - NetBox client
/// * `entry_id` - Journal entry id
/// * `force` - Skip the confirmation prompt
/// * `input` - Source of the confirmation answer (stdin in the CLI)
/// * `output` - Where the entry and prompt are written (stdout in the CLI)
/// * `style` - Output styling for the entry details
///
/// # Errors
///
/// Returns an error if:
/// - The entry does not exist
/// - Reading the answer or writing the prompt fails
/// - The service refuses the deletion or is unreachable
pub fn delete_entry<T, R, W>(
    client: &NetboxClient<T>,
    entry_id: u64,
    force: bool,
    input: &mut R,
    output: &mut W,
    style: &OutputStyle,
) -> AppResult<DeleteOutcome>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    if !force {
        let entry = read_entry(client, entry_id)?;

        writeln!(output, "Are you sure you want to delete the following journal entry?")?;
        writeln!(output, "{}", entry_details(&entry, style))?;
        write!(output, "Type '{}' to confirm: ", DELETE_CONFIRMATION)?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if answer.trim() != DELETE_CONFIRMATION {
            info!("Deletion of journal entry {} cancelled", entry_id);
            return Ok(DeleteOutcome::Cancelled);
        }
    }

    client.delete_journal_entry(entry_id)?;
    Ok(DeleteOutcome::Deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netbox::fake::FakeTransport;
    use crate::netbox::Method;
    use serde_json::json;
    use std::io::Cursor;

    fn entry_json() -> serde_json::Value {
        json!({ "id": 4, "kind": "info", "comments": "temporary note", "created_by": "alice" })
    }

    #[test]
    fn test_confirmed_delete() {
        let transport = FakeTransport::new()
            .respond(200, entry_json())
            .respond_raw(204, "");
        let client = NetboxClient::with_transport("https://netbox.test", "t", transport);
        let mut input = Cursor::new("yes\n");
        let mut output = Vec::new();

        let outcome =
            delete_entry(&client, 4, false, &mut input, &mut output, &OutputStyle::plain())
                .unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Are you sure"));
        assert!(shown.contains("Comments: temporary note"));
        assert!(shown.contains("Type 'yes' to confirm: "));

        let requests = client.transport_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, Method::Delete);
    }

    #[test]
    fn test_anything_but_yes_cancels() {
        for answer in ["y\n", "YES\n", "\n", "no\n", ""] {
            let transport = FakeTransport::new().respond(200, entry_json());
            let client = NetboxClient::with_transport("https://netbox.test", "t", transport);
            let mut input = Cursor::new(answer);
            let mut output = Vec::new();

            let outcome =
                delete_entry(&client, 4, false, &mut input, &mut output, &OutputStyle::plain())
                    .unwrap();
            assert_eq!(outcome, DeleteOutcome::Cancelled, "answer {:?}", answer);
            assert_eq!(client.transport_requests().len(), 1);
        }
    }

    #[test]
    fn test_forced_delete_skips_prompt() {
        let transport = FakeTransport::new().respond_raw(204, "");
        let client = NetboxClient::with_transport("https://netbox.test", "t", transport);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let outcome =
            delete_entry(&client, 4, true, &mut input, &mut output, &OutputStyle::plain()).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(output.is_empty());
        assert_eq!(client.transport_requests().len(), 1);
    }

    #[test]
    fn test_delete_then_read_is_not_found() {
        let transport = FakeTransport::new()
            .respond_raw(204, "")
            .respond(404, json!({ "detail": "Not found." }));
        let client = NetboxClient::with_transport("https://netbox.test", "t", transport);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        delete_entry(&client, 4, true, &mut input, &mut output, &OutputStyle::plain()).unwrap();
        let err = read_entry(&client, 4).unwrap_err();
        assert!(err.is_not_found());
    }
}
