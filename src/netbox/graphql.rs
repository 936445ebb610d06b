//! GraphQL query and response shapes for listing a device's journal.

use super::display::extract_kind;
use crate::models::JournalEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Request body accepted by NetBox's `/graphql/` endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest {
    pub query: String,
}

/// Builds the journal query for a single device id.
pub(crate) fn journal_query(device_id: u64) -> String {
    format!(
        r#"{{
  device_list(filters: {{id: {{exact: {device_id}}}}}) {{
    id
    name
    journal_entries {{
      id
      created
      display
      comments
      created_by {{
        username
      }}
    }}
  }}
}}"#
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<JournalData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JournalData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_list: Vec<DeviceNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub journal_entries: Vec<JournalNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JournalNode {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: String,
    #[serde(default)]
    pub created_by: Option<UserNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
}

impl JournalNode {
    /// Converts a query result into a domain entry.
    ///
    /// Individual fields degrade instead of failing the whole list: a
    /// non-numeric id becomes 0 and an unparseable timestamp becomes `now`.
    pub fn into_entry(self, now: DateTime<Utc>) -> JournalEntry {
        let id = self.id.trim().parse::<u64>().unwrap_or(0);
        let created = match DateTime::parse_from_rfc3339(self.created.trim()) {
            Ok(created) => created.with_timezone(&Utc),
            Err(e) => {
                warn!(
                    "Journal entry {} has unparseable creation time '{}': {}",
                    self.id, self.created, e
                );
                now
            }
        };
        let kind = extract_kind(&self.display);

        JournalEntry {
            id,
            created: Some(created),
            created_by: self.created_by.map(|user| user.username).unwrap_or_default(),
            kind,
            comments: self.comments,
            ..JournalEntry::default()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// GraphQL `ID` scalars are strings, but some servers send numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Text(text)) => text,
        Some(Id::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
