//! Domain model for NetBox journal entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A journal entry attached to a NetBox object.
///
/// Serialization follows NetBox's partial-update rules: `comments` is always
/// sent, every other field is omitted when empty or zero so that a PATCH never
/// overwrites values held by the server.
///
/// # Examples
///
/// ```
/// use nbjrnlctl::models::JournalEntry;
///
/// let entry = JournalEntry::new("rebooted after kernel update", "warning");
/// let body = serde_json::to_value(&entry).unwrap();
///
/// assert_eq!(body["comments"], "rebooted after kernel update");
/// assert_eq!(body["kind"], "warning");
/// assert!(body.get("id").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Identifier assigned by NetBox; zero until the entry has been created.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,

    /// Content type of the object the entry is attached to (e.g. `dcim.device`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub assigned_object_type: String,

    /// Identifier of the object the entry is attached to.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub assigned_object_id: u64,

    /// Creation timestamp, set by NetBox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Author of the entry, set by NetBox.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "deserialize_created_by"
    )]
    pub created_by: String,

    /// Severity label such as `info`, `success`, `warning` or `danger`.
    ///
    /// Kept as free text: NetBox installations may define additional kinds.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "deserialize_kind"
    )]
    pub kind: String,

    /// Free-text body of the entry.
    #[serde(default)]
    pub comments: String,
}

impl JournalEntry {
    /// Creates an entry carrying only the writable fields.
    pub fn new(comments: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            comments: comments.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// NetBox renders choice fields as `{"value": "info", "label": "Info"}` on
/// read and accepts the bare value on write.
#[derive(Deserialize)]
#[serde(untagged)]
enum KindRepr {
    Plain(String),
    Choice { value: String },
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let kind = Option::<KindRepr>::deserialize(deserializer)?;
    Ok(match kind {
        Some(KindRepr::Plain(value)) | Some(KindRepr::Choice { value }) => value,
        None => String::new(),
    })
}

/// Authors arrive as a username, a bare user id, or a nested user object
/// depending on the NetBox version and endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedByRepr {
    Name(String),
    Id(u64),
    User {
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        display: Option<String>,
        #[serde(default)]
        id: Option<u64>,
    },
}

fn deserialize_created_by<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let author = Option::<CreatedByRepr>::deserialize(deserializer)?;
    Ok(match author {
        Some(CreatedByRepr::Name(name)) => name,
        Some(CreatedByRepr::Id(id)) => id.to_string(),
        Some(CreatedByRepr::User {
            username,
            display,
            id,
        }) => username
            .or(display)
            .or_else(|| id.map(|id| id.to_string()))
            .unwrap_or_default(),
        None => String::new(),
    })
}
