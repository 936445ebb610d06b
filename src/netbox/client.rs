//! NetBox journal entry client.
//!
//! Entry CRUD goes through the REST API; listing goes through GraphQL because
//! it returns a device's entries with author names in one round trip.

use super::graphql::{journal_query, GraphQlRequest, GraphQlResponse};
use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};
use crate::config::Config;
use crate::constants::{GRAPHQL_PATH, HTTP_TIMEOUT_SECS, JOURNAL_ENTRIES_PATH};
use crate::errors::{AppError, AppResult};
use crate::models::JournalEntry;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Longest slice of an error body kept in a `Remote` error.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Client for the NetBox REST and GraphQL APIs.
///
/// Holds only immutable state (base URL, token, transport) and can be reused
/// for any number of sequential calls.
pub struct NetboxClient<T = HttpTransport> {
    base_url: String,
    api_token: String,
    transport: T,
}

impl NetboxClient<HttpTransport> {
    /// Creates a client backed by a blocking HTTP transport with the default
    /// per-request timeout.
    ///
    /// # Arguments
    ///
    /// * `base_url` - NetBox root URL (e.g., "https://netbox.example.com")
    /// * `api_token` - API token sent as `Authorization: Token ...`
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> AppResult<Self> {
        let base_url = base_url.into();
        let transport = HttpTransport::new(Duration::from_secs(HTTP_TIMEOUT_SECS)).map_err(
            |source| AppError::Transport {
                operation: "initialize HTTP client",
                target: base_url.clone(),
                source,
            },
        )?;
        Ok(Self::with_transport(base_url, api_token, transport))
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(config.netbox_url.clone(), config.api_token.clone())
    }
}

impl<T: Transport> NetboxClient<T> {
    /// Creates a client over an arbitrary transport.
    pub fn with_transport(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        transport: T,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_token: api_token.into(),
            transport,
        }
    }

    /// The NetBox root URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// A request carrying the authentication and accept headers.
    pub(crate) fn request(&self, method: Method, url: impl Into<String>) -> HttpRequest {
        HttpRequest::new(method, url)
            .header("Authorization", format!("Token {}", self.api_token))
            .header("Accept", "application/json")
    }

    fn json_request<B: Serialize>(
        &self,
        method: Method,
        url: String,
        body: &B,
        operation: &'static str,
        target: &str,
    ) -> AppResult<HttpRequest> {
        let body = serde_json::to_string(body).map_err(|source| AppError::Decode {
            operation,
            target: target.to_string(),
            source,
        })?;
        Ok(self
            .request(method, url)
            .header("Content-Type", "application/json")
            .body(body))
    }

    /// Sends `request` and checks the status against `expected`.
    pub(crate) fn execute(
        &self,
        request: &HttpRequest,
        operation: &'static str,
        target: &str,
        expected: u16,
    ) -> AppResult<HttpResponse> {
        let response = self
            .transport
            .send(request)
            .map_err(|source| AppError::Transport {
                operation,
                target: target.to_string(),
                source,
            })?;

        if response.status != expected {
            debug!(
                "{} {} returned {} (expected {})",
                request.method, request.url, response.status, expected
            );
            return Err(AppError::Remote {
                operation,
                target: target.to_string(),
                status: response.status,
                message: summarize_body(&response.body),
            });
        }

        Ok(response)
    }

    pub(crate) fn decode<R: DeserializeOwned>(
        response: &HttpResponse,
        operation: &'static str,
        target: &str,
    ) -> AppResult<R> {
        serde_json::from_str(&response.body).map_err(|source| AppError::Decode {
            operation,
            target: target.to_string(),
            source,
        })
    }

    fn entry_url(&self, entry_id: u64) -> String {
        self.url(&format!("{}{}/", JOURNAL_ENTRIES_PATH, entry_id))
    }

    /// Creates a journal entry on a device. Expects `201 Created`.
    ///
    /// Returns the server's representation, including the assigned id and
    /// creation time.
    pub fn create_journal_entry(
        &self,
        device_id: u64,
        entry: &JournalEntry,
    ) -> AppResult<JournalEntry> {
        const OPERATION: &str = "create journal entry";
        let target = format!("device {}", device_id);
        let url = self.url(&format!("/api/dcim/devices/{}/journal/", device_id));

        let request = self.json_request(Method::Post, url, entry, OPERATION, &target)?;
        let response = self.execute(&request, OPERATION, &target, 201)?;
        let created: JournalEntry = Self::decode(&response, OPERATION, &target)?;

        info!("Created journal entry {} on device {}", created.id, device_id);
        Ok(created)
    }

    /// Fetches a journal entry by id. Expects `200 OK`.
    ///
    /// A missing entry surfaces as `AppError::Remote` with status 404; use
    /// [`AppError::is_not_found`] to classify it.
    pub fn get_journal_entry(&self, entry_id: u64) -> AppResult<JournalEntry> {
        const OPERATION: &str = "get journal entry";
        let target = format!("journal entry {}", entry_id);

        let request = self.request(Method::Get, self.entry_url(entry_id));
        let response = self.execute(&request, OPERATION, &target, 200)?;
        Self::decode(&response, OPERATION, &target)
    }

    /// Partially updates a journal entry. Expects `200 OK`.
    ///
    /// Only non-empty fields of `entry` are sent, plus `comments`.
    pub fn update_journal_entry(
        &self,
        entry_id: u64,
        entry: &JournalEntry,
    ) -> AppResult<JournalEntry> {
        const OPERATION: &str = "update journal entry";
        let target = format!("journal entry {}", entry_id);

        let request =
            self.json_request(Method::Patch, self.entry_url(entry_id), entry, OPERATION, &target)?;
        let response = self.execute(&request, OPERATION, &target, 200)?;
        let updated: JournalEntry = Self::decode(&response, OPERATION, &target)?;

        info!("Updated journal entry {}", entry_id);
        Ok(updated)
    }

    /// Deletes a journal entry. Expects `204 No Content`.
    ///
    /// Deleting an entry twice fails the second time: the service no longer
    /// knows the id.
    pub fn delete_journal_entry(&self, entry_id: u64) -> AppResult<()> {
        const OPERATION: &str = "delete journal entry";
        let target = format!("journal entry {}", entry_id);

        let request = self.request(Method::Delete, self.entry_url(entry_id));
        self.execute(&request, OPERATION, &target, 204)?;

        info!("Deleted journal entry {}", entry_id);
        Ok(())
    }

    /// Lists a device's journal entries through GraphQL. Expects `200 OK`.
    ///
    /// Returns an empty list when no device has `device_id`. Kinds are
    /// recovered from each entry's display string; an entry whose creation
    /// time cannot be parsed is stamped with the current time instead of
    /// failing the list.
    pub fn list_journal_entries(&self, device_id: u64) -> AppResult<Vec<JournalEntry>> {
        const OPERATION: &str = "list journal entries";
        let target = format!("device {}", device_id);

        let body = GraphQlRequest {
            query: journal_query(device_id),
        };
        let request =
            self.json_request(Method::Post, self.url(GRAPHQL_PATH), &body, OPERATION, &target)?;
        let response = self.execute(&request, OPERATION, &target, 200)?;
        let result: GraphQlResponse = Self::decode(&response, OPERATION, &target)?;

        let data = match result.data {
            Some(data) => data,
            None if !result.errors.is_empty() => {
                let messages: Vec<String> =
                    result.errors.into_iter().map(|error| error.message).collect();
                return Err(AppError::Remote {
                    operation: OPERATION,
                    target,
                    status: response.status,
                    message: messages.join("; "),
                });
            }
            None => return Ok(Vec::new()),
        };

        let Some(device) = data.device_list.into_iter().next() else {
            debug!("No device matched id {}", device_id);
            return Ok(Vec::new());
        };

        let now = Utc::now();
        let entries: Vec<JournalEntry> = device
            .journal_entries
            .into_iter()
            .map(|node| node.into_entry(now))
            .collect();

        debug!("Found {} journal entries for device {}", entries.len(), device_id);
        Ok(entries)
    }
}

#[cfg(test)]
impl NetboxClient<super::fake::FakeTransport> {
    pub(crate) fn transport_requests(&self) -> Vec<HttpRequest> {
        self.transport.requests()
    }
}

fn summarize_body(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    format!("{}...", truncated)
}
