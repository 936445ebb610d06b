//! Device name resolution over NetBox's paginated device listing.

use super::client::NetboxClient;
use super::transport::{Method, Transport};
use crate::constants::DEVICES_PATH;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// One page of `GET /api/dcim/devices/`.
#[derive(Debug, Deserialize)]
struct DevicePage {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    results: Vec<DeviceSummary>,
}

#[derive(Debug, Deserialize)]
struct DeviceSummary {
    id: u64,
    #[serde(default)]
    name: Option<String>,
}

impl<T: Transport> NetboxClient<T> {
    /// Resolves a device name to its NetBox id.
    ///
    /// Pages are fetched in order by following each page's `next` link
    /// verbatim. The scan stops at the first exact (case-sensitive) match, so
    /// no page after the matching one is requested.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no device carries exactly this name once pagination is exhausted
    ///   (`AppError::NotFound`)
    /// - a page cannot be fetched or answers with a status other than 200
    /// - a page body is not a device listing
    pub fn device_id_by_name(&self, name: &str) -> AppResult<u64> {
        const OPERATION: &str = "look up device";

        let mut next_url = Some(self.url(DEVICES_PATH));
        let mut visited = HashSet::new();

        while let Some(url) = next_url.take() {
            if !visited.insert(url.clone()) {
                warn!("Device listing links back to an already fetched page: {}", url);
                break;
            }

            let request = self.request(Method::Get, url.as_str());
            let response = self.execute(&request, OPERATION, &url, 200)?;
            let page: DevicePage = Self::decode(&response, OPERATION, &url)?;
            debug!(
                "Scanning {} devices from {} ({} total)",
                page.results.len(),
                url,
                page.count
            );

            if let Some(device) = page
                .results
                .iter()
                .find(|device| device.name.as_deref() == Some(name))
            {
                info!("Resolved device '{}' to id {}", name, device.id);
                return Ok(device.id);
            }

            next_url = page.next.filter(|next| !next.is_empty());
        }

        Err(AppError::NotFound {
            what: "device",
            target: format!("name: {}", name),
        })
    }
}
