//! NetBox API access for device journal entries.
//!
//! This module talks to NetBox's REST API for journal entry CRUD and device
//! lookup, and to its GraphQL API for listing a device's journal.
//!
//! # Module Structure
//!
//! - `transport`: HTTP seam (`Transport` trait and the blocking implementation)
//! - `client`: `NetboxClient` with the journal entry operations
//! - `devices`: device name resolution over the paginated device listing
//! - `graphql`: query text and response shapes for listing
//! - `display`: kind recovery from display strings
//!
//! # Example
//!
//! ```no_run
//! use nbjrnlctl::netbox::NetboxClient;
//!
//! let client = NetboxClient::new("https://netbox.example.com", "0123456789abcdef")?;
//! let device_id = client.device_id_by_name("core-sw-01")?;
//! for entry in client.list_journal_entries(device_id)? {
//!     println!("{} {}", entry.kind, entry.comments);
//! }
//! # Ok::<(), nbjrnlctl::AppError>(())
//! ```

pub mod client;
pub mod devices;
pub mod display;
pub(crate) mod graphql;
pub mod transport;

#[cfg(test)]
pub(crate) mod fake;

// Re-export commonly used types
pub use client::NetboxClient;
pub use display::extract_kind;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};
