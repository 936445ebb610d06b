//! Constants used throughout the application.
//!
//! This module contains all constants used in nbjrnlctl, organized into
//! logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "nbjrnlctl";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Netbox Journal CLI Tool";

// CLI Arguments & Defaults
/// Default kind assigned to newly created journal entries.
pub const DEFAULT_ENTRY_KIND: &str = "info";
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is given.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Answer the user must type to confirm a deletion.
pub const DELETE_CONFIRMATION: &str = "yes";

// Configuration Keys & Environment Variables
/// Environment variable holding the NetBox base URL.
pub const ENV_VAR_NETBOX_URL: &str = "NETBOX_URL";
/// Environment variable holding the NetBox API token.
pub const ENV_VAR_NETBOX_API_TOKEN: &str = "NETBOX_API_TOKEN";
/// Environment variable overriding the config file location.
pub const ENV_VAR_CONFIG_PATH: &str = "NBJRNLCTL_CONFIG";
/// Environment variable holding the tracing filter directive.
pub const ENV_VAR_LOG: &str = "NBJRNLCTL_LOG";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Environment variable consulted first for the local hostname.
pub const ENV_VAR_HOSTNAME: &str = "HOSTNAME";
/// Standard environment variable disabling colored output.
pub const ENV_VAR_NO_COLOR: &str = "NO_COLOR";
/// Default config file location, expanded with `shellexpand`.
pub const DEFAULT_CONFIG_PATH: &str = "~/.nbjrnlctl/config.json";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Remote API
/// Paginated device listing.
pub const DEVICES_PATH: &str = "/api/dcim/devices/";
/// Flat journal entries resource.
pub const JOURNAL_ENTRIES_PATH: &str = "/api/extras/journal-entries/";
/// GraphQL query endpoint.
pub const GRAPHQL_PATH: &str = "/graphql/";
/// Per-request timeout applied to every outbound call, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Date/Time Formats
/// Timestamp format used in the list table (local time).
pub const LIST_DATE_FORMAT: &str = "%m/%d %H:%M";
/// Timestamp format used when showing a single entry (local time).
pub const DETAIL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Fallbacks
/// Hostname reported when the local hostname cannot be determined.
pub const UNKNOWN_HOST: &str = "unknown-host";
