/*!
# nbjrnlctl

nbjrnlctl is a command-line client for NetBox device journal entries. It
resolves a device name to its NetBox id and creates, reads, updates, deletes
and lists the journal entries attached to that device.

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `models`: The `JournalEntry` domain type
- `netbox`: HTTP transport, device resolution and the journal client
- `ops`: One operation per command
- `render`: Sorting and terminal output
- `host`: Local hostname detection
- `version`: Build metadata

## Usage Example

```rust,no_run
use nbjrnlctl::netbox::NetboxClient;
use nbjrnlctl::{ops, Config};

fn main() -> nbjrnlctl::AppResult<()> {
    let config = Config::load()?;
    let client = NetboxClient::from_config(&config)?;

    let entry = ops::create_entry(&client, "core-sw-01", "replaced PSU 2", "success")?;
    println!("created journal entry {}", entry.id);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Local hostname detection
pub mod host;
/// Journal entry domain model
pub mod models;
/// NetBox API access
pub mod netbox;
/// High-level operations behind each command
pub mod ops;
/// Terminal rendering
pub mod render;
/// Build metadata
pub mod version;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use models::JournalEntry;
