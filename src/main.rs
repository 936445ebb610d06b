/*!
# nbjrnlctl - Netbox Journal CLI Tool

Command-line entry point: parses arguments, sets up logging, loads the NetBox
configuration and runs one command.

## Usage

```
nbjrnlctl <COMMAND>

Commands:
  create   Create a journal entry for a device
  read     Read a specific journal entry
  update   Update an existing journal entry
  delete   Delete a journal entry
  list     List journal entries for a device
  device   Show information about the current device
  version  Display version information
```

## Configuration

- `NETBOX_URL`: Root URL of the NetBox instance
- `NETBOX_API_TOKEN`: API token
- `NBJRNLCTL_CONFIG`: Optional JSON config file (defaults to ~/.nbjrnlctl/config.json)
- `NBJRNLCTL_LOG`: Log filter directive (e.g. `debug`)
*/

use nbjrnlctl::cli::{CliArgs, Command};
use nbjrnlctl::constants::{DEFAULT_LOG_LEVEL, ENV_VAR_LOG, VERBOSE_LOG_LEVEL};
use nbjrnlctl::errors::AppResult;
use nbjrnlctl::host;
use nbjrnlctl::netbox::NetboxClient;
use nbjrnlctl::ops::{self, parse_entry_id, DeleteOutcome};
use nbjrnlctl::render::{entries_table, entry_details, OutputStyle};
use nbjrnlctl::version::BUILD_INFO;
use nbjrnlctl::Config;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = init_tracing(args.verbose, args.json_logs()) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    debug!("CLI arguments: {:?}", args);

    if let Err(err) = run(args) {
        debug!("Command failed: {:?}", err);
        eprintln!("Error: {}", err);
        if err.is_not_found() {
            eprintln!("Please ensure it exists in NetBox.");
        }
        std::process::exit(1);
    }
}

/// Structured logging on stderr. `--verbose` forces debug level; otherwise
/// `NBJRNLCTL_LOG` is honored with a fallback to warnings only.
fn init_tracing(
    verbose: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_env(ENV_VAR_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().try_init()
    } else {
        builder.with_target(false).try_init()
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    let style = OutputStyle::from_env(args.no_color);

    match args.command {
        Command::Version => {
            println!("{}", BUILD_INFO);
        }

        Command::Create {
            device,
            comments,
            kind,
        } => {
            let client = connect()?;
            let device = device_name(device.as_deref());
            let created = ops::create_entry(&client, &device, &comments, &kind)?;
            println!("Journal entry created with ID: {}", created.id);
        }

        Command::Read { id } => {
            let entry_id = parse_entry_id(&id)?;
            let client = connect()?;
            let entry = ops::read_entry(&client, entry_id)?;
            println!("{}", entry_details(&entry, &style));
        }

        Command::Update { id, comments, kind } => {
            let entry_id = parse_entry_id(&id)?;
            let client = connect()?;
            let updated =
                ops::update_entry(&client, entry_id, comments.as_deref(), kind.as_deref())?;
            println!("Journal entry {} updated successfully", updated.id);
        }

        Command::Delete { id, force } => {
            let entry_id = parse_entry_id(&id)?;
            let client = connect()?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            let outcome = ops::delete_entry(
                &client,
                entry_id,
                force,
                &mut stdin.lock(),
                &mut stdout.lock(),
                &style,
            )?;
            match outcome {
                DeleteOutcome::Deleted => println!("Journal entry deleted successfully"),
                DeleteOutcome::Cancelled => println!("Deletion cancelled"),
            }
        }

        Command::List { device, limit } => {
            let client = connect()?;
            let device = device_name(device.as_deref());
            let entries = ops::list_entries(&client, &device, limit)?;
            if entries.is_empty() {
                println!("No journal entries found for this device");
            } else {
                println!("{}", entries_table(&entries, &style));
            }
        }

        Command::Device => {
            let client = connect()?;
            let hostname = host::hostname();
            let device = ops::device_info(&client, &hostname)?;
            println!("Default Device Information:");
            println!("  Hostname: {}", device.hostname);
            println!("  Netbox Device ID: {}", device.device_id);
            println!();
            println!("This device will be used when no device name is specified for commands.");
        }
    }

    Ok(())
}

fn connect() -> AppResult<NetboxClient> {
    info!("Loading configuration");
    let config = Config::load()?;
    NetboxClient::from_config(&config)
}

fn device_name(device: Option<&str>) -> String {
    let (device, used_hostname) = host::device_or_hostname(device);
    if used_hostname {
        println!("No device name provided. Using local hostname: {}", device);
    }
    device
}
