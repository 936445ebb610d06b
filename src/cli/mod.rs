use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DEFAULT_ENTRY_KIND, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
};
use crate::version::BUILD_INFO;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

/// A command-line interface for managing NetBox device journal entries
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(version = BUILD_INFO.short(), long_about = None)]
pub struct CliArgs {
    /// Enable debug logging on stderr
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log format: text or json
    #[clap(
        long,
        global = true,
        default_value = LOG_FORMAT_TEXT,
        value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON]
    )]
    pub log_format: String,

    /// Disable colored output
    #[clap(long, global = true)]
    pub no_color: bool,

    #[clap(subcommand)]
    pub command: Command,
}

/// Subcommands, one per journal operation
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Create a journal entry for a device
    Create {
        /// Device name (defaults to the local hostname)
        device: Option<String>,

        /// Comments for the journal entry
        #[clap(short = 'c', long)]
        comments: String,

        /// Kind of journal entry (info, success, warning, danger)
        #[clap(short = 'k', long, default_value = DEFAULT_ENTRY_KIND)]
        kind: String,
    },

    /// Read a specific journal entry
    Read {
        /// Journal entry ID
        id: String,
    },

    /// Update an existing journal entry
    ///
    /// At least one of --comments or --kind is required; the other field
    /// keeps its current value.
    Update {
        /// Journal entry ID
        id: String,

        /// New comments for the journal entry
        #[clap(short = 'c', long)]
        comments: Option<String>,

        /// New kind of journal entry (info, success, warning, danger)
        #[clap(short = 'k', long)]
        kind: Option<String>,
    },

    /// Delete a journal entry
    Delete {
        /// Journal entry ID
        id: String,

        /// Delete without asking for confirmation
        #[clap(short = 'f', long)]
        force: bool,
    },

    /// List journal entries for a device
    List {
        /// Device name (defaults to the local hostname)
        device: Option<String>,

        /// Limit the number of entries to display
        #[clap(short = 'l', long)]
        limit: Option<usize>,
    },

    /// Show information about the current device
    Device,

    /// Display version information
    Version,
}

impl CliArgs {
    /// Parse command-line arguments
    ///
    /// Help and version requests exit with status 0; every usage error is
    /// printed by clap and exits with status 1, like any other failure.
    pub fn parse() -> Self {
        match CliArgs::try_parse_from(std::env::args()) {
            Ok(args) => args,
            Err(e) => match usage_exit_code(e.kind()) {
                None => e.exit(),
                Some(code) => {
                    let _ = e.print();
                    std::process::exit(code)
                }
            },
        }
    }

    /// Whether JSON log output was requested
    pub fn json_logs(&self) -> bool {
        self.log_format == LOG_FORMAT_JSON
    }
}

/// Exit status for a parse failure, or `None` when clap should exit on its
/// own (help and version output go to stdout with status 0).
fn usage_exit_code(kind: ErrorKind) -> Option<i32> {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(1),
    }
}
