//! Terminal rendering for journal entries.
//!
//! Entries are sorted and trimmed locally, then rendered either as a table
//! (list) or as labelled lines (single entry). Colors follow the entry kind.

use crate::constants::{DETAIL_DATE_FORMAT, ENV_VAR_NO_COLOR, LIST_DATE_FORMAT};
use crate::models::JournalEntry;
use chrono::{DateTime, Local, Utc};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use std::cmp::Reverse;
use std::io::IsTerminal;

/// ANSI escape codes for line-oriented output.
mod ansi {
    pub const BLUE: &str = "\x1b[34m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const WHITE: &str = "\x1b[37m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Output styling resolved from flags and the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    /// Whether ANSI colors are emitted
    pub color: bool,
}

impl OutputStyle {
    /// Resolves styling: colors need a terminal on stdout and are disabled by
    /// `--no-color`, `NO_COLOR` or `TERM=dumb`.
    pub fn from_env(no_color_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let no_color_env = std::env::var_os(ENV_VAR_NO_COLOR).is_some();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);

        Self {
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
        }
    }

    /// Styling without colors.
    pub fn plain() -> Self {
        Self { color: false }
    }
}

/// Sorts entries by creation time, newest first. Entries without a
/// timestamp go last.
pub fn sort_newest_first(entries: &mut [JournalEntry]) {
    entries.sort_by_key(|entry| Reverse(entry.created));
}

/// Keeps at most `limit` entries; `None` or `0` keeps everything.
pub fn limit_entries(mut entries: Vec<JournalEntry>, limit: Option<usize>) -> Vec<JournalEntry> {
    if let Some(limit) = limit.filter(|limit| *limit > 0) {
        entries.truncate(limit);
    }
    entries
}

/// Emoji shown for a kind. Matching ignores case.
pub fn kind_emoji(kind: &str) -> &'static str {
    match kind.to_ascii_lowercase().as_str() {
        "info" => "ℹ️",
        "success" => "✅",
        "warning" => "⚠️",
        "danger" => "🚨",
        _ => "📝",
    }
}

/// Table color for a kind. Matching ignores case.
pub fn kind_color(kind: &str) -> Color {
    match kind.to_ascii_lowercase().as_str() {
        "info" => Color::Blue,
        "success" => Color::Green,
        "warning" => Color::Yellow,
        "danger" => Color::Red,
        _ => Color::White,
    }
}

fn kind_ansi(kind: &str) -> &'static str {
    match kind.to_ascii_lowercase().as_str() {
        "info" => ansi::BLUE,
        "success" => ansi::GREEN,
        "warning" => ansi::YELLOW,
        "danger" => ansi::RED,
        _ => ansi::WHITE,
    }
}

fn format_created(created: Option<DateTime<Utc>>, format: &str) -> String {
    created
        .map(|created| created.with_timezone(&Local).format(format).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Renders the list table: CREATED, CREATED BY, KIND, COMMENTS.
pub fn entries_table(entries: &[JournalEntry], style: &OutputStyle) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if style.color {
        table.enforce_styling();
    }

    let header: Vec<Cell> = ["CREATED", "CREATED BY", "KIND", "COMMENTS"]
        .into_iter()
        .map(|title| {
            let cell = Cell::new(title);
            if style.color {
                cell.add_attribute(Attribute::Bold)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header);

    for i in 0..4 {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 3));
        }
    }

    for entry in entries {
        let mut created = Cell::new(format_created(entry.created, LIST_DATE_FORMAT));
        let mut author = Cell::new(&entry.created_by);
        let mut kind = Cell::new(kind_emoji(&entry.kind));
        if style.color {
            let color = kind_color(&entry.kind);
            created = created.fg(color);
            author = author.fg(Color::Cyan);
            kind = kind.fg(color);
        }
        table.add_row(vec![created, author, kind, Cell::new(&entry.comments)]);
    }

    table.to_string()
}

/// Renders a single entry as labelled lines.
pub fn entry_details(entry: &JournalEntry, style: &OutputStyle) -> String {
    let kind = if style.color {
        format!("{}{}{}", kind_ansi(&entry.kind), entry.kind, ansi::RESET)
    } else {
        entry.kind.clone()
    };
    let author = if style.color {
        format!("{}{}{}", ansi::CYAN, entry.created_by, ansi::RESET)
    } else {
        entry.created_by.clone()
    };

    [
        format!("ID: {}", entry.id),
        format!(
            "Created: {}",
            format_created(entry.created, DETAIL_DATE_FORMAT)
        ),
        format!("Created By: {}", author),
        format!("Kind: {}", kind),
        format!("Comments: {}", entry.comments),
    ]
    .join("\n")
}
