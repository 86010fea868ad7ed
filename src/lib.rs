pub mod commands;
pub mod inspection;
pub mod loader;
pub mod table;
pub mod utils;

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, ValueEnum, builder::ValueHint};
use std::io::{self, IsTerminal};

pub use inspection::{DEFAULT_PREVIEW_ROWS, SchemaEntry, Shape, preview, schema, shape};
pub use loader::{LoadError, LoadErrorKind, SourceFormat, detect_format, load, load_with_format};
pub use table::{Column, Table, TypeTag};

/// Report the shape, schema, and leading rows of a Parquet or Arrow IPC file.
///
/// Examples:
///   # Summary with the first 5 rows
///   table-peek data.parquet
///
///   # Show 20 rows as JSON
///   table-peek data.arrow --rows 20 --format json
///
///   # Shape and schema only
///   table-peek data.parquet --no-preview
///
/// Exit status: 0 on success, 3 if the file does not exist, 4 if it cannot be
/// read, 5 if it is not a readable Parquet or Arrow IPC file.
#[derive(Parser, Debug)]
#[command(version, about, long_about, verbatim_doc_comment)]
pub struct Cli {
    /// Path to the Parquet or Arrow IPC file to inspect
    #[arg(value_hint = ValueHint::FilePath, env = "TABLE_PEEK_FILE")]
    pub file: Utf8PathBuf,

    /// Number of leading rows to preview
    #[arg(
        long,
        short = 'n',
        default_value_t = DEFAULT_PREVIEW_ROWS,
        env = "TABLE_PEEK_ROWS"
    )]
    pub rows: usize,

    /// Skip the row preview and report only shape and schema (overrides --rows)
    #[arg(long)]
    pub no_preview: bool,

    /// Output format (auto-detects based on TTY if not specified)
    #[arg(long, short = 'f', value_enum, default_value = "auto")]
    pub format: OutputFormat,

    /// Increase log verbosity on stderr (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Rows to preview, or `None` when the preview is switched off.
    pub fn preview_rows(&self) -> Option<usize> {
        (!self.no_preview).then_some(self.rows)
    }

    /// Default tracing filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Output format for inspection reports
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Auto-detect: JSON if stdout is not a TTY, otherwise text
    #[default]
    Auto,
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
}

impl OutputFormat {
    pub fn resolves_to_json(&self) -> bool {
        match self {
            OutputFormat::Auto => !io::stdout().is_terminal(),
            OutputFormat::Text => false,
            OutputFormat::Json => true,
        }
    }
}
