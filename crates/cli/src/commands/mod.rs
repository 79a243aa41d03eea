pub mod history;
pub mod scan;
pub mod sweep;
pub mod undo;

use std::path::Path;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

pub use history::HistoryArgs;
pub use scan::ScanArgs;
pub use sweep::SweepArgs;
pub use undo::UndoArgs;

use silt_fs::{FileKind, FilterConfig};
use silt_protocol::client::{ProcessTransport, ToolClient};
use silt_runtime::{DEFAULT_THRESHOLD_DAYS, DEFAULT_TOOL_COMMAND};

use crate::printer::{ColorChoice, Printer};

/// Common error type for command handlers
pub type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "silt",
    version,
    about = "Silt - find and safely sweep stale files in cloud-synced folders",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect a directory and report likely-unused and zero-byte files.
    ///
    /// Example:
    ///   silt scan "C:\Users\me\OneDrive\Desktop"
    ///   silt scan --days 90 --kind pdf ~/Documents
    Scan(ScanArgs),

    /// Review flagged files one by one and move confirmed ones to the trash.
    ///
    /// Example:
    ///   silt sweep ~/Downloads
    ///   silt sweep --all --max-size-mb 500 ~/Downloads
    Sweep(SweepArgs),

    /// Show the deletion history.
    History(HistoryArgs),

    /// Drop the most recent deletion from the history.
    Undo(UndoArgs),
}

/// Options shared by the commands that talk to the tool process.
#[derive(Debug, Args)]
pub struct InspectOptions {
    /// Directory the tool process is scoped to
    pub root: String,

    /// Tool executable to spawn
    #[arg(long, value_name = "CMD", default_value = DEFAULT_TOOL_COMMAND)]
    pub tool: String,

    /// Days without modification before a file counts as unused
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_DAYS)]
    pub days: u32,

    /// Only consider this kind of file: all, pdf, image, docs, archive
    #[arg(long, default_value = "all")]
    pub kind: String,

    /// Skip files whose name contains this substring (case-insensitive)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Option<String>,

    /// Minimum file size in MB (0 disables the bound)
    #[arg(long, default_value_t = 0)]
    pub min_size_mb: i64,

    /// Maximum file size in MB (0 disables the bound)
    #[arg(long, default_value_t = 0)]
    pub max_size_mb: i64,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

impl InspectOptions {
    pub fn filter(&self) -> FilterConfig {
        FilterConfig {
            kind: FileKind::parse(&self.kind),
            exclude_pattern: self.exclude.clone(),
            min_size_mb: self.min_size_mb,
            max_size_mb: self.max_size_mb,
        }
    }

    pub fn spawn_client(&self) -> anyhow::Result<ToolClient<ProcessTransport>> {
        ToolClient::spawn(&self.tool, Path::new(&self.root))
            .with_context(|| format!("failed to launch tool process `{}`", self.tool))
    }

    pub fn printer(&self) -> Printer {
        Printer::stdout(ColorChoice::parse(&self.color))
    }
}
