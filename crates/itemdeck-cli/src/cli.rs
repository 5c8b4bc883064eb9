//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use itemdeck_model::{SortDirection, SortField};

#[derive(Parser)]
#[command(
    name = "itemdeck",
    version,
    about = "Inventory dashboard on the command line",
    long_about = "Browse, filter, sort and edit inventory records.\n\n\
                  Records persist between runs in a session file, seeded from the\n\
                  catalog the first time."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Session file holding the current records.
    #[arg(long = "session", value_name = "PATH", global = true)]
    pub session: Option<PathBuf>,

    /// Settings file (default: platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List records through the current filters and sort.
    List(ListArgs),

    /// Show dashboard totals and chart breakdowns.
    Stats,

    /// Show one record in full.
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Create a record.
    Add(AddArgs),

    /// Edit a record; fields not given keep their current value.
    Update(UpdateArgs),

    /// Delete a record.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Args, Default)]
pub struct ListArgs {
    /// Case-insensitive substring of the record name.
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// Column to sort on (id, name, category, value, status, created-at, description).
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// Sort descending.
    #[arg(long, conflicts_with = "asc")]
    pub desc: bool,

    /// Sort ascending (default when --sort is given).
    #[arg(long)]
    pub asc: bool,
}

impl ListArgs {
    /// Direction requested on the command line, if any.
    pub fn direction(&self) -> Option<SortDirection> {
        if self.desc {
            Some(SortDirection::Desc)
        } else if self.asc {
            Some(SortDirection::Asc)
        } else {
            None
        }
    }
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub value: f64,

    #[arg(long, default_value = "active")]
    pub status: String,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub value: Option<f64>,

    #[arg(long)]
    pub status: Option<String>,

    /// New description; pass an empty string to remove it.
    #[arg(long)]
    pub description: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
