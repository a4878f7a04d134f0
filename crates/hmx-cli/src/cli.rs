//! CLI argument definitions for the header-matrix viewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hmx",
    version,
    about = "HMX - view and flatten tables with hierarchical column headers",
    long_about = "Load a table with stacked (multi-level) column headers from a\n\
                  TableInfo JSON file or a CSV export, progressively flatten the\n\
                  top header levels into combined names, filter placeholder-only\n\
                  rows and redundant grouping columns, and render or export the\n\
                  result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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
    /// Render a table view in the terminal (or emit it as JSON).
    Show(ShowArgs),

    /// Write the downloadable export variant of a table view.
    Export(ExportArgs),
}

/// Options shared by every command that loads a table and derives a view.
#[derive(Args)]
pub struct TableArgs {
    /// Input file: TableInfo JSON (`.json`) or CSV with stacked headers.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of leading CSV records that form the header levels.
    #[arg(long = "header-rows", value_name = "N", default_value_t = 1)]
    pub header_rows: usize,

    /// Number of leading columns that are grouping (feature) columns.
    #[arg(long = "feature-columns", value_name = "N", default_value_t = 0)]
    pub feature_columns: usize,

    /// How many of the top header levels to combine into single names.
    #[arg(long = "flatten-level", value_name = "N", default_value_t = 0)]
    pub flatten_level: usize,

    /// Hide rows whose fact cells are all empty or placeholders.
    #[arg(long = "hide-nan-rows")]
    pub hide_nan_rows: bool,

    /// Hide grouping columns with at most one distinct value.
    #[arg(long = "hide-redundant-columns")]
    pub hide_redundant_columns: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Emit the derived TableInfo as JSON instead of rendering it.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Destination path for the exported JSON.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
