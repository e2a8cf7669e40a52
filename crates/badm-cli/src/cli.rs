//! CLI argument definitions for the BADM reshaper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "badm",
    version,
    about = "BADM Reshape - Pivot AmeriFlux BIF site metadata into per-group tables",
    long_about = "Reshape an AmeriFlux BADM Interchange Format (BIF) export into wide,\n\
                  per-variable-group CSV tables.\n\n\
                  Dates are aligned per group id; groups without a date fall back to\n\
                  their own identifier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Reshape a BIF export into per-variable-group CSV files.
    Reshape(ReshapeArgs),

    /// List the variable groups present in a BIF export.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ReshapeArgs {
    /// Path to the BIF export (.xlsx, .xlsm, or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the generated CSV files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Worksheet to read from spreadsheet inputs.
    #[arg(
        long = "sheet",
        value_name = "NAME",
        default_value = badm_ingest::DEFAULT_SHEET
    )]
    pub sheet: String,

    /// Reshape and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip writing the JSON run manifest.
    #[arg(long = "no-manifest")]
    pub no_manifest: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the BIF export (.xlsx, .xlsm, or .csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Worksheet to read from spreadsheet inputs.
    #[arg(
        long = "sheet",
        value_name = "NAME",
        default_value = badm_ingest::DEFAULT_SHEET
    )]
    pub sheet: String,
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
