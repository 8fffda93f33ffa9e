//! CLI argument definitions for the annotation migrator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hpoa",
    version,
    about = "Migrate legacy HPO annotation small files to the v2 format",
    long_about = "Convert legacy (\"old small file\") HPO disease annotation files to the\n\
                  v2 small-file format.\n\n\
                  Every row is validated against the HPO ontology and tagged with QC codes\n\
                  describing what had to change on the way."
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

    /// HPO ontology in OBO format (default: $HPOA_ONTOLOGY, then data/hp.obo).
    #[arg(long = "ontology", value_name = "OBO", global = true)]
    pub ontology: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert legacy annotation files to v2 small files.
    Convert(ConvertArgs),

    /// List the clinical modifier labels recognized in descriptions.
    Modifiers(ModifiersArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Legacy annotation files (tab-separated, one header row).
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for v2 files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "v2")]
    pub output_dir: PathBuf,

    /// Stop at the first row that cannot be converted.
    #[arg(long = "halt-on-error")]
    pub halt_on_error: bool,

    /// Convert and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Convert on the calling thread up to this many rows per file.
    #[arg(long = "parallel-threshold", value_name = "ROWS")]
    pub parallel_threshold: Option<usize>,

    /// Show every failed row instead of the first few per file.
    #[arg(long = "all-errors")]
    pub all_errors: bool,
}

#[derive(Parser)]
pub struct ModifiersArgs {
    /// Root term of the modifier subtree.
    #[arg(long = "root", value_name = "TERM", default_value = "HP:0012823")]
    pub root: String,
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
