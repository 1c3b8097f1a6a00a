//! CLI argument definitions for the supplier matcher.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use supplier_model::{DEFAULT_MATCH_LIMIT, DEFAULT_MIN_NAME_LEN};

#[derive(Parser)]
#[command(
    name = "supplier-match",
    version,
    about = "Normalize supplier names and match them to reference registers",
    long_about = "Normalize procurement supplier names and match them to reference registers.\n\n\
                  Suppliers are screened, normalized and scored against the companies \
                  register and the public spine. The best candidates per supplier are \
                  written as CSV match tables."
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
    /// Print the canonical form of each name.
    Normalize(NormalizeArgs),

    /// Print how many organisations each name appears to contain.
    Count(CountArgs),

    /// List the normalization steps in execution order.
    Steps,

    /// Screen a supplier list and match it against the registers.
    Match(MatchArgs),
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Raw names to normalize.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Skip a normalization step by id (repeatable, see `steps`).
    #[arg(long = "disable-step", value_name = "ID")]
    pub disabled_steps: Vec<String>,
}

#[derive(Args)]
pub struct CountArgs {
    /// Raw names to classify.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

#[derive(Args)]
pub struct MatchArgs {
    /// CSV file containing the supplier list.
    #[arg(long = "suppliers", value_name = "FILE")]
    pub suppliers: PathBuf,

    /// Column holding supplier names.
    #[arg(long = "supplier-column", value_name = "COLUMN", default_value = "supplier")]
    pub supplier_column: String,

    /// Companies register CSV.
    #[arg(long = "ch", value_name = "FILE")]
    pub companies: Option<PathBuf>,

    /// Companies register id column.
    #[arg(long = "ch-id-column", value_name = "COLUMN", default_value = "CompanyNumber")]
    pub companies_id_column: String,

    /// Companies register name column.
    #[arg(long = "ch-name-column", value_name = "COLUMN", default_value = "CompanyName")]
    pub companies_name_column: String,

    /// Public spine CSV.
    #[arg(long = "spine", value_name = "FILE")]
    pub spine: Option<PathBuf>,

    /// Public spine id column.
    #[arg(long = "spine-id-column", value_name = "COLUMN", default_value = "uid")]
    pub spine_id_column: String,

    /// Public spine name column.
    #[arg(
        long = "spine-name-column",
        value_name = "COLUMN",
        default_value = "organisationname"
    )]
    pub spine_name_column: String,

    /// Output directory for match tables and normalized registers.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Candidates kept per supplier.
    #[arg(long = "limit", value_name = "N", default_value_t = DEFAULT_MATCH_LIMIT)]
    pub limit: usize,

    /// Worker threads for matching (0 for one per core).
    #[arg(long = "workers", value_name = "N", default_value_t = 0)]
    pub workers: usize,

    /// Minimum length of a raw or normalized supplier name.
    #[arg(long = "min-name-len", value_name = "N", default_value_t = DEFAULT_MIN_NAME_LEN)]
    pub min_name_len: usize,

    /// Keep suppliers whose name is a number.
    #[arg(long = "keep-numeric")]
    pub keep_numeric: bool,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
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
