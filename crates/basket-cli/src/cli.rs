//! CLI argument definitions for the basket analyzer.

use std::path::PathBuf;

use basket_report::ArtifactFormat;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "basket",
    version,
    about = "Market basket analysis - find items that are bought together",
    long_about = "Find frequent itemsets and association rules in purchase data.\n\n\
                  Column roles (item, order, customer, date) are detected from the\n\
                  header names, so exports from most point-of-sale systems work as-is."
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
    /// Analyze a purchase data file and write rules and itemsets.
    Analyze(AnalyzeArgs),

    /// Show the column-name synonyms used for role detection.
    Synonyms(SynonymsArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Delimited text file with one header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Minimum support in (0, 1] (overrides the config file).
    #[arg(long = "min-support", value_name = "F")]
    pub min_support: Option<f64>,

    /// Minimum lift, at least 0 (overrides the config file).
    #[arg(long = "min-lift", value_name = "F")]
    pub min_lift: Option<f64>,

    /// Rows per basket when no order, customer or date column exists.
    #[arg(long = "group-size", value_name = "N")]
    pub group_size: Option<usize>,

    /// TOML file with analysis options.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TOML file with column-name synonym lists.
    #[arg(long = "synonyms", value_name = "PATH")]
    pub synonyms: Option<PathBuf>,

    /// Field delimiter (a single character, or `tab`). Sniffed when omitted.
    #[arg(long = "delimiter", value_name = "C", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Encoding used when the file is not valid UTF-8.
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Output directory for artifacts (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Artifacts to write.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Analyze and summarize without writing artifacts.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Analyze only these columns, by name or zero-based index (e.g. `order_id,2`).
    #[arg(long = "columns", value_name = "NAME|INDEX", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Number of rules shown in the summary.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,
}

#[derive(Parser)]
pub struct SynonymsArgs {
    /// TOML file with synonym lists to show instead of the defaults.
    #[arg(long = "synonyms", value_name = "PATH")]
    pub synonyms: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Csv,
    Both,
}

impl From<OutputFormatArg> for ArtifactFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => Self::Json,
            OutputFormatArg::Csv => Self::Csv,
            OutputFormatArg::Both => Self::Both,
        }
    }
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

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        _ => {}
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        _ => Err(format!(
            "expected a single ASCII character or `tab`, got {raw:?}"
        )),
    }
}
