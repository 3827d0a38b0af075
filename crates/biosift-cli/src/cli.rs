use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "BioSift Developers",
    version,
    about = "BioSift CLI - A command-line interface for BioSift, a parsing and summary engine for FASTA, FASTQ, and mmCIF biological data files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute aggregate statistics over the sequences in a FASTA file.
    FastaStats(FastaStatsArgs),
    /// Filter the records of a FASTA file by minimum sequence length.
    FastaFilter(FastaFilterArgs),
    /// Filter the reads of a FASTQ file by minimum mean Phred quality.
    FastqFilter(FastqFilterArgs),
    /// Classify the residues of every chain in an mmCIF structure file.
    SummarizeStructure(SummarizeStructureArgs),
}

/// Output rendering for report-producing commands.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Fixed-layout plain text.
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

/// Arguments for the `fasta-stats` subcommand.
#[derive(Args, Debug)]
pub struct FastaStatsArgs {
    /// Path to the input FASTA file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the rendered report. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report rendering format.
    #[arg(long, value_enum, default_value = "text", value_name = "FORMAT")]
    pub format: ReportFormat,
}

/// Arguments for the `fasta-filter` subcommand.
#[derive(Args, Debug)]
pub struct FastaFilterArgs {
    /// Path to the input FASTA file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the filtered output FASTA file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the minimum sequence length from the config file.
    #[arg(long, value_name = "INT")]
    pub min_length: Option<usize>,
}

/// Arguments for the `fastq-filter` subcommand.
#[derive(Args, Debug)]
pub struct FastqFilterArgs {
    /// Path to the input FASTQ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the filtered output FASTQ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the minimum mean Phred quality from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub min_quality: Option<f64>,

    /// Override the Phred encoding offset from the config file.
    #[arg(long, value_name = "INT")]
    pub phred_offset: Option<u8>,
}

/// Arguments for the `summarize-structure` subcommand.
#[derive(Args, Debug)]
pub struct SummarizeStructureArgs {
    /// Path to the input mmCIF file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the rendered summary. Defaults to standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report rendering format.
    #[arg(long, value_enum, default_value = "json", value_name = "FORMAT")]
    pub format: ReportFormat,
}
