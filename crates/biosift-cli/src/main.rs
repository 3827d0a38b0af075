mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod report;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 BioSift CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::FastaStats(args) => {
            info!("Dispatching to 'fasta-stats' command.");
            commands::fasta_stats::run(args)
        }
        Commands::FastaFilter(args) => {
            info!("Dispatching to 'fasta-filter' command.");
            commands::fasta_filter::run(args)
        }
        Commands::FastqFilter(args) => {
            info!("Dispatching to 'fastq-filter' command.");
            commands::fastq_filter::run(args)
        }
        Commands::SummarizeStructure(args) => {
            info!("Dispatching to 'summarize-structure' command.");
            commands::summarize_structure::run(args)
        }
    };

    match &command_result {
        Ok(_) => {
            info!("✅ Command completed successfully.");
            println!("✅ Command completed successfully.");
        }
        Err(e) => {
            error!("❌ Command failed: {}", e);
            eprintln!("❌ Command failed: {}", e);
        }
    }

    command_result
}
