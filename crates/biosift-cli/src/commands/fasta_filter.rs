use crate::cli::FastaFilterArgs;
use crate::config::PartialSequenceFilterConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use biosift::{analysis::progress::ProgressReporter, workflows};
use tracing::info;

pub fn run(args: FastaFilterArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialSequenceFilterConfig::from_file(path)?,
        None => PartialSequenceFilterConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting sequence length filtering...");
    info!("Invoking the core sequence filter workflow...");

    let outcome = workflows::sequence_filter::run(&final_config, &reporter)?;

    info!(
        "Workflow finished, kept {} of {} record(s).",
        outcome.kept, outcome.total
    );
    println!(
        "✓ Kept {} of {} records. Output written to: {}",
        outcome.kept,
        outcome.total,
        args.output.display()
    );

    Ok(())
}
