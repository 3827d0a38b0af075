use crate::cli::FastqFilterArgs;
use crate::config::PartialQualityFilterConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use biosift::{analysis::progress::ProgressReporter, workflows};
use tracing::info;

pub fn run(args: FastqFilterArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialQualityFilterConfig::from_file(path)?,
        None => PartialQualityFilterConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting quality filtering...");
    info!("Invoking the core quality filter workflow...");

    let outcome = workflows::quality_filter::run(&final_config, &reporter)?;

    info!(
        "Workflow finished, kept {} of {} read(s).",
        outcome.kept, outcome.total
    );
    println!(
        "✓ Kept {} of {} reads. Output written to: {}",
        outcome.kept,
        outcome.total,
        args.output.display()
    );

    Ok(())
}
