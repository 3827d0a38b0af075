use crate::cli::FastaStatsArgs;
use crate::error::Result;
use crate::report;
use crate::utils::progress::CliProgressHandler;
use biosift::{
    analysis::config::SequenceStatsConfig, analysis::progress::ProgressReporter, workflows,
};
use tracing::info;

pub fn run(args: FastaStatsArgs) -> Result<()> {
    let config = SequenceStatsConfig {
        input_path: args.input.clone(),
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Computing sequence statistics...");
    info!("Invoking the core sequence statistics workflow...");

    let stats = workflows::sequence_stats::run(&config, &reporter)?;

    info!(
        "Workflow finished, summarized {} sequence(s).",
        stats.num_sequences
    );

    let rendered = report::render_sequence_stats(&stats, args.format)?;
    report::emit(&rendered, args.output.as_deref())?;

    if let Some(path) = &args.output {
        println!("✓ Statistics written to: {}", path.display());
    }

    Ok(())
}
