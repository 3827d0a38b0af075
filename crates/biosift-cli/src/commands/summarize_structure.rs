use crate::cli::SummarizeStructureArgs;
use crate::error::Result;
use crate::report;
use crate::utils::progress::CliProgressHandler;
use biosift::{
    analysis::config::StructureSummaryConfig, analysis::progress::ProgressReporter, workflows,
};
use tracing::info;

pub fn run(args: SummarizeStructureArgs) -> Result<()> {
    let config = StructureSummaryConfig {
        input_path: args.input.clone(),
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Summarizing structure...");
    info!("Invoking the core structure summary workflow...");

    let summary = workflows::structure_summary::run(&config, &reporter)?;

    info!(
        "Workflow finished, summarized {} chain(s).",
        summary.chains.len()
    );

    let rendered = report::render_structure_summary(&summary, args.format)?;
    report::emit(&rendered, args.output.as_deref())?;

    if let Some(path) = &args.output {
        println!("✓ Summary written to: {}", path.display());
    }

    Ok(())
}
