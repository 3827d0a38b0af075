use crate::analysis::config::SequenceFilterConfig;
use crate::analysis::filter::{MinLengthFilter, RecordFilter};
use crate::analysis::progress::{Progress, ProgressReporter};
use crate::core::io::fasta::FastaFile;
use crate::core::io::traits::SequenceFile;
use crate::workflows::FilterOutcome;
use crate::workflows::error::WorkflowError;
use tracing::{info, instrument};

/// Filters a FASTA file by minimum sequence length.
///
/// The surviving records are written to the configured output path in
/// input order. The output file is only created after filtering
/// succeeds.
#[instrument(skip_all, name = "sequence_filter_workflow")]
pub fn run(
    config: &SequenceFilterConfig,
    reporter: &ProgressReporter,
) -> Result<FilterOutcome, WorkflowError> {
    // === Phase 1: Parse input records ===
    reporter.report(Progress::PhaseStart { name: "Parsing" });
    info!(
        input = %config.input_path.display(),
        min_length = config.min_length,
        "Reading FASTA file."
    );
    let records = FastaFile.read_from_path(&config.input_path)?;
    let total = records.len();
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Filter records ===
    reporter.report(Progress::PhaseStart { name: "Filtering" });
    reporter.report(Progress::TaskStart {
        total_steps: total as u64,
    });
    let filter = MinLengthFilter::new(config.min_length);
    let mut kept_records = Vec::new();
    for record in records {
        reporter.report(Progress::TaskIncrement);
        if filter.retains(&record) {
            kept_records.push(record);
        }
    }
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Write surviving records ===
    reporter.report(Progress::PhaseStart { name: "Writing" });
    FastaFile.write_to_path(&kept_records, &config.output_path)?;
    reporter.report(Progress::PhaseFinish);

    let outcome = FilterOutcome {
        total,
        kept: kept_records.len(),
    };
    info!("Total records in original file: {}", outcome.total);
    info!("Records passing filter: {}", outcome.kept);
    Ok(outcome)
}
