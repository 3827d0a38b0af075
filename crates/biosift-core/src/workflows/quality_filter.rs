use crate::analysis::config::QualityFilterConfig;
use crate::analysis::filter::{MinMeanQualityFilter, RecordFilter};
use crate::analysis::progress::{Progress, ProgressReporter};
use crate::core::io::fastq::{FastqFile, PhredEncoding};
use crate::core::io::traits::SequenceFile;
use crate::workflows::FilterOutcome;
use crate::workflows::error::WorkflowError;
use tracing::{info, instrument};

/// Filters a FASTQ file by minimum mean Phred quality.
///
/// Records whose mean quality reaches the threshold are re-encoded with
/// the configured Phred offset and written to the output path in input
/// order. The output file is only created after filtering succeeds.
#[instrument(skip_all, name = "quality_filter_workflow")]
pub fn run(
    config: &QualityFilterConfig,
    reporter: &ProgressReporter,
) -> Result<FilterOutcome, WorkflowError> {
    let fastq = FastqFile::new(PhredEncoding::new(config.phred_offset));

    // === Phase 1: Parse input records ===
    reporter.report(Progress::PhaseStart { name: "Parsing" });
    info!(
        input = %config.input_path.display(),
        min_mean_quality = config.min_mean_quality,
        phred_offset = config.phred_offset,
        "Reading FASTQ file."
    );
    let records = fastq.read_from_path(&config.input_path)?;
    let total = records.len();
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Filter records ===
    reporter.report(Progress::PhaseStart { name: "Filtering" });
    reporter.report(Progress::TaskStart {
        total_steps: total as u64,
    });
    let filter = MinMeanQualityFilter::new(config.min_mean_quality);
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
    fastq.write_to_path(&kept_records, &config.output_path)?;
    reporter.report(Progress::PhaseFinish);

    let outcome = FilterOutcome {
        total,
        kept: kept_records.len(),
    };
    info!("Total reads in original file: {}", outcome.total);
    info!("Reads passing filter: {}", outcome.kept);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::config::QualityFilterConfigBuilder;
    use std::fs;

    #[test]
    fn keeps_reads_meeting_the_mean_quality_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.fastq");
        let output = dir.path().join("out.fastq");
        // read1 mean 40, read2 mean 20 with Phred+33
        fs::write(&input, "@read1\nACGT\n+\nIIII\n@read2\nAC\n+\n55\n").unwrap();

        let config = QualityFilterConfigBuilder::new()
            .input_path(input)
            .output_path(output.clone())
            .min_mean_quality(30.0)
            .build()
            .unwrap();
        let outcome = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(outcome, FilterOutcome { total: 2, kept: 1 });
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "@read1\nACGT\n+\nIIII\n");
    }

    #[test]
    fn round_trips_surviving_records_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.fastq");
        let output = dir.path().join("out.fastq");
        fs::write(&input, "@read1\nACGT\n+\nII?I\n").unwrap();

        let config = QualityFilterConfigBuilder::new()
            .input_path(input.clone())
            .output_path(output.clone())
            .min_mean_quality(0.0)
            .build()
            .unwrap();
        run(&config, &ProgressReporter::new()).unwrap();
        assert_eq!(
            fs::read_to_string(&input).unwrap(),
            fs::read_to_string(&output).unwrap()
        );
    }

    #[test]
    fn no_output_file_is_created_when_parsing_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.fastq");
        let output = dir.path().join("out.fastq");
        fs::write(&input, "@read1\nACGT\n+\nII\n").unwrap();

        let config = QualityFilterConfigBuilder::new()
            .input_path(input)
            .output_path(output.clone())
            .build()
            .unwrap();
        assert!(run(&config, &ProgressReporter::new()).is_err());
        assert!(!output.exists());
    }
}
