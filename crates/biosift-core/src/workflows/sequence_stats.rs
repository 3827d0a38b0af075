use crate::analysis::config::SequenceStatsConfig;
use crate::analysis::progress::{Progress, ProgressReporter};
use crate::analysis::stats::SequenceStats;
use crate::core::io::fasta::FastaFile;
use crate::core::io::traits::SequenceFile;
use crate::workflows::error::WorkflowError;
use tracing::{info, instrument};

/// Computes aggregate statistics over a FASTA file.
#[instrument(skip_all, name = "sequence_stats_workflow")]
pub fn run(
    config: &SequenceStatsConfig,
    reporter: &ProgressReporter,
) -> Result<SequenceStats, WorkflowError> {
    // === Phase 1: Parse input records ===
    reporter.report(Progress::PhaseStart { name: "Parsing" });
    info!(input = %config.input_path.display(), "Reading FASTA file.");
    let records = FastaFile.read_from_path(&config.input_path)?;
    info!("Finished reading {} records.", records.len());
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Aggregate statistics ===
    reporter.report(Progress::PhaseStart { name: "Aggregation" });
    let stats = SequenceStats::from_records(&records)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        sequences = stats.num_sequences,
        residues = stats.total_residues,
        "Workflow complete."
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn computes_stats_from_a_fasta_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("proteins.fasta");
        fs::write(&input, ">sp|P1|A\nMKVL\n>sp|P2|B\nMK\n").unwrap();

        let config = SequenceStatsConfig { input_path: input };
        let stats = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(stats.num_sequences, 2);
        assert_eq!(stats.total_residues, 6);
        assert_eq!(stats.longest_accession, "P1");
        assert_eq!(stats.shortest_accession, "P2");
    }

    #[test]
    fn empty_file_fails_with_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.fasta");
        fs::write(&input, "").unwrap();

        let config = SequenceStatsConfig { input_path: input };
        let err = run(&config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, WorkflowError::Fasta(_)));
    }

    #[test]
    fn missing_input_file_fails_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = SequenceStatsConfig {
            input_path: dir.path().join("missing.fasta"),
        };
        let err = run(&config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Fasta(crate::core::io::fasta::FastaError::Io(_))
        ));
    }
}
