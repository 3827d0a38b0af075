use crate::analysis::stats::StatsError;
use crate::core::io::fasta::FastaError;
use crate::core::io::fastq::FastqError;
use crate::core::io::mmcif::CifError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("FASTA processing failed: {0}")]
    Fasta(#[from] FastaError),

    #[error("FASTQ processing failed: {0}")]
    Fastq(#[from] FastqError),

    #[error("Structure processing failed: {0}")]
    Cif(#[from] CifError),

    #[error("Statistics computation failed: {0}")]
    Stats(#[from] StatsError),
}
