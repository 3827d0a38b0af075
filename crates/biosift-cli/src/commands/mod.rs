pub mod fasta_filter;
pub mod fasta_stats;
pub mod fastq_filter;
pub mod summarize_structure;
