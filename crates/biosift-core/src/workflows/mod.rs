//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate
//! complete engine runs, one per user-visible operation.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. Each one composes the
//! core parsers and the analysis layer into a full pipeline: read input,
//! compute, and (for filters) write output. They handle progress
//! reporting and aggregate the component errors of every stage into a
//! single [`WorkflowError`](error::WorkflowError).
//!
//! ## Architecture
//!
//! - **Sequence Statistics** ([`sequence_stats`]) - Aggregate statistics over a FASTA file
//! - **Sequence Filter** ([`sequence_filter`]) - Length filtering of FASTA records
//! - **Quality Filter** ([`quality_filter`]) - Mean-quality filtering of FASTQ records
//! - **Structure Summary** ([`structure_summary`]) - Per-chain residue classification of an mmCIF file
//!
//! Filter workflows hold every surviving record in memory and open the
//! output file only after filtering succeeds, so a failed run never
//! leaves a partial output behind.

use serde::Serialize;

pub mod error;
pub mod quality_filter;
pub mod sequence_filter;
pub mod sequence_stats;
pub mod structure_summary;

/// Record counts from a completed filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Number of records in the input file.
    pub total: usize,
    /// Number of records that survived the filter.
    pub kept: usize,
}
