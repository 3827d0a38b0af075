use crate::core::models::ids::ChainId;
use crate::core::models::record::SequenceRecord;
use crate::core::models::structure::Structure;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot compute statistics over an empty record set")]
    EmptyInput,
}

/// Aggregate statistics over a set of sequence records.
///
/// Extremum comparisons are strict, so the first record wins ties for
/// both the longest and the shortest sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceStats {
    pub num_sequences: usize,
    pub total_residues: usize,
    pub longest_accession: String,
    pub longest_length: usize,
    pub shortest_accession: String,
    pub shortest_length: usize,
}

impl SequenceStats {
    /// Computes statistics over the given records.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to aggregate, in input order.
    ///
    /// # Return
    ///
    /// Returns the aggregated statistics.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptyInput`] when `records` is empty.
    pub fn from_records(records: &[SequenceRecord]) -> Result<Self, StatsError> {
        let first = records.first().ok_or(StatsError::EmptyInput)?;

        let mut total_residues = 0;
        let mut longest = first;
        let mut shortest = first;
        for record in records {
            total_residues += record.len();
            if record.len() > longest.len() {
                longest = record;
            }
            if record.len() < shortest.len() {
                shortest = record;
            }
        }

        Ok(Self {
            num_sequences: records.len(),
            total_residues,
            longest_accession: longest.accession().to_string(),
            longest_length: longest.len(),
            shortest_accession: shortest.accession().to_string(),
            shortest_length: shortest.len(),
        })
    }
}

/// Residue classification counts for a single chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainSummary {
    pub chain_id: String,
    pub total_residues: usize,
    pub standard_residues: usize,
    pub hetero_residue_count: usize,
}

/// Per-chain residue classification for a whole structure.
///
/// Chains appear in traversal order: models in parse order, then each
/// model's chains in parse order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSummary {
    pub structure_id: String,
    pub chains: Vec<ChainSummary>,
}

/// Counts standard and heteroatom residues in one chain.
///
/// # Return
///
/// Returns `None` when the chain ID is not present in the structure.
pub fn summarize_chain(structure: &Structure, chain_id: ChainId) -> Option<ChainSummary> {
    let chain = structure.chain(chain_id)?;

    let mut standard_residues = 0;
    let mut hetero_residue_count = 0;
    for &residue_id in chain.residues() {
        if let Some(residue) = structure.residue(residue_id) {
            if residue.class.is_hetero() {
                hetero_residue_count += 1;
            } else {
                standard_residues += 1;
            }
        }
    }

    Some(ChainSummary {
        chain_id: chain.id.clone(),
        total_residues: standard_residues + hetero_residue_count,
        standard_residues,
        hetero_residue_count,
    })
}

/// Summarizes every chain of a structure in traversal order.
pub fn summarize_structure(structure: &Structure) -> StructureSummary {
    let mut chains = Vec::new();
    for (_, model) in structure.models() {
        for &chain_id in model.chains() {
            if let Some(summary) = summarize_chain(structure, chain_id) {
                chains.push(summary);
            }
        }
    }
    StructureSummary {
        structure_id: structure.id().to_string(),
        chains,
    }
}
