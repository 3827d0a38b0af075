use crate::analysis::config::StructureSummaryConfig;
use crate::analysis::progress::{Progress, ProgressReporter};
use crate::analysis::stats::{StructureSummary, summarize_structure};
use crate::core::io::mmcif::CifFile;
use crate::workflows::error::WorkflowError;
use tracing::{info, instrument};

/// Classifies the residues of every chain in an mmCIF file.
#[instrument(skip_all, name = "structure_summary_workflow")]
pub fn run(
    config: &StructureSummaryConfig,
    reporter: &ProgressReporter,
) -> Result<StructureSummary, WorkflowError> {
    // === Phase 1: Parse the structure ===
    reporter.report(Progress::PhaseStart { name: "Parsing" });
    info!(input = %config.input_path.display(), "Reading mmCIF file.");
    let structure = CifFile::read_from_path(&config.input_path)?;
    info!(
        atoms = structure.num_atoms(),
        residues = structure.num_residues(),
        "Finished parsing structure."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Summarize chains ===
    reporter.report(Progress::PhaseStart { name: "Summarizing" });
    let summary = summarize_structure(&structure);
    reporter.report(Progress::PhaseFinish);

    info!("Finished summarizing {} chains.", summary.chains.len());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const INPUT: &str = "\
data_1ABC
loop_
_atom_site.group_PDB
_atom_site.id
_atom_site.auth_atom_id
_atom_site.auth_comp_id
_atom_site.auth_asym_id
_atom_site.auth_seq_id
_atom_site.Cartn_x
_atom_site.Cartn_y
_atom_site.Cartn_z
ATOM 1 N ALA A 1 1.0 2.0 3.0
ATOM 2 CA ALA A 1 2.0 3.0 4.0
ATOM 3 N GLY A 2 3.0 4.0 5.0
HETATM 4 O HOH A 100 4.0 5.0 6.0
ATOM 5 N VAL B 1 5.0 6.0 7.0
";

    #[test]
    fn summarizes_chains_in_traversal_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("structure.cif");
        fs::write(&input, INPUT).unwrap();

        let config = StructureSummaryConfig { input_path: input };
        let summary = run(&config, &ProgressReporter::new()).unwrap();

        assert_eq!(summary.structure_id, "1ABC");
        assert_eq!(summary.chains.len(), 2);

        assert_eq!(summary.chains[0].chain_id, "A");
        assert_eq!(summary.chains[0].total_residues, 3);
        assert_eq!(summary.chains[0].standard_residues, 2);
        assert_eq!(summary.chains[0].hetero_residue_count, 1);

        assert_eq!(summary.chains[1].chain_id, "B");
        assert_eq!(summary.chains[1].total_residues, 1);
        assert_eq!(summary.chains[1].standard_residues, 1);
        assert_eq!(summary.chains[1].hetero_residue_count, 0);
    }

    #[test]
    fn missing_atom_site_category_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.cif");
        fs::write(&input, "data_X\n").unwrap();

        let config = StructureSummaryConfig { input_path: input };
        let err = run(&config, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, WorkflowError::Cif(_)));
    }
}
