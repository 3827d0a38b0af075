use crate::cli::ReportFormat;
use crate::error::{CliError, Result};
use biosift::analysis::stats::{SequenceStats, StructureSummary};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// Writes a rendered report to a file, or prints it to standard output
/// when no path was given.
pub fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => Ok(std::fs::write(path, rendered)?),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

/// Renders sequence statistics in the requested format.
///
/// The text layout is fixed and line-oriented so that downstream tools
/// can grep individual fields. The rendered string carries no trailing
/// newline.
pub fn render_sequence_stats(stats: &SequenceStats, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(format!(
            "Num Sequences: {}\nTotal Residues: {}\nLongest Accession: {} ({} residues)\nShortest Accession: {} ({} residues)",
            stats.num_sequences,
            stats.total_residues,
            stats.longest_accession,
            stats.longest_length,
            stats.shortest_accession,
            stats.shortest_length,
        )),
        ReportFormat::Json => render_json(stats),
        ReportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.serialize(stats).map_err(|e| CliError::Other(e.into()))?;
            finish_csv(wtr)
        }
    }
}

/// Renders a structure summary in the requested format.
pub fn render_structure_summary(summary: &StructureSummary, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => {
            let mut out = format!("Structure: {}", summary.structure_id);
            for chain in &summary.chains {
                write!(
                    out,
                    "\nChain {}: {} residues ({} standard, {} hetero)",
                    chain.chain_id,
                    chain.total_residues,
                    chain.standard_residues,
                    chain.hetero_residue_count,
                )
                .map_err(|e| CliError::Other(e.into()))?;
            }
            Ok(out)
        }
        ReportFormat::Json => render_json(summary),
        ReportFormat::Csv => {
            #[derive(Serialize)]
            struct ChainRow<'a> {
                structure_id: &'a str,
                chain_id: &'a str,
                total_residues: usize,
                standard_residues: usize,
                hetero_residue_count: usize,
            }

            let mut wtr = csv::Writer::from_writer(vec![]);
            for chain in &summary.chains {
                wtr.serialize(ChainRow {
                    structure_id: &summary.structure_id,
                    chain_id: &chain.chain_id,
                    total_residues: chain.total_residues,
                    standard_residues: chain.standard_residues,
                    hetero_residue_count: chain.hetero_residue_count,
                })
                .map_err(|e| CliError::Other(e.into()))?;
            }
            finish_csv(wtr)
        }
    }
}

fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Other(e.into()))
}

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr.into_inner().map_err(|e| CliError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Other(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosift::analysis::stats::ChainSummary;

    fn sample_stats() -> SequenceStats {
        SequenceStats {
            num_sequences: 2,
            total_residues: 6,
            longest_accession: "P1".to_string(),
            longest_length: 4,
            shortest_accession: "P2".to_string(),
            shortest_length: 2,
        }
    }

    fn sample_summary() -> StructureSummary {
        StructureSummary {
            structure_id: "1ABC".to_string(),
            chains: vec![
                ChainSummary {
                    chain_id: "A".to_string(),
                    total_residues: 3,
                    standard_residues: 2,
                    hetero_residue_count: 1,
                },
                ChainSummary {
                    chain_id: "B".to_string(),
                    total_residues: 1,
                    standard_residues: 1,
                    hetero_residue_count: 0,
                },
            ],
        }
    }

    #[test]
    fn text_stats_use_the_fixed_layout() {
        let rendered = render_sequence_stats(&sample_stats(), ReportFormat::Text).unwrap();
        assert_eq!(
            rendered,
            "Num Sequences: 2\nTotal Residues: 6\nLongest Accession: P1 (4 residues)\nShortest Accession: P2 (2 residues)"
        );
    }

    #[test]
    fn json_stats_are_pretty_printed() {
        let rendered = render_sequence_stats(&sample_stats(), ReportFormat::Json).unwrap();
        assert!(rendered.contains("\n  \"num_sequences\": 2"));
        assert!(rendered.contains("\"longest_accession\": \"P1\""));
    }

    #[test]
    fn csv_stats_have_a_header_and_one_row() {
        let rendered = render_sequence_stats(&sample_stats(), ReportFormat::Csv).unwrap();
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some(
                "num_sequences,total_residues,longest_accession,longest_length,shortest_accession,shortest_length"
            )
        );
        assert_eq!(lines.next(), Some("2,6,P1,4,P2,2"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn text_summary_lists_one_line_per_chain() {
        let rendered = render_structure_summary(&sample_summary(), ReportFormat::Text).unwrap();
        assert_eq!(
            rendered,
            "Structure: 1ABC\nChain A: 3 residues (2 standard, 1 hetero)\nChain B: 1 residues (1 standard, 0 hetero)"
        );
    }

    #[test]
    fn json_summary_nests_chains_under_the_structure() {
        let rendered = render_structure_summary(&sample_summary(), ReportFormat::Json).unwrap();
        assert!(rendered.contains("\"structure_id\": \"1ABC\""));
        assert!(rendered.contains("\"hetero_residue_count\": 1"));
    }

    #[test]
    fn csv_summary_emits_one_row_per_chain() {
        let rendered = render_structure_summary(&sample_summary(), ReportFormat::Csv).unwrap();
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("structure_id,chain_id,total_residues,standard_residues,hetero_residue_count")
        );
        assert_eq!(lines.next(), Some("1ABC,A,3,2,1"));
        assert_eq!(lines.next(), Some("1ABC,B,1,1,0"));
        assert_eq!(lines.next(), None);
    }
}
