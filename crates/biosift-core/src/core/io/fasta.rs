use crate::core::io::traits::SequenceFile;
use crate::core::models::record::SequenceRecord;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: FastaParseErrorKind,
    },
    #[error("Input contains no sequence records")]
    EmptyInput,
}

#[derive(Debug, Error)]
pub enum FastaParseErrorKind {
    #[error("Sequence data encountered before any header line")]
    MissingHeader,
    #[error("Header '{header}' has no accession in its second '|'-separated field")]
    MalformedHeader { header: String },
    #[error("Header '{header}' is not followed by any sequence data")]
    EmptyRecord { header: String },
}

/// Reader/writer for FASTA sequence files.
///
/// A record starts at a `>` header line and collects every following
/// non-empty line into its sequence until the next header or end of
/// input. Whitespace inside sequence lines is stripped. Serialization
/// emits the header on one line and the full sequence on the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastaFile;

fn finish_record(
    line: usize,
    header: String,
    sequence: String,
) -> Result<SequenceRecord, FastaError> {
    if sequence.is_empty() {
        return Err(FastaError::Parse {
            line,
            kind: FastaParseErrorKind::EmptyRecord { header },
        });
    }
    match SequenceRecord::from_header(&header, sequence) {
        Some(record) => Ok(record),
        None => Err(FastaError::Parse {
            line,
            kind: FastaParseErrorKind::MalformedHeader { header },
        }),
    }
}

impl SequenceFile for FastaFile {
    type Record = SequenceRecord;
    type Error = FastaError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Vec<SequenceRecord>, FastaError> {
        let mut records = Vec::new();
        // (header line number, header, accumulated sequence)
        let mut pending: Option<(usize, String, String)> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('>') {
                if let Some((start, header, sequence)) = pending.take() {
                    records.push(finish_record(start, header, sequence)?);
                }
                pending = Some((line_num, header.to_string(), String::new()));
            } else {
                match pending.as_mut() {
                    Some((_, _, sequence)) => sequence.extend(trimmed.split_whitespace()),
                    None => {
                        return Err(FastaError::Parse {
                            line: line_num,
                            kind: FastaParseErrorKind::MissingHeader,
                        });
                    }
                }
            }
        }

        if let Some((start, header, sequence)) = pending.take() {
            records.push(finish_record(start, header, sequence)?);
        }
        if records.is_empty() {
            return Err(FastaError::EmptyInput);
        }
        Ok(records)
    }

    fn write_to(
        &self,
        records: &[SequenceRecord],
        writer: &mut impl Write,
    ) -> Result<(), FastaError> {
        for record in records {
            writeln!(writer, ">{}", record.header())?;
            writeln!(writer, "{}", record.sequence())?;
        }
        Ok(())
    }
}
