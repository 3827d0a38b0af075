use crate::core::io::traits::SequenceFile;
use crate::core::models::record::QualityRecord;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FastqError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: FastqParseErrorKind,
    },
    #[error("Quality score {score} cannot be represented with Phred offset {offset}")]
    UnencodableScore { score: u8, offset: u8 },
}

#[derive(Debug, Error)]
pub enum FastqParseErrorKind {
    #[error("Record is truncated (every record spans four lines)")]
    TruncatedRecord,
    #[error("Expected line to start with '{expected}'")]
    MissingPrefix { expected: char },
    #[error("Sequence length {sequence} does not match quality string length {quality}")]
    LengthMismatch { sequence: usize, quality: usize },
    #[error("Quality character '{character}' is below the encoding offset")]
    NegativeScore { character: char },
}

/// A Phred quality score encoding defined by its ASCII offset.
///
/// The default offset of 33 corresponds to the Sanger encoding. Decoding
/// subtracts the offset from a quality character; encoding adds it back.
/// The two operations round-trip exactly for every representable score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhredEncoding {
    offset: u8,
}

impl Default for PhredEncoding {
    fn default() -> Self {
        Self { offset: 33 }
    }
}

impl PhredEncoding {
    pub fn new(offset: u8) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Decodes a quality character into a score.
    ///
    /// # Return
    ///
    /// Returns `None` when the character falls below the offset or outside
    /// the single-byte range.
    pub fn decode(&self, character: char) -> Option<u8> {
        let value = u8::try_from(character as u32).ok()?;
        value.checked_sub(self.offset)
    }

    /// Encodes a score into a quality character.
    ///
    /// # Return
    ///
    /// Returns `None` when the score plus the offset overflows a byte.
    pub fn encode(&self, score: u8) -> Option<char> {
        score.checked_add(self.offset).map(char::from)
    }
}

/// Reader/writer for FASTQ quality sequence files.
///
/// Every record spans exactly four lines: an `@` header, the sequence,
/// a `+` separator, and a quality string whose length must equal the
/// sequence length. Quality characters are decoded with the configured
/// [`PhredEncoding`] at parse time and re-encoded on serialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastqFile {
    encoding: PhredEncoding,
}

impl FastqFile {
    pub fn new(encoding: PhredEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> PhredEncoding {
        self.encoding
    }
}

fn next_record_line<I>(lines: &mut I, record_start: usize) -> Result<(usize, String), FastqError>
where
    I: Iterator<Item = (usize, io::Result<String>)>,
{
    match lines.next() {
        Some((idx, line)) => Ok((idx + 1, line?)),
        None => Err(FastqError::Parse {
            line: record_start,
            kind: FastqParseErrorKind::TruncatedRecord,
        }),
    }
}

impl SequenceFile for FastqFile {
    type Record = QualityRecord;
    type Error = FastqError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Vec<QualityRecord>, FastqError> {
        let mut records = Vec::new();
        let mut lines = reader.lines().enumerate();

        while let Some((idx, line_res)) = lines.next() {
            let header_line = line_res?;
            let header_num = idx + 1;
            let header_line = header_line.trim();
            if header_line.is_empty() {
                continue;
            }

            let header = header_line.strip_prefix('@').ok_or(FastqError::Parse {
                line: header_num,
                kind: FastqParseErrorKind::MissingPrefix { expected: '@' },
            })?;

            let (_, sequence) = next_record_line(&mut lines, header_num)?;
            let sequence = sequence.trim().to_string();

            let (plus_num, separator) = next_record_line(&mut lines, header_num)?;
            if !separator.trim().starts_with('+') {
                return Err(FastqError::Parse {
                    line: plus_num,
                    kind: FastqParseErrorKind::MissingPrefix { expected: '+' },
                });
            }

            let (quality_num, quality) = next_record_line(&mut lines, header_num)?;
            let quality = quality.trim();
            if quality.len() != sequence.len() {
                return Err(FastqError::Parse {
                    line: quality_num,
                    kind: FastqParseErrorKind::LengthMismatch {
                        sequence: sequence.len(),
                        quality: quality.len(),
                    },
                });
            }

            let mut scores = Vec::with_capacity(quality.len());
            for character in quality.chars() {
                let score = self.encoding.decode(character).ok_or(FastqError::Parse {
                    line: quality_num,
                    kind: FastqParseErrorKind::NegativeScore { character },
                })?;
                scores.push(score);
            }

            records.push(QualityRecord::new(header, sequence, scores));
        }

        Ok(records)
    }

    fn write_to(
        &self,
        records: &[QualityRecord],
        writer: &mut impl Write,
    ) -> Result<(), FastqError> {
        for record in records {
            let mut quality = String::with_capacity(record.len());
            for &score in record.scores() {
                let character =
                    self.encoding
                        .encode(score)
                        .ok_or(FastqError::UnencodableScore {
                            score,
                            offset: self.encoding.offset(),
                        })?;
                quality.push(character);
            }
            writeln!(writer, "@{}", record.header())?;
            writeln!(writer, "{}", record.sequence())?;
            writeln!(writer, "+")?;
            writeln!(writer, "{}", quality)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &str) -> Result<Vec<QualityRecord>, FastqError> {
        FastqFile::default().read_from(&mut Cursor::new(input))
    }

    #[test]
    fn parses_records_and_decodes_sanger_quality() {
        let input = "@read1\nACGT\n+\nIIII\n@read2\nGG\n+\n!I\n";
        let records = parse(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), "read1");
        assert_eq!(records[0].sequence(), "ACGT");
        assert_eq!(records[0].scores(), &[40, 40, 40, 40]);
        assert_eq!(records[1].scores(), &[0, 40]);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n").unwrap().is_empty());
    }

    #[test]
    fn missing_at_prefix_is_an_error() {
        let err = parse("read1\nACGT\n+\nIIII\n").unwrap_err();
        match err {
            FastqError::Parse {
                line: 1,
                kind: FastqParseErrorKind::MissingPrefix { expected: '@' },
            } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_plus_separator_is_an_error() {
        let err = parse("@read1\nACGT\nIIII\nIIII\n").unwrap_err();
        match err {
            FastqError::Parse {
                line: 3,
                kind: FastqParseErrorKind::MissingPrefix { expected: '+' },
            } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn truncated_record_is_an_error() {
        let err = parse("@read1\nACGT\n+\n").unwrap_err();
        match err {
            FastqError::Parse {
                line: 1,
                kind: FastqParseErrorKind::TruncatedRecord,
            } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let err = parse("@read1\nACGT\n+\nII\n").unwrap_err();
        match err {
            FastqError::Parse {
                line: 4,
                kind: FastqParseErrorKind::LengthMismatch {
                    sequence: 4,
                    quality: 2,
                },
            } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn quality_character_below_offset_is_an_error() {
        let fastq = FastqFile::new(PhredEncoding::new(64));
        let err = fastq
            .read_from(&mut Cursor::new("@read1\nAC\n+\n!I\n"))
            .unwrap_err();
        match err {
            FastqError::Parse {
                line: 4,
                kind: FastqParseErrorKind::NegativeScore { character: '!' },
            } => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn encoding_round_trips_scores() {
        let encoding = PhredEncoding::default();
        for score in 0..=60u8 {
            let character = encoding.encode(score).unwrap();
            assert_eq!(encoding.decode(character), Some(score));
        }
    }

    #[test]
    fn encode_rejects_scores_that_overflow_a_byte() {
        let encoding = PhredEncoding::new(64);
        assert_eq!(encoding.encode(200), None);
    }

    #[test]
    fn writes_four_line_records() {
        let records = vec![QualityRecord::new("read1", "ACGT".to_string(), vec![40; 4])];
        let mut out = Vec::new();
        FastqFile::default().write_to(&records, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "@read1\nACGT\n+\nIIII\n");
    }

    #[test]
    fn write_fails_on_unencodable_score() {
        let records = vec![QualityRecord::new("r", "A".to_string(), vec![250])];
        let mut out = Vec::new();
        let err = FastqFile::default().write_to(&records, &mut out).unwrap_err();
        assert!(matches!(
            err,
            FastqError::UnencodableScore { score: 250, offset: 33 }
        ));
    }

    #[test]
    fn round_trips_through_a_file_with_non_default_offset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reads.fastq");
        let fastq = FastqFile::new(PhredEncoding::new(64));
        let records = vec![QualityRecord::new("read1", "ACG".to_string(), vec![10, 20, 30])];
        fastq.write_to_path(&records, &path).unwrap();
        let reread = fastq.read_from_path(&path).unwrap();
        assert_eq!(reread, records);
    }
}
