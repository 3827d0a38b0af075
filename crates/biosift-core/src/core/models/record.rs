/// Represents a single FASTA sequence record.
///
/// A record pairs the full header line (without the leading `>`) with the
/// concatenated residue sequence. The accession is extracted once at
/// construction from the second `|`-separated field of the header; records
/// with fewer than two header fields cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    accession: String,
    header: String,
    sequence: String,
}

impl SequenceRecord {
    /// Creates a record from a raw header line and its residue sequence.
    ///
    /// # Arguments
    ///
    /// * `header` - The header line content, without the leading `>`.
    /// * `sequence` - The residue sequence with all whitespace stripped.
    ///
    /// # Return
    ///
    /// Returns `None` when the header has fewer than two `|`-separated fields
    /// or the accession field is empty.
    pub fn from_header(header: &str, sequence: String) -> Option<Self> {
        let accession = header.split('|').nth(1)?.trim();
        if accession.is_empty() {
            return None;
        }
        Some(Self {
            accession: accession.to_string(),
            header: header.to_string(),
            sequence,
        })
    }

    pub fn accession(&self) -> &str {
        &self.accession
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Returns the number of residues in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Represents a single FASTQ record with decoded per-base quality scores.
///
/// The invariant `scores.len() == sequence.len()` is enforced by the parser
/// before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityRecord {
    header: String,
    sequence: String,
    scores: Vec<u8>,
}

impl QualityRecord {
    pub fn new(header: &str, sequence: String, scores: Vec<u8>) -> Self {
        Self {
            header: header.to_string(),
            sequence,
            scores,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn scores(&self) -> &[u8] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Computes the arithmetic mean of the quality scores.
    ///
    /// # Return
    ///
    /// Returns `None` when the record carries no scores, so callers never
    /// divide by zero.
    pub fn mean_quality(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let sum: u64 = self.scores.iter().map(|&s| s as u64).sum();
        Some(sum as f64 / self.scores.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_header_extracts_second_pipe_field() {
        let record = SequenceRecord::from_header("sp|P12345|TEST", "MKV".to_string()).unwrap();
        assert_eq!(record.accession(), "P12345");
        assert_eq!(record.header(), "sp|P12345|TEST");
        assert_eq!(record.sequence(), "MKV");
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn from_header_rejects_headers_without_pipe_fields() {
        assert!(SequenceRecord::from_header("P12345", "MKV".to_string()).is_none());
        assert!(SequenceRecord::from_header("", "MKV".to_string()).is_none());
    }

    #[test]
    fn from_header_rejects_empty_accession_field() {
        assert!(SequenceRecord::from_header("sp||TEST", "MKV".to_string()).is_none());
        assert!(SequenceRecord::from_header("sp|  |TEST", "MKV".to_string()).is_none());
    }

    #[test]
    fn from_header_trims_accession_whitespace() {
        let record = SequenceRecord::from_header("sp| P12345 |TEST", "MKV".to_string()).unwrap();
        assert_eq!(record.accession(), "P12345");
    }

    #[test]
    fn sequence_record_length_matches_sequence() {
        let record = SequenceRecord::from_header("sp|A|x", "MKVLA".to_string()).unwrap();
        assert_eq!(record.len(), record.sequence().len());
        assert!(!record.is_empty());
    }

    #[test]
    fn quality_record_exposes_fields() {
        let record = QualityRecord::new("read1", "ACGT".to_string(), vec![30, 31, 32, 33]);
        assert_eq!(record.header(), "read1");
        assert_eq!(record.sequence(), "ACGT");
        assert_eq!(record.scores(), &[30, 31, 32, 33]);
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn mean_quality_averages_scores() {
        let record = QualityRecord::new("r", "ACG".to_string(), vec![28, 32, 30]);
        assert_eq!(record.mean_quality(), Some(30.0));
    }

    #[test]
    fn mean_quality_is_none_for_empty_scores() {
        let record = QualityRecord::new("r", String::new(), Vec::new());
        assert_eq!(record.mean_quality(), None);
    }
}
