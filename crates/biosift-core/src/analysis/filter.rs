use crate::analysis::config::{DEFAULT_MIN_MEAN_QUALITY, DEFAULT_MIN_SEQUENCE_LENGTH};
use crate::core::models::record::{QualityRecord, SequenceRecord};

/// A predicate deciding whether a record survives filtering.
pub trait RecordFilter<R> {
    /// Returns `true` when the record should be kept.
    fn retains(&self, record: &R) -> bool;
}

/// Keeps sequence records of at least a minimum length (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for MinLengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEQUENCE_LENGTH)
    }
}

impl RecordFilter<SequenceRecord> for MinLengthFilter {
    fn retains(&self, record: &SequenceRecord) -> bool {
        record.len() >= self.min_length
    }
}

/// Keeps quality records whose mean Phred score reaches a minimum
/// (inclusive).
///
/// A record without any quality scores has no mean and is always
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMeanQualityFilter {
    min_mean_quality: f64,
}

impl MinMeanQualityFilter {
    pub fn new(min_mean_quality: f64) -> Self {
        Self { min_mean_quality }
    }
}

impl Default for MinMeanQualityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_MEAN_QUALITY)
    }
}

impl RecordFilter<QualityRecord> for MinMeanQualityFilter {
    fn retains(&self, record: &QualityRecord) -> bool {
        record
            .mean_quality()
            .map(|mean| mean >= self.min_mean_quality)
            .unwrap_or(false)
    }
}

/// Applies a filter to a record collection, preserving input order.
pub fn apply_filter<R, F: RecordFilter<R>>(records: Vec<R>, filter: &F) -> Vec<R> {
    records
        .into_iter()
        .filter(|record| filter.retains(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(accession: &str, length: usize) -> SequenceRecord {
        SequenceRecord::from_header(&format!("sp|{accession}|T"), "M".repeat(length)).unwrap()
    }

    fn quality(header: &str, scores: Vec<u8>) -> QualityRecord {
        QualityRecord::new(header, "A".repeat(scores.len()), scores)
    }

    #[test]
    fn min_length_filter_is_inclusive() {
        let filter = MinLengthFilter::new(10);
        assert!(filter.retains(&sequence("P1", 10)));
        assert!(filter.retains(&sequence("P2", 11)));
        assert!(!filter.retains(&sequence("P3", 9)));
    }

    #[test]
    fn min_length_filter_defaults_to_one_thousand() {
        let filter = MinLengthFilter::default();
        assert!(filter.retains(&sequence("P1", 1000)));
        assert!(!filter.retains(&sequence("P2", 999)));
    }

    #[test]
    fn mean_quality_filter_is_inclusive() {
        let filter = MinMeanQualityFilter::new(30.0);
        assert!(filter.retains(&quality("r1", vec![30, 30, 30])));
        assert!(filter.retains(&quality("r2", vec![20, 40])));
        assert!(!filter.retains(&quality("r3", vec![29, 30])));
    }

    #[test]
    fn record_without_scores_is_rejected() {
        let filter = MinMeanQualityFilter::new(0.0);
        assert!(!filter.retains(&quality("empty", Vec::new())));
    }

    #[test]
    fn apply_filter_preserves_order() {
        let records = vec![sequence("P1", 5), sequence("P2", 1), sequence("P3", 5)];
        let kept = apply_filter(records, &MinLengthFilter::new(5));
        let accessions: Vec<&str> = kept.iter().map(|r| r.accession()).collect();
        assert_eq!(accessions, ["P1", "P3"]);
    }

    #[test]
    fn apply_filter_is_idempotent() {
        let records = vec![sequence("P1", 5), sequence("P2", 1)];
        let filter = MinLengthFilter::new(5);
        let once = apply_filter(records, &filter);
        let twice = apply_filter(once.clone(), &filter);
        assert_eq!(once, twice);
    }
}
