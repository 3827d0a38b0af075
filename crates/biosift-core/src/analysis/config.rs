use std::path::PathBuf;
use thiserror::Error;

/// Default minimum sequence length for length filtering.
pub const DEFAULT_MIN_SEQUENCE_LENGTH: usize = 1000;
/// Default minimum mean Phred score for quality filtering.
pub const DEFAULT_MIN_MEAN_QUALITY: f64 = 30.0;
/// Default ASCII offset of the Phred quality encoding (Sanger).
pub const DEFAULT_PHRED_OFFSET: u8 = 33;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Configuration for the sequence statistics workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStatsConfig {
    pub input_path: PathBuf,
}

/// Configuration for the structure summary workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureSummaryConfig {
    pub input_path: PathBuf,
}

/// Configuration for the sequence length filter workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceFilterConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub min_length: usize,
}

/// Configuration for the quality filter workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityFilterConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub min_mean_quality: f64,
    pub phred_offset: u8,
}

#[derive(Default)]
pub struct SequenceFilterConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    min_length: Option<usize>,
}

impl SequenceFilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.input_path = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParameter`] when a required path was
    /// not provided. The threshold falls back to its default.
    pub fn build(self) -> Result<SequenceFilterConfig, ConfigError> {
        Ok(SequenceFilterConfig {
            input_path: self
                .input_path
                .ok_or(ConfigError::MissingParameter("input_path"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            min_length: self.min_length.unwrap_or(DEFAULT_MIN_SEQUENCE_LENGTH),
        })
    }
}

#[derive(Default)]
pub struct QualityFilterConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    min_mean_quality: Option<f64>,
    phred_offset: Option<u8>,
}

impl QualityFilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.input_path = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn min_mean_quality(mut self, quality: f64) -> Self {
        self.min_mean_quality = Some(quality);
        self
    }
    pub fn phred_offset(mut self, offset: u8) -> Self {
        self.phred_offset = Some(offset);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParameter`] when a required path was
    /// not provided. Thresholds and encoding fall back to their defaults.
    pub fn build(self) -> Result<QualityFilterConfig, ConfigError> {
        Ok(QualityFilterConfig {
            input_path: self
                .input_path
                .ok_or(ConfigError::MissingParameter("input_path"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
            min_mean_quality: self.min_mean_quality.unwrap_or(DEFAULT_MIN_MEAN_QUALITY),
            phred_offset: self.phred_offset.unwrap_or(DEFAULT_PHRED_OFFSET),
        })
    }
}
