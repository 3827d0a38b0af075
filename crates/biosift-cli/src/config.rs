use crate::cli::{FastaFilterArgs, FastqFilterArgs};
use crate::error::{CliError, Result};
use biosift::analysis::config as core_config;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Optional file-level settings for the `fasta-filter` command.
///
/// Command-line flags take precedence over file values. Thresholds left
/// unset in both places fall back to the core defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSequenceFilterConfig {
    #[serde(rename = "min-length")]
    min_length: Option<usize>,
}

impl PartialSequenceFilterConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(
        self,
        args: &FastaFilterArgs,
    ) -> Result<core_config::SequenceFilterConfig> {
        let mut builder = core_config::SequenceFilterConfigBuilder::new()
            .input_path(args.input.clone())
            .output_path(args.output.clone());

        if let Some(min_length) = args.min_length.or(self.min_length) {
            builder = builder.min_length(min_length);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Optional file-level settings for the `fastq-filter` command.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialQualityFilterConfig {
    #[serde(rename = "min-mean-quality")]
    min_mean_quality: Option<f64>,
    #[serde(rename = "phred-offset")]
    phred_offset: Option<u8>,
}

impl PartialQualityFilterConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(
        self,
        args: &FastqFilterArgs,
    ) -> Result<core_config::QualityFilterConfig> {
        let mut builder = core_config::QualityFilterConfigBuilder::new()
            .input_path(args.input.clone())
            .output_path(args.output.clone());

        if let Some(min_quality) = args.min_quality.or(self.min_mean_quality) {
            builder = builder.min_mean_quality(min_quality);
        }
        if let Some(offset) = args.phred_offset.or(self.phred_offset) {
            builder = builder.phred_offset(offset);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;

    fn write_config_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn parse_fasta_filter_args(extra: &[&str]) -> FastaFilterArgs {
        let mut argv = vec![
            "biosift",
            "fasta-filter",
            "-i",
            "in.fasta",
            "-o",
            "out.fasta",
        ];
        argv.extend_from_slice(extra);
        let cli = Cli::parse_from(argv);
        match cli.command {
            Commands::FastaFilter(args) => args,
            _ => panic!("Expected 'fasta-filter' subcommand"),
        }
    }

    fn parse_fastq_filter_args(extra: &[&str]) -> FastqFilterArgs {
        let mut argv = vec![
            "biosift",
            "fastq-filter",
            "-i",
            "in.fastq",
            "-o",
            "out.fastq",
        ];
        argv.extend_from_slice(extra);
        let cli = Cli::parse_from(argv);
        match cli.command {
            Commands::FastqFilter(args) => args,
            _ => panic!("Expected 'fastq-filter' subcommand"),
        }
    }

    #[test]
    fn file_value_is_used_when_no_flag_is_given() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config_file(dir.path(), "filter.toml", "min-length = 250\n");

        let args = parse_fasta_filter_args(&[]);
        let partial = PartialSequenceFilterConfig::from_file(&config_path).unwrap();
        let config = partial.merge_with_cli(&args).unwrap();

        assert_eq!(config.min_length, 250);
        assert_eq!(config.input_path, PathBuf::from("in.fasta"));
        assert_eq!(config.output_path, PathBuf::from("out.fasta"));
    }

    #[test]
    fn cli_flag_overrides_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config_file(dir.path(), "filter.toml", "min-length = 250\n");

        let args = parse_fasta_filter_args(&["--min-length", "42"]);
        let partial = PartialSequenceFilterConfig::from_file(&config_path).unwrap();
        let config = partial.merge_with_cli(&args).unwrap();

        assert_eq!(config.min_length, 42);
    }

    #[test]
    fn defaults_apply_when_neither_file_nor_flag_sets_a_value() {
        let args = parse_fasta_filter_args(&[]);
        let config = PartialSequenceFilterConfig::default()
            .merge_with_cli(&args)
            .unwrap();
        assert_eq!(config.min_length, core_config::DEFAULT_MIN_SEQUENCE_LENGTH);
    }

    #[test]
    fn quality_settings_merge_independently() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config_file(
            dir.path(),
            "quality.toml",
            "min-mean-quality = 25.0\nphred-offset = 64\n",
        );

        let args = parse_fastq_filter_args(&["--min-quality", "35.0"]);
        let partial = PartialQualityFilterConfig::from_file(&config_path).unwrap();
        let config = partial.merge_with_cli(&args).unwrap();

        assert_eq!(config.min_mean_quality, 35.0);
        assert_eq!(config.phred_offset, 64);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_config_file(dir.path(), "bad.toml", "min-lenght = 250\n");

        let result = PartialSequenceFilterConfig::from_file(&config_path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_propagates_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PartialSequenceFilterConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
