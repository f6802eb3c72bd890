//! Loader-specific types: errors, configuration, and parse statistics.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading addenda files or the database.
#[derive(Error, Debug)]
pub enum AddendaError {
    /// I/O error reading an input file.
    #[error("IO error reading addenda file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error writing the database.
    #[error("JSON error writing database: {0}")]
    Json(#[from] serde_json::Error),

    /// Required input file not found.
    #[error("Input file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },
}

/// Result type for loader operations.
pub type AddendaResult<T> = Result<T, AddendaError>;

/// Statistics from one parse pass over an input file.
///
/// Skipped lines are counted by reason rather than dropped without
/// trace, so a run can report what it ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Total lines read from the file.
    pub lines_read: usize,
    /// Candidate records emitted.
    pub records_emitted: usize,
    /// Lines skipped because they are blank or lack the `Add:` prefix.
    pub skipped_filtered: usize,
    /// Lines skipped for having too few fields.
    pub skipped_shape: usize,
    /// Lines skipped for an empty code or description field.
    pub skipped_empty_field: usize,
    /// Lines skipped for a code of the wrong length (order file only).
    pub skipped_bad_code: usize,
    /// Non-blank lines passed over by the sampler (order file only).
    pub sampled_out: usize,
}

impl ParseStats {
    /// Total lines skipped for any reason, excluding sampled-out lines.
    pub fn skipped(&self) -> usize {
        self.skipped_filtered + self.skipped_shape + self.skipped_empty_field + self.skipped_bad_code
    }
}

/// A parse result: the candidate records plus the pass statistics.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Candidate records, in file order.
    pub records: Vec<icd10_types::CodeRecord>,
    /// Statistics for the pass.
    pub stats: ParseStats,
}

/// Paths and tuning for one pipeline run.
///
/// All defaults are the fixed relative paths the batch job is expected
/// to run against.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// ICD-10-CM addenda file (diagnosis codes).
    pub cm_addenda: PathBuf,
    /// ICD-10-PCS addenda file (procedure codes).
    pub pcs_addenda: PathBuf,
    /// Full ICD-10-PCS order file, sampled rather than fully ingested.
    pub pcs_order: PathBuf,
    /// The persisted code database, read and overwritten by each run.
    pub database: PathBuf,
    /// Keep every Nth non-blank line of the order file. Values below 1
    /// are treated as 1 (keep everything).
    pub sample_rate: usize,
}

/// Default sampling rate for the PCS order file.
pub const DEFAULT_SAMPLE_RATE: usize = 100;

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cm_addenda: PathBuf::from("data/icd10cm_order_addenda_2026.txt"),
            pcs_addenda: PathBuf::from("data/order_addenda_2026.txt"),
            pcs_order: PathBuf::from("data/icd10pcs_order_2026.txt"),
            database: PathBuf::from("src/icd10-database.json"),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_config_default() {
        let config = PipelineConfig::default();
        assert_eq!(config.sample_rate, 100);
        assert_eq!(config.database, PathBuf::from("src/icd10-database.json"));
        assert_eq!(
            config.cm_addenda,
            PathBuf::from("data/icd10cm_order_addenda_2026.txt")
        );
    }

    #[test]
    fn test_parse_stats_skipped() {
        let stats = ParseStats {
            skipped_filtered: 5,
            skipped_shape: 2,
            skipped_empty_field: 1,
            sampled_out: 99,
            ..Default::default()
        };
        assert_eq!(stats.skipped(), 8);
    }
}
