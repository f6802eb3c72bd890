//! ICD-10 addenda ingestion binary.
//!
//! Runs the parse/merge/save pipeline once against the 2026 release
//! files and reports what changed. Paths have compiled-in defaults
//! and can be overridden through environment variables.

use std::path::PathBuf;

use icd10_loader::{PipelineConfig, DEFAULT_SAMPLE_RATE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DESCRIPTION_PREVIEW_CHARS: usize = 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = config_from_env();

    tracing::info!("Parsing ICD-10-CM and ICD-10-PCS 2026 files");
    let report = icd10_loader::run(&config)?;

    tracing::info!("Database updated: {}", config.database.display());
    tracing::info!("Total codes: {}", report.total);
    tracing::info!("Diagnosis codes (ICD-10-CM): {}", report.diagnosis);
    tracing::info!("Procedure codes (ICD-10-PCS): {}", report.procedure);
    tracing::info!("Added: {}", report.added);

    let skipped = report.cm_stats.skipped()
        + report.pcs_addenda_stats.skipped()
        + report.pcs_order_stats.skipped();
    if skipped > 0 {
        tracing::info!("Skipped {} malformed or filtered input lines", skipped);
    }

    if !report.preview.is_empty() {
        tracing::info!("Sample of newly added codes:");
        for record in &report.preview {
            tracing::info!(
                "  {} - {} ({})",
                record.code,
                truncate(&record.description, DESCRIPTION_PREVIEW_CHARS),
                record.code_type
            );
        }
    }

    Ok(())
}

/// Builds the pipeline config from compiled-in defaults, honoring
/// `ICD10_DATA_DIR`, `ICD10_DATABASE`, and `ICD10_SAMPLE_RATE`.
fn config_from_env() -> PipelineConfig {
    let mut config = PipelineConfig::default();

    if let Ok(dir) = std::env::var("ICD10_DATA_DIR") {
        let dir = PathBuf::from(dir);
        config.cm_addenda = dir.join("icd10cm_order_addenda_2026.txt");
        config.pcs_addenda = dir.join("order_addenda_2026.txt");
        config.pcs_order = dir.join("icd10pcs_order_2026.txt");
    }

    if let Ok(database) = std::env::var("ICD10_DATABASE") {
        config.database = PathBuf::from(database);
    }

    config.sample_rate = std::env::var("ICD10_SAMPLE_RATE")
        .ok()
        .and_then(|r| r.parse().ok())
        .unwrap_or(DEFAULT_SAMPLE_RATE);

    config
}

/// Truncates a description to at most `max` characters for display.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}
