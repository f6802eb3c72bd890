//! One-shot ingestion pipeline.
//!
//! Parses the three input files, merges the candidates into the
//! existing database, and writes the result back. Missing input files
//! are fatal; a missing database is not.

use icd10_types::CodeRecord;

use crate::addenda::{parse_cm_addenda, parse_pcs_addenda};
use crate::database::{load_database, merge, save_database};
use crate::order::sample_pcs_order;
use crate::types::{AddendaResult, ParseOutcome, ParseStats, PipelineConfig};

/// Summary of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Stats from the CM addenda parse.
    pub cm_stats: ParseStats,
    /// Stats from the PCS addenda parse.
    pub pcs_addenda_stats: ParseStats,
    /// Stats from the PCS order file sampling.
    pub pcs_order_stats: ParseStats,
    /// Total records in the database after the merge.
    pub total: usize,
    /// Diagnosis records in the database after the merge.
    pub diagnosis: usize,
    /// Procedure records in the database after the merge.
    pub procedure: usize,
    /// Records added by this run.
    pub added: usize,
    /// Up to ten of the newly added records.
    pub preview: Vec<CodeRecord>,
}

/// Runs the full ingest once.
///
/// Candidates are concatenated in the order CM addenda, PCS addenda,
/// PCS sample before the merge. With the `parallel` feature the three
/// parses run concurrently; the concatenation order is unchanged.
///
/// # Errors
/// Fails if any of the three input files is missing or unreadable, or
/// if the merged database cannot be written.
pub fn run(config: &PipelineConfig) -> AddendaResult<PipelineReport> {
    let (cm, pcs_addenda, pcs_order) = parse_inputs(config)?;

    tracing::info!("Found {} new CM diagnosis codes", cm.records.len());
    tracing::info!("Found {} new PCS procedure codes", pcs_addenda.records.len());
    tracing::info!(
        "Sampled {} common procedure codes (1 in {})",
        pcs_order.records.len(),
        config.sample_rate.max(1)
    );

    let mut candidates = cm.records;
    candidates.extend(pcs_addenda.records);
    candidates.extend(pcs_order.records);

    let existing = load_database(&config.database);
    tracing::info!("Existing database has {} codes", existing.len());

    let outcome = merge(existing, candidates);
    if !outcome.duplicate_candidates.is_empty() {
        tracing::warn!(
            "Duplicate candidate codes within this run, all retained: {}",
            outcome.duplicate_candidates.join(", ")
        );
    }

    save_database(&config.database, &outcome.records)?;

    let diagnosis = outcome
        .records
        .iter()
        .filter(|r| r.code_type.is_diagnosis())
        .count();

    Ok(PipelineReport {
        cm_stats: cm.stats,
        pcs_addenda_stats: pcs_addenda.stats,
        pcs_order_stats: pcs_order.stats,
        total: outcome.records.len(),
        diagnosis,
        procedure: outcome.records.len() - diagnosis,
        added: outcome.added,
        preview: outcome.preview,
    })
}

#[cfg(feature = "parallel")]
fn parse_inputs(
    config: &PipelineConfig,
) -> AddendaResult<(ParseOutcome, ParseOutcome, ParseOutcome)> {
    let (cm, (pcs_addenda, pcs_order)) = rayon::join(
        || parse_cm_addenda(&config.cm_addenda),
        || {
            rayon::join(
                || parse_pcs_addenda(&config.pcs_addenda),
                || sample_pcs_order(&config.pcs_order, config.sample_rate),
            )
        },
    );

    Ok((cm?, pcs_addenda?, pcs_order?))
}

#[cfg(not(feature = "parallel"))]
fn parse_inputs(
    config: &PipelineConfig,
) -> AddendaResult<(ParseOutcome, ParseOutcome, ParseOutcome)> {
    Ok((
        parse_cm_addenda(&config.cm_addenda)?,
        parse_pcs_addenda(&config.pcs_addenda)?,
        sample_pcs_order(&config.pcs_order, config.sample_rate)?,
    ))
}
