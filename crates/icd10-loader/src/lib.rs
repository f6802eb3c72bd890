//! # icd10-loader
//!
//! Parsers and merge pipeline for ICD-10 order/addenda files.
//!
//! Three input formats are supported: the ICD-10-CM addenda file, the
//! ICD-10-PCS addenda file, and the full ICD-10-PCS order file (which
//! is sampled rather than fully ingested). Parsed candidates are
//! merged into a JSON code database, deduplicated against it, and
//! written back sorted by code.

#![warn(missing_docs)]

mod addenda;
mod database;
mod fields;
mod order;
mod pipeline;
mod types;

pub use addenda::{
    parse_cm_addenda, parse_cm_addenda_from_reader, parse_pcs_addenda,
    parse_pcs_addenda_from_reader,
};
pub use database::{load_database, merge, save_database, MergeOutcome, PREVIEW_LIMIT};
pub use order::{sample_pcs_order, sample_pcs_order_from_reader};
pub use pipeline::{run, PipelineReport};
pub use types::{
    AddendaError, AddendaResult, ParseOutcome, ParseStats, PipelineConfig, DEFAULT_SAMPLE_RATE,
};

// Re-export icd10-types for convenience
pub use icd10_types;
