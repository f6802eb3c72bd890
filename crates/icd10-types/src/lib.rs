//! # icd10-types
//!
//! Type definitions for ICD-10-CM/PCS code records.
//!
//! This crate provides the `CodeRecord` entity stored in the code
//! database, plus the pure derivation functions for its metadata:
//! first-character category classification and clinical-context
//! synonym synthesis.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support
//!   via serde. Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use icd10_types::{clinical_context, category, CodeRecord, CodeType};
//!
//! let record = CodeRecord::new("E11A", "Type 2 diabetes mellitus", CodeType::Diagnosis);
//! assert_eq!(record.category, "Endocrine/Metabolic");
//!
//! // The derivation functions are also usable directly
//! assert_eq!(category::pcs_category("B020ZZZ"), "Imaging");
//! let ctx = clinical_context("Pain, unspecified", CodeType::Diagnosis);
//! assert!(ctx.ends_with("NOS"));
//! ```

#![warn(missing_docs)]

pub mod category;
mod code_type;
mod context;
mod record;

// Re-export all public types at crate root
pub use code_type::CodeType;
pub use context::clinical_context;
pub use record::CodeRecord;
