//! Clinical context synthesizer.
//!
//! Expands a code description into a comma-joined list of search
//! synonyms. The output always starts with the lowercased description;
//! substring-trigger rules then append synonym groups in declaration
//! order. Overlapping groups are kept as-is (no dedup), so downstream
//! free-text search weights repeated terms naturally.

use crate::CodeType;

/// A trigger rule: if any of `triggers` occurs in the lowercased
/// description, every term in `synonyms` is appended.
type Rule = (&'static [&'static str], &'static [&'static str]);

const PROCEDURE_RULES: &[Rule] = &[
    (&["bypass"], &["surgical bypass", "shunt", "diversion"]),
    (
        &["replacement", "replace"],
        &["joint replacement", "implant", "prosthesis"],
    ),
    (
        &["removal", "excision"],
        &["surgical removal", "resection", "extraction"],
    ),
    (&["knee"], &["knee surgery", "knee procedure", "knee operation"]),
    (
        &["shoulder"],
        &["shoulder surgery", "shoulder procedure", "shoulder operation"],
    ),
    (
        &["spine", "spinal"],
        &["spinal surgery", "back surgery", "spine procedure"],
    ),
    (
        &["arthroscop"],
        &["minimally invasive", "scope procedure", "arthroscopy"],
    ),
    (&["open approach"], &["open surgery", "open procedure"]),
    (
        &["percutaneous"],
        &["minimally invasive", "percutaneous procedure", "through skin"],
    ),
    (
        &["endoscopic"],
        &["endoscopy", "scope procedure", "minimally invasive"],
    ),
];

const DIAGNOSIS_RULES: &[Rule] = &[
    (
        &["diabetes"],
        &["diabetic condition", "blood sugar disorder", "glucose metabolism"],
    ),
    (
        &["multiple sclerosis"],
        &["MS", "demyelinating disease", "autoimmune neurological disorder"],
    ),
    (&["pain"], &["painful condition", "discomfort", "ache"]),
    (
        &["inflammatory"],
        &["inflammation", "inflammatory condition", "swelling"],
    ),
    (
        &["hyperoxaluria"],
        &["oxalate disorder", "kidney stone risk", "metabolic disorder"],
    ),
    (
        &["lipodystrophy"],
        &["fat distribution disorder", "adipose tissue abnormality"],
    ),
    (
        &["muscular dystrophy"],
        &["muscle wasting", "muscle weakness", "progressive muscle disorder"],
    ),
    (&["breast"], &["mammary", "breast tissue"]),
    (&["unspecified"], &["not otherwise specified", "NOS"]),
];

// Laterality applies to both code systems.
const SHARED_RULES: &[Rule] = &[
    (&["right"], &["right side", "right-sided"]),
    (&["left"], &["left side", "left-sided"]),
];

/// Synthesizes the searchable clinical context for a description.
///
/// Total and deterministic: identical inputs always yield a
/// byte-identical string, and an empty description yields an empty
/// seed with no triggers fired.
///
/// # Examples
///
/// ```
/// use icd10_types::{clinical_context, CodeType};
///
/// let ctx = clinical_context("Acute pain, left hip", CodeType::Diagnosis);
/// assert_eq!(
///     ctx,
///     "acute pain, left hip, painful condition, discomfort, ache, left side, left-sided"
/// );
/// ```
pub fn clinical_context(description: &str, code_type: CodeType) -> String {
    let lower = description.to_lowercase();

    let mut contexts: Vec<&str> = vec![&lower];

    let rules = match code_type {
        CodeType::Procedure => PROCEDURE_RULES,
        CodeType::Diagnosis => DIAGNOSIS_RULES,
    };

    for (triggers, synonyms) in rules.iter().chain(SHARED_RULES) {
        if triggers.iter().any(|t| lower.contains(t)) {
            contexts.extend_from_slice(synonyms);
        }
    }

    contexts.join(", ")
}
