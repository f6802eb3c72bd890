//! Code database load, merge, and save.
//!
//! The database is a pretty-printed JSON array of [`CodeRecord`]s,
//! kept sorted ascending by code. It is append-only across runs: a
//! merge only ever adds codes that are not already present.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use icd10_types::CodeRecord;

use crate::types::AddendaResult;

/// Maximum number of newly added records kept for the run summary.
pub const PREVIEW_LIMIT: usize = 10;

/// Result of merging candidate records into the existing corpus.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The merged corpus, sorted ascending by code.
    pub records: Vec<CodeRecord>,
    /// How many candidates were actually added.
    pub added: usize,
    /// Up to [`PREVIEW_LIMIT`] newly added records, in candidate order.
    pub preview: Vec<CodeRecord>,
    /// Codes that appeared more than once among the added candidates.
    ///
    /// Dedup only runs against the existing corpus, so two input files
    /// can both contribute the same code in a single run. All copies
    /// are retained; callers should surface this list.
    pub duplicate_candidates: Vec<String>,
}

/// Loads the existing database, treating a missing or unparsable file
/// as an empty corpus.
///
/// This is the recoverable path: the first run has no database yet,
/// and a corrupt one should not stop an ingest. A warning is logged
/// either way. Legacy records without a `code_type` field deserialize
/// as diagnosis codes.
pub fn load_database<P: AsRef<Path>>(path: P) -> Vec<CodeRecord> {
    let path = path.as_ref();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                "No existing database at {} ({e}), starting from empty",
                path.display()
            );
            return Vec::new();
        }
    };

    match serde_json::from_str(&text) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                "Existing database at {} is not valid JSON ({e}), starting from empty",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Merges candidates into the existing corpus.
///
/// Candidates whose code already exists in the corpus are dropped
/// (exact, case-sensitive match). The result is stable-sorted
/// ascending by code, so records sharing a code keep their
/// existing-then-candidate order.
pub fn merge(mut existing: Vec<CodeRecord>, candidates: Vec<CodeRecord>) -> MergeOutcome {
    let new: Vec<CodeRecord> = {
        let existing_codes: HashSet<&str> = existing.iter().map(|r| r.code.as_str()).collect();
        candidates
            .into_iter()
            .filter(|c| !existing_codes.contains(c.code.as_str()))
            .collect()
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in &new {
        *counts.entry(record.code.as_str()).or_default() += 1;
    }
    let mut duplicate_candidates: Vec<String> = counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(code, _)| code.to_string())
        .collect();
    duplicate_candidates.sort();

    let preview: Vec<CodeRecord> = new.iter().take(PREVIEW_LIMIT).cloned().collect();
    let added = new.len();

    existing.extend(new);
    existing.sort_by(|a, b| a.code.cmp(&b.code));

    MergeOutcome {
        records: existing,
        added,
        preview,
        duplicate_candidates,
    }
}

/// Writes the database as pretty-printed JSON.
///
/// The write goes through a sibling `.tmp` file and an atomic rename,
/// so a crash mid-write cannot leave a truncated database behind.
///
/// # Errors
/// Fails on serialization or I/O errors.
pub fn save_database<P: AsRef<Path>>(path: P, records: &[CodeRecord]) -> AddendaResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(records)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    Ok(())
}
