//! PCS full order file sampler.
//!
//! The full ICD-10-PCS order file lists every valid procedure code,
//! around 80k lines. Ingesting all of it would swamp the database, so
//! only every Nth non-blank line is kept.

use std::io::BufRead;
use std::path::Path;

use icd10_types::{CodeRecord, CodeType};

use crate::fields::open_input;
use crate::types::{AddendaResult, ParseOutcome};

/// Every PCS code is exactly 7 characters.
const PCS_CODE_LEN: usize = 7;

/// Samples procedure codes from a full PCS order file at a path.
///
/// Line format, columns padded with single spaces:
/// `00002 0016070 1 Bypass Cereb Vent to Nasophar ...`
/// Field 0 is the ordinal, field 1 the code, field 2 an unused
/// hierarchy marker; the remaining fields form the description.
///
/// The counter increments before the modulus check, so with
/// `sample_rate = 100` the 100th, 200th, ... non-blank lines are kept.
/// A `sample_rate` below 1 is treated as 1 (keep every line).
///
/// # Errors
/// Fails if the file is missing or unreadable.
pub fn sample_pcs_order<P: AsRef<Path>>(path: P, sample_rate: usize) -> AddendaResult<ParseOutcome> {
    sample_pcs_order_from_reader(open_input(path.as_ref())?, sample_rate)
}

/// Samples procedure codes from any buffered reader.
pub fn sample_pcs_order_from_reader<R: BufRead>(
    reader: R,
    sample_rate: usize,
) -> AddendaResult<ParseOutcome> {
    let sample_rate = sample_rate.max(1);
    let mut outcome = ParseOutcome::default();
    let mut non_blank = 0usize;

    for line in reader.lines() {
        let line = line?;
        outcome.stats.lines_read += 1;

        if line.trim().is_empty() {
            outcome.stats.skipped_filtered += 1;
            continue;
        }

        non_blank += 1;
        if non_blank % sample_rate != 0 {
            outcome.stats.sampled_out += 1;
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            outcome.stats.skipped_shape += 1;
            continue;
        }

        let code = fields[1];
        if code.chars().count() != PCS_CODE_LEN {
            outcome.stats.skipped_bad_code += 1;
            continue;
        }

        let description = fields[3..].join(" ");
        outcome
            .records
            .push(CodeRecord::new(code, description, CodeType::Procedure));
        outcome.stats.records_emitted += 1;
    }

    Ok(outcome)
}
