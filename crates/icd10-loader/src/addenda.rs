//! ICD-10 addenda file parsers.
//!
//! Addenda files are the yearly CMS delta listings. Only `Add:` lines
//! are ingested; `Delete:`/`Revise:` entries, headers, and footers are
//! passed over. The CM and PCS addenda share the line format but place
//! the code in different columns.

use std::io::BufRead;
use std::path::Path;

use icd10_types::{CodeRecord, CodeType};

use crate::fields::{open_input, split_wide};
use crate::types::{AddendaResult, ParseOutcome};

/// Line prefix marking a newly added code.
const ADD_PREFIX: &str = "Add:";

/// Parses a CM addenda file from a path.
///
/// Line format, columns padded with 2+ spaces:
/// `Add:         1  E11A    Type 2 diabetes mellitus`
/// Field 2 is the code, field 3 the description.
///
/// # Errors
/// Fails if the file is missing or unreadable; malformed lines are
/// skipped and counted, never fatal.
pub fn parse_cm_addenda<P: AsRef<Path>>(path: P) -> AddendaResult<ParseOutcome> {
    parse_cm_addenda_from_reader(open_input(path.as_ref())?)
}

/// Parses a CM addenda file from any buffered reader.
pub fn parse_cm_addenda_from_reader<R: BufRead>(reader: R) -> AddendaResult<ParseOutcome> {
    parse_addenda(reader, CodeType::Diagnosis)
}

/// Parses a PCS addenda file from a path.
///
/// Line format, columns padded with 2+ spaces:
/// `Add:  00H033J  Short description  Long description`
/// Field 1 is the code; the long description (field 3) is preferred,
/// falling back to the short one (field 2).
///
/// # Errors
/// Fails if the file is missing or unreadable; malformed lines are
/// skipped and counted, never fatal.
pub fn parse_pcs_addenda<P: AsRef<Path>>(path: P) -> AddendaResult<ParseOutcome> {
    parse_pcs_addenda_from_reader(open_input(path.as_ref())?)
}

/// Parses a PCS addenda file from any buffered reader.
pub fn parse_pcs_addenda_from_reader<R: BufRead>(reader: R) -> AddendaResult<ParseOutcome> {
    parse_addenda(reader, CodeType::Procedure)
}

fn parse_addenda<R: BufRead>(reader: R, code_type: CodeType) -> AddendaResult<ParseOutcome> {
    let mut outcome = ParseOutcome::default();

    for line in reader.lines() {
        let line = line?;
        outcome.stats.lines_read += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || !trimmed.starts_with(ADD_PREFIX) {
            outcome.stats.skipped_filtered += 1;
            continue;
        }

        let fields = split_wide(trimmed);
        if fields.len() < 3 {
            outcome.stats.skipped_shape += 1;
            continue;
        }

        let (code, description) = match code_type {
            // CM: field 0 = "Add:", 1 = ordinal, 2 = code, 3 = description
            CodeType::Diagnosis => (
                fields.get(2).map_or("", |f| f.trim()),
                fields.get(3).map_or("", |f| f.trim()),
            ),
            // PCS: field 0 = "Add:", 1 = code, 2 = short desc, 3 = long desc
            CodeType::Procedure => {
                let code = fields.get(1).map_or("", |f| f.trim());
                let short = fields.get(2).map_or("", |f| f.trim());
                let long = fields.get(3).map_or("", |f| f.trim());
                (code, if long.is_empty() { short } else { long })
            }
        };

        if code.is_empty() || description.is_empty() {
            outcome.stats.skipped_empty_field += 1;
            continue;
        }

        outcome
            .records
            .push(CodeRecord::new(code, description, code_type));
        outcome.stats.records_emitted += 1;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_cm(input: &str) -> ParseOutcome {
        parse_cm_addenda_from_reader(input.as_bytes()).unwrap()
    }

    fn parse_pcs(input: &str) -> ParseOutcome {
        parse_pcs_addenda_from_reader(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_cm_add_line() {
        let outcome = parse_cm("Add:         1  E11A    Type 2 diabetes mellitus\n");

        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.code, "E11A");
        assert_eq!(record.description, "Type 2 diabetes mellitus");
        assert_eq!(record.code_type, CodeType::Diagnosis);
        assert_eq!(record.category, "Endocrine/Metabolic");
    }

    #[test]
    fn test_cm_headers_and_blank_lines_ignored() {
        let input = "\
ICD-10-CM Addenda 2026

Delete:      4  E08    Diabetes mellitus due to underlying condition
Add:         1  E11A    Type 2 diabetes mellitus

End of file
";
        let outcome = parse_cm(input);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.stats.lines_read, 6);
        assert_eq!(outcome.stats.skipped_filtered, 5);
    }

    #[test]
    fn test_cm_crlf_line_endings() {
        let outcome = parse_cm("Add:         1  E11A    Type 2 diabetes mellitus\r\n");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].description, "Type 2 diabetes mellitus");
    }

    #[test]
    fn test_cm_indented_add_line_kept() {
        // The prefix check runs on the trimmed line.
        let outcome = parse_cm("   Add:         1  E11A    Type 2 diabetes mellitus\n");
        assert_eq!(outcome.records.len(), 1);
    }

    #[test]
    fn test_cm_missing_description_skipped() {
        let outcome = parse_cm("Add:         1  E11A\n");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.stats.skipped_empty_field, 1);
    }

    #[test]
    fn test_cm_too_few_fields_skipped() {
        let outcome = parse_cm("Add:  only-one-field\n");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.stats.skipped_shape, 1);
    }

    #[test]
    fn test_pcs_prefers_long_description() {
        let outcome =
            parse_pcs("Add:  00H033J  Insert Infus Dev  Insertion of Infusion Device into Brain\n");

        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.code, "00H033J");
        assert_eq!(record.description, "Insertion of Infusion Device into Brain");
        assert_eq!(record.code_type, CodeType::Procedure);
        assert_eq!(record.category, "Medical/Surgical");
    }

    #[test]
    fn test_pcs_falls_back_to_short_description() {
        let outcome = parse_pcs("Add:  00H033J  Insert Infus Dev\n");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].description, "Insert Infus Dev");
    }

    #[test]
    fn test_pcs_category_from_first_character() {
        let outcome = parse_pcs("Add:  B020ZZZ  CT of Brain  Computerized Tomography of Brain\n");
        assert_eq!(outcome.records[0].category, "Imaging");
    }
}
