//! Category classifiers.
//!
//! A code's coarse clinical category is derived from its first
//! character alone. The prefix tables come from the ICD-10 chapter
//! structure (CM) and the PCS section structure; they are domain
//! facts and must not be edited.

use crate::CodeType;

/// Fallback category for CM codes with an unmapped prefix.
pub const CM_FALLBACK: &str = "Other";

/// Fallback category for PCS codes with an unmapped prefix.
pub const PCS_FALLBACK: &str = "Other Procedures";

/// Returns the clinical category for an ICD-10-CM (diagnosis) code.
///
/// Only the first character is inspected. Unmapped prefixes (including
/// `U` and the empty string) resolve to [`CM_FALLBACK`].
///
/// # Examples
///
/// ```
/// use icd10_types::category::cm_category;
///
/// assert_eq!(cm_category("E11A"), "Endocrine/Metabolic");
/// assert_eq!(cm_category("U07"), "Other");
/// ```
pub fn cm_category(code: &str) -> &'static str {
    match code.chars().next() {
        Some('A') | Some('B') => "Infectious Diseases",
        Some('C') => "Neoplasms",
        Some('D') => "Blood/Immune Disorders",
        Some('E') => "Endocrine/Metabolic",
        Some('F') => "Mental Health",
        Some('G') => "Neurological",
        Some('H') => "Eye/Ear Disorders",
        Some('I') => "Cardiovascular",
        Some('J') => "Respiratory",
        Some('K') => "Digestive",
        Some('L') => "Dermatological",
        Some('M') => "Musculoskeletal",
        Some('N') => "Genitourinary",
        Some('O') => "Pregnancy/Childbirth",
        Some('P') => "Perinatal",
        Some('Q') => "Congenital",
        Some('R') => "Symptoms",
        Some('S') => "Injury",
        Some('T') => "Injury/Complications",
        Some('V') | Some('W') | Some('X') | Some('Y') => "External Causes",
        Some('Z') => "Preventive Care",
        _ => CM_FALLBACK,
    }
}

/// Returns the clinical category for an ICD-10-PCS (procedure) code.
///
/// The first character of a PCS code identifies its section. Unmapped
/// prefixes resolve to [`PCS_FALLBACK`].
///
/// # Examples
///
/// ```
/// use icd10_types::category::pcs_category;
///
/// assert_eq!(pcs_category("0016070"), "Medical/Surgical");
/// assert_eq!(pcs_category("B020ZZZ"), "Imaging");
/// ```
pub fn pcs_category(code: &str) -> &'static str {
    match code.chars().next() {
        Some('0') => "Medical/Surgical",
        Some('1') => "Obstetrics",
        Some('2') => "Placement",
        Some('3') => "Administration",
        Some('4') => "Measurement/Monitoring",
        Some('5') => "Extracorporeal Assistance",
        Some('6') => "Extracorporeal Therapies",
        Some('7') => "Osteopathic",
        Some('8') => "Other Procedures",
        Some('9') => "Chiropractic",
        Some('B') => "Imaging",
        Some('C') => "Nuclear Medicine",
        Some('D') => "Radiation Therapy",
        Some('F') => "Physical Rehab/Diagnostic Audiology",
        Some('G') => "Mental Health",
        Some('H') => "Substance Abuse",
        Some('X') => "New Technology",
        _ => PCS_FALLBACK,
    }
}

/// Dispatches to the CM or PCS table based on code type.
pub fn category_for(code: &str, code_type: CodeType) -> &'static str {
    match code_type {
        CodeType::Diagnosis => cm_category(code),
        CodeType::Procedure => pcs_category(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_table_spot_checks() {
        assert_eq!(cm_category("A00"), "Infectious Diseases");
        assert_eq!(cm_category("B95"), "Infectious Diseases");
        assert_eq!(cm_category("C50"), "Neoplasms");
        assert_eq!(cm_category("E11A"), "Endocrine/Metabolic");
        assert_eq!(cm_category("I21"), "Cardiovascular");
        assert_eq!(cm_category("V00"), "External Causes");
        assert_eq!(cm_category("Y99"), "External Causes");
        assert_eq!(cm_category("Z23"), "Preventive Care");
    }

    #[test]
    fn test_cm_fallback() {
        // U is deliberately absent from the CM table
        assert_eq!(cm_category("U07"), "Other");
        assert_eq!(cm_category("1A0"), "Other");
        assert_eq!(cm_category(""), "Other");
    }

    #[test]
    fn test_pcs_table_spot_checks() {
        assert_eq!(pcs_category("0016070"), "Medical/Surgical");
        assert_eq!(pcs_category("10D00Z0"), "Obstetrics");
        assert_eq!(pcs_category("8E0ZXY6"), "Other Procedures");
        assert_eq!(pcs_category("B020ZZZ"), "Imaging");
        assert_eq!(pcs_category("XW033H6"), "New Technology");
    }

    #[test]
    fn test_pcs_fallback() {
        // A is not a PCS section
        assert_eq!(pcs_category("A000000"), "Other Procedures");
        assert_eq!(pcs_category(""), "Other Procedures");
    }

    #[test]
    fn test_total_over_ascii_alphanumerics() {
        // Every single-character prefix must resolve to a non-empty
        // category in both tables.
        for c in ('A'..='Z').chain('0'..='9') {
            let code = c.to_string();
            assert!(!cm_category(&code).is_empty());
            assert!(!pcs_category(&code).is_empty());
        }
    }

    #[test]
    fn test_category_for_dispatch() {
        assert_eq!(
            category_for("E11A", CodeType::Diagnosis),
            "Endocrine/Metabolic"
        );
        assert_eq!(category_for("0016070", CodeType::Procedure), "Medical/Surgical");
    }
}
