//! ICD-10 code record type.
//!
//! A `CodeRecord` is one entry in the persisted code database. The
//! `category` and `clinical_context` fields are derived from the code,
//! description, and code type at construction time.

use crate::{category, clinical_context, CodeType};

/// One ICD-10 code with its derived search metadata.
///
/// # Examples
///
/// ```
/// use icd10_types::{CodeRecord, CodeType};
///
/// let record = CodeRecord::new("E11A", "Type 2 diabetes mellitus", CodeType::Diagnosis);
/// assert_eq!(record.category, "Endocrine/Metabolic");
/// assert!(record.clinical_context.starts_with("type 2 diabetes mellitus"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeRecord {
    /// The ICD-10 code string, e.g. `E11A` or `0016070`.
    pub code: String,
    /// Free-text clinical description.
    pub description: String,
    /// Coarse clinical category, derived from the code's first character.
    pub category: String,
    /// Comma-joined synonym list, derived from the description.
    pub clinical_context: String,
    /// Which coding system produced the record.
    ///
    /// Databases written before procedure support lack this field;
    /// those legacy records were all diagnosis codes.
    #[cfg_attr(feature = "serde", serde(default = "legacy_code_type"))]
    pub code_type: CodeType,
}

#[cfg(feature = "serde")]
fn legacy_code_type() -> CodeType {
    CodeType::Diagnosis
}

impl CodeRecord {
    /// Builds a record, deriving `category` and `clinical_context`.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        code_type: CodeType,
    ) -> Self {
        let code = code.into();
        let description = description.into();
        let category = category::category_for(&code, code_type).to_string();
        let clinical_context = clinical_context(&description, code_type);

        Self {
            code,
            description,
            category,
            clinical_context,
            code_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_metadata() {
        let record = CodeRecord::new("0016070", "Bypass Cereb Vent to Nasophar", CodeType::Procedure);
        assert_eq!(record.category, "Medical/Surgical");
        assert_eq!(
            record.clinical_context,
            "bypass cereb vent to nasophar, surgical bypass, shunt, diversion"
        );
        assert_eq!(record.code_type, CodeType::Procedure);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_legacy_record_defaults_to_diagnosis() {
        // Pre-procedure databases have no code_type field.
        let json = r#"{
            "code": "A00",
            "description": "Cholera",
            "category": "Infectious Diseases",
            "clinical_context": "cholera"
        }"#;

        let record: CodeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.code_type, CodeType::Diagnosis);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let record = CodeRecord::new("E11A", "Type 2 diabetes mellitus", CodeType::Diagnosis);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: CodeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
        assert!(json.contains("\"code_type\":\"diagnosis\""));
    }
}
