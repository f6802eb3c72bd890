//! Code type enumeration.
//!
//! Distinguishes diagnosis codes (ICD-10-CM) from procedure codes
//! (ICD-10-PCS).

use std::fmt;

/// Which coding system a record belongs to.
///
/// Serializes as the lowercase strings `"diagnosis"` / `"procedure"`,
/// matching the persisted database format.
///
/// # Examples
///
/// ```
/// use icd10_types::CodeType;
///
/// assert_eq!(CodeType::Diagnosis.as_str(), "diagnosis");
/// assert!(CodeType::Procedure.is_procedure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CodeType {
    /// ICD-10-CM diagnosis code.
    Diagnosis,
    /// ICD-10-PCS procedure code.
    Procedure,
}

impl CodeType {
    /// Returns the lowercase string form used in the persisted database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diagnosis => "diagnosis",
            Self::Procedure => "procedure",
        }
    }

    /// Returns true for diagnosis (ICD-10-CM) codes.
    pub fn is_diagnosis(self) -> bool {
        self == Self::Diagnosis
    }

    /// Returns true for procedure (ICD-10-PCS) codes.
    pub fn is_procedure(self) -> bool {
        self == Self::Procedure
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(CodeType::Diagnosis.as_str(), "diagnosis");
        assert_eq!(CodeType::Procedure.as_str(), "procedure");
        assert_eq!(CodeType::Diagnosis.to_string(), "diagnosis");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CodeType::Procedure).unwrap();
        assert_eq!(json, "\"procedure\"");

        let parsed: CodeType = serde_json::from_str("\"diagnosis\"").unwrap();
        assert_eq!(parsed, CodeType::Diagnosis);
    }
}
