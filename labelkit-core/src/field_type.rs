//! Semantic field types assigned to label lines

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic category of one line of label text.
///
/// Every input string maps to exactly one field type;
/// [`DrugDescription`](FieldType::DrugDescription) is the fallback when no
/// classification rule fires. The serialized names match the `field_type`
/// column of the external keyword store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Structured informational field ending in a colon
    BasicInfo,
    /// Colon-terminated field holding a number (lot, batch, expiry)
    NumberField,
    /// Product or drug name
    DrugName,
    /// Sheet or tablet count line
    NumberOfSheets,
    /// Manufacturer or marketing-authorisation holder
    CompanyName,
    /// Free-form descriptive text (default)
    DrugDescription,
}

impl FieldType {
    /// All field types, in rule-precedence-independent declaration order
    pub const ALL: [FieldType; 6] = [
        FieldType::BasicInfo,
        FieldType::NumberField,
        FieldType::DrugName,
        FieldType::NumberOfSheets,
        FieldType::CompanyName,
        FieldType::DrugDescription,
    ];

    /// The snake_case code used in config files and the keyword store
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::BasicInfo => "basic_info",
            FieldType::NumberField => "number_field",
            FieldType::DrugName => "drug_name",
            FieldType::NumberOfSheets => "number_of_sheets",
            FieldType::CompanyName => "company_name",
            FieldType::DrugDescription => "drug_description",
        }
    }

    /// Parse a snake_case code into a field type
    pub fn from_code(code: &str) -> Option<FieldType> {
        match code {
            "basic_info" => Some(FieldType::BasicInfo),
            "number_field" => Some(FieldType::NumberField),
            "drug_name" => Some(FieldType::DrugName),
            "number_of_sheets" => Some(FieldType::NumberOfSheets),
            "company_name" => Some(FieldType::CompanyName),
            "drug_description" => Some(FieldType::DrugDescription),
            _ => None,
        }
    }

    /// Stable index for per-type keyword storage
    pub(crate) fn index(self) -> usize {
        match self {
            FieldType::BasicInfo => 0,
            FieldType::NumberField => 1,
            FieldType::DrugName => 2,
            FieldType::NumberOfSheets => 3,
            FieldType::CompanyName => 4,
            FieldType::DrugDescription => 5,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::from_code(s).ok_or_else(|| CoreError::UnknownFieldType {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for ft in FieldType::ALL {
            assert_eq!(FieldType::from_code(ft.as_str()), Some(ft));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(FieldType::from_code("drug"), None);
        assert_eq!(FieldType::from_code(""), None);
        assert_eq!(FieldType::from_code("DRUG_NAME"), None);
    }

    #[test]
    fn test_from_str_error_names_input() {
        let err = "warehouse".parse::<FieldType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown field type 'warehouse'");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&FieldType::NumberOfSheets).unwrap();
        assert_eq!(json, "\"number_of_sheets\"");

        let parsed: FieldType = serde_json::from_str("\"basic_info\"").unwrap();
        assert_eq!(parsed, FieldType::BasicInfo);
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut seen = [false; 6];
        for ft in FieldType::ALL {
            assert!(!seen[ft.index()]);
            seen[ft.index()] = true;
        }
    }
}
