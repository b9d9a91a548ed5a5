//! Per-category keyword lists used as classification evidence

use crate::field_type::FieldType;
use serde::{Deserialize, Serialize};

/// One row of the external keyword store.
///
/// Mirrors the `FieldTypeKeyword` table: a keyword string, the category it
/// is evidence for, and whether the row is currently active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// The keyword text
    pub keyword: String,
    /// The category the keyword belongs to
    pub field_type: FieldType,
    /// Inactive rows are ignored when building a [`KeywordList`]
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Immutable snapshot of per-category keyword lists.
///
/// Construction trims keywords, drops blanks, and deduplicates
/// case-insensitively within each category. The snapshot is treated as an
/// immutable value for the duration of a classification batch; callers
/// re-fetch from the keyword store between batches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordList {
    lists: [Vec<String>; 6],
}

impl KeywordList {
    /// Create an empty keyword list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from store rows, skipping inactive ones
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = KeywordRecord>,
    {
        let mut list = Self::new();
        for record in records {
            if record.is_active {
                list.insert(record.field_type, record.keyword);
            }
        }
        list
    }

    /// Build from already-grouped keyword lists
    pub fn from_grouped<I, K>(groups: I) -> Self
    where
        I: IntoIterator<Item = (FieldType, Vec<K>)>,
        K: Into<String>,
    {
        let mut list = Self::new();
        for (field_type, keywords) in groups {
            for keyword in keywords {
                list.insert(field_type, keyword);
            }
        }
        list
    }

    /// Insert one keyword into a category.
    ///
    /// Returns `false` when the keyword was dropped as blank or as a
    /// case-insensitive duplicate of an existing entry.
    pub fn insert(&mut self, field_type: FieldType, keyword: impl Into<String>) -> bool {
        let keyword = keyword.into();
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            return false;
        }

        let list = &mut self.lists[field_type.index()];
        let lowered = trimmed.to_lowercase();
        if list.iter().any(|existing| existing.to_lowercase() == lowered) {
            return false;
        }

        list.push(trimmed.to_string());
        true
    }

    /// Keywords registered for one category
    pub fn get(&self, field_type: FieldType) -> &[String] {
        &self.lists[field_type.index()]
    }

    /// Number of keywords in one category
    pub fn len(&self, field_type: FieldType) -> usize {
        self.lists[field_type.index()].len()
    }

    /// Total keyword count across all categories
    pub fn total(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Whether no category has any keywords
    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_trims_and_skips_blank() {
        let mut list = KeywordList::new();
        assert!(list.insert(FieldType::DrugName, "  Paracetamol  "));
        assert!(!list.insert(FieldType::DrugName, "   "));
        assert!(!list.insert(FieldType::DrugName, ""));

        assert_eq!(list.get(FieldType::DrugName), ["Paracetamol"]);
    }

    #[test]
    fn test_insert_dedups_case_insensitively() {
        let mut list = KeywordList::new();
        assert!(list.insert(FieldType::CompanyName, "ACME Corp"));
        assert!(!list.insert(FieldType::CompanyName, "acme corp"));
        assert!(!list.insert(FieldType::CompanyName, "ACME CORP "));

        assert_eq!(list.len(FieldType::CompanyName), 1);
    }

    #[test]
    fn test_same_keyword_allowed_in_different_categories() {
        let mut list = KeywordList::new();
        assert!(list.insert(FieldType::DrugName, "Aspirin"));
        assert!(list.insert(FieldType::CompanyName, "Aspirin"));
        assert_eq!(list.total(), 2);
    }

    #[test]
    fn test_from_records_filters_inactive() {
        let records = vec![
            KeywordRecord {
                keyword: "Lot No".to_string(),
                field_type: FieldType::NumberField,
                is_active: true,
            },
            KeywordRecord {
                keyword: "Retired".to_string(),
                field_type: FieldType::NumberField,
                is_active: false,
            },
        ];

        let list = KeywordList::from_records(records);
        assert_eq!(list.get(FieldType::NumberField), ["Lot No"]);
    }

    #[test]
    fn test_from_grouped() {
        let list = KeywordList::from_grouped([
            (FieldType::DrugName, vec!["BGX", "Paracetamol"]),
            (FieldType::CompanyName, vec!["ACME Corp"]),
        ]);

        assert_eq!(list.len(FieldType::DrugName), 2);
        assert_eq!(list.len(FieldType::CompanyName), 1);
        assert!(list.get(FieldType::NumberField).is_empty());
    }

    #[test]
    fn test_record_is_active_defaults_true() {
        let record: KeywordRecord =
            serde_json::from_str(r#"{"keyword": "Exp. Date", "field_type": "number_field"}"#)
                .unwrap();
        assert!(record.is_active);
    }

    #[test]
    fn test_empty_list() {
        let list = KeywordList::new();
        assert!(list.is_empty());
        assert_eq!(list.total(), 0);
        for ft in FieldType::ALL {
            assert!(list.get(ft).is_empty());
        }
    }
}
