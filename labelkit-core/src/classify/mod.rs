//! Heuristic field-type classification
//!
//! Pharmaceutical labels mix free-form descriptive text with structured
//! fields (codes, quantities, company boilerplate) that are recognisable
//! mainly by fixed vocabularies plus a handful of structural cues: a
//! leading product-code token, a trailing colon, a numeric placeholder
//! pattern. The rule cascade below checks the strongest evidence first;
//! the exact order is load-bearing and changing it changes the outcome on
//! ambiguous inputs.

mod fuzzy;

pub use fuzzy::{fuzzy_match, matches_any};

use crate::field_type::FieldType;
use crate::keywords::KeywordList;

/// Classify one line of label text.
///
/// Total function: any string input, including empty or whitespace-only
/// text, yields exactly one [`FieldType`]. Deterministic for identical
/// `text` and `keywords`.
pub fn classify(text: &str, keywords: &KeywordList) -> FieldType {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return FieldType::DrugDescription;
    }

    let lower = trimmed.to_lowercase();

    // 1. Product-code prefix or a drug-name keyword
    if lower.starts_with("bg") || matches_any(trimmed, keywords.get(FieldType::DrugName)) {
        return FieldType::DrugName;
    }

    // 2. Sheet counts: keyword, "XX"/"XXX" quantity placeholder (case
    //    matters there), or a tablet count
    if matches_any(trimmed, keywords.get(FieldType::NumberOfSheets))
        || trimmed.contains("XX")
        || lower.contains("tablets")
    {
        return FieldType::NumberOfSheets;
    }

    // 3. Company boilerplate
    if matches_any(trimmed, keywords.get(FieldType::CompanyName)) {
        return FieldType::CompanyName;
    }

    // 4. Colon-terminated structured fields. Terminal branch: an
    //    unmatched trailing colon is still a field, just not a numeric one.
    if trimmed.ends_with(':') {
        return if matches_any(trimmed, keywords.get(FieldType::NumberField)) {
            FieldType::NumberField
        } else {
            FieldType::BasicInfo
        };
    }

    FieldType::DrugDescription
}

/// Classify a batch of lines, preserving input order.
pub fn classify_batch<T: AsRef<str>>(texts: &[T], keywords: &KeywordList) -> Vec<FieldType> {
    texts
        .iter()
        .map(|text| classify(text.as_ref(), keywords))
        .collect()
}
