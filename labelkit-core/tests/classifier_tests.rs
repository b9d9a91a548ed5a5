//! Integration tests for field-type classification

use labelkit_core::{classify, classify_batch, fuzzy_match, FieldType, KeywordList};

fn keywords() -> KeywordList {
    KeywordList::from_grouped([
        (FieldType::DrugName, vec!["ACME Tablet"]),
        (FieldType::NumberOfSheets, vec!["sheets"]),
        (FieldType::CompanyName, vec!["ACME Corp:"]),
        (FieldType::NumberField, vec!["Lot No"]),
    ])
}

#[test]
fn blank_input_defaults_for_any_keyword_list() {
    for kw in [KeywordList::new(), keywords()] {
        assert_eq!(classify("", &kw), FieldType::DrugDescription);
        assert_eq!(classify("   ", &kw), FieldType::DrugDescription);
    }
}

#[test]
fn prefix_rule_fires_before_any_keyword_check() {
    // "BGX123" carries no keyword evidence at all; the bg prefix alone
    // decides before the other categories are consulted
    assert_eq!(classify("BGX123", &keywords()), FieldType::DrugName);
}

#[test]
fn sheet_rule_precedes_company_keywords() {
    let mut kw = keywords();
    kw.insert(FieldType::CompanyName, "Contains");
    assert_eq!(
        classify("Contains XX tablets", &kw),
        FieldType::NumberOfSheets
    );
}

#[test]
fn colon_branch_selects_between_number_field_and_basic_info() {
    let kw = keywords();
    assert_eq!(classify("Lot No:", &kw), FieldType::NumberField);
    assert_eq!(classify("Random Label:", &kw), FieldType::BasicInfo);
}

#[test]
fn company_keyword_with_trailing_colon_still_matches_plain_text() {
    // The stored keyword carries a colon; the label line does not
    assert_eq!(
        classify("Distributed by ACME Corp", &keywords()),
        FieldType::CompanyName
    );
}

#[test]
fn fuzzy_match_directionality() {
    // Substring containment runs text-contains-keyword only
    assert!(fuzzy_match("Manufactured by: ACME Corp", "ACME Corp"));
    assert!(fuzzy_match("acme-corp", "ACME CORP"));
    assert!(!fuzzy_match("Pharma", "Pharmaceutical"));
    assert!(fuzzy_match("Pharmaceutical", "Pharma"));
}

#[test]
fn batch_classification_matches_single_item_contract() {
    let kw = keywords();
    let batch = classify_batch(&["", "BG1", "Made in USA:"], &kw);
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[0], classify("", &kw));
    assert_eq!(batch[1], classify("BG1", &kw));
    assert_eq!(batch[2], classify("Made in USA:", &kw));
    assert_eq!(
        batch,
        vec![
            FieldType::DrugDescription,
            FieldType::DrugName,
            FieldType::BasicInfo,
        ]
    );
}

#[test]
fn classification_is_deterministic() {
    let kw = keywords();
    let samples = [
        "BGB-283 capsules",
        "Contains XX tablets",
        "ACME Corp",
        "Lot No:",
        "Keep out of reach of children",
    ];
    for text in samples {
        let first = classify(text, &kw);
        for _ in 0..3 {
            assert_eq!(classify(text, &kw), first);
        }
    }
}

#[test]
fn pathological_keywords_never_panic() {
    let mut kw = KeywordList::new();
    kw.insert(FieldType::CompanyName, "((([[[***");
    kw.insert(FieldType::CompanyName, "a\\b+c");
    kw.insert(FieldType::NumberField, ")(");

    // No panic, and ordinary text still classifies
    assert_eq!(classify("Ordinary line", &kw), FieldType::DrugDescription);
    assert_eq!(classify("Something:", &kw), FieldType::BasicInfo);
}
