//! Fuzzy keyword matching
//!
//! Keywords in the store are entered by hand and rarely match label text
//! verbatim: colons, separators, and word order differ between markets.
//! [`fuzzy_match`] therefore runs five escalating strategies; any single
//! success counts as a match.

use regex::Regex;
use smallvec::SmallVec;

/// Characters treated as separators when stripping or splitting text
const SEPARATORS: &[char] = &[' ', '(', ')', '.', ',', ':', '-', '_', '[', ']'];

/// Check whether `text` matches `keyword` under any fuzzy strategy.
///
/// Strategies, in order:
/// 1. case-insensitive equality, trailing colons ignored on both sides;
/// 2. case-insensitive substring containment of the keyword in the text,
///    checked with and without trailing colons on either side;
/// 3. containment after stripping all separator characters from both;
/// 4. whole-word boundary match of the keyword (and its colon-stripped
///    variant) inside the text;
/// 5. for multi-word keywords, word-by-word containment in either
///    direction.
///
/// Total over all inputs: a blank text or keyword never matches, and a
/// keyword that defeats regex construction degrades to a non-match for
/// strategy 4 instead of propagating an error.
pub fn fuzzy_match(text: &str, keyword: &str) -> bool {
    let text = text.trim();
    let keyword = keyword.trim();
    if text.is_empty() || keyword.is_empty() {
        return false;
    }

    let text_lower = text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();
    let text_bare = text_lower.trim_end_matches(':');
    let keyword_bare = keyword_lower.trim_end_matches(':');

    // 1. Exact match, trailing colons ignored
    if text_bare == keyword_bare {
        return true;
    }

    // 2. Substring containment, with and without trailing colons
    for t in [text_lower.as_str(), text_bare] {
        for k in [keyword_lower.as_str(), keyword_bare] {
            if t.contains(k) {
                return true;
            }
        }
    }

    // 3. Containment once separators are stripped from both sides
    let text_stripped = strip_separators(&text_lower);
    let keyword_stripped = strip_separators(&keyword_lower);
    if !keyword_stripped.is_empty() && text_stripped.contains(&keyword_stripped) {
        return true;
    }

    // 4. Whole-word boundary match
    if word_boundary_match(&text_lower, &keyword_lower) {
        return true;
    }
    if keyword_bare != keyword_lower && word_boundary_match(&text_lower, keyword_bare) {
        return true;
    }

    // 5. Word-by-word comparison for multi-word keywords
    multi_word_match(&text_lower, keyword_bare)
}

/// Check whether `text` fuzzy-matches any keyword in the list.
///
/// Short-circuits on the first successful match.
pub fn matches_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| fuzzy_match(text, keyword))
}

fn strip_separators(s: &str) -> String {
    s.chars().filter(|ch| !SEPARATORS.contains(ch)).collect()
}

/// Match `keyword` as a whole word inside `text`.
///
/// A keyword whose escaped form still fails to compile is treated as a
/// non-match rather than an error.
fn word_boundary_match(text: &str, keyword: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(_) => false,
    }
}

/// Every keyword word must contain, or be contained in, some text word.
///
/// Only applies to keywords of two or more words; single-word keywords are
/// fully covered by the earlier strategies.
fn multi_word_match(text: &str, keyword: &str) -> bool {
    let keyword_words = split_words(keyword);
    if keyword_words.len() < 2 {
        return false;
    }

    let text_words = split_words(text);
    if text_words.is_empty() {
        return false;
    }

    keyword_words.iter().all(|kw| {
        text_words
            .iter()
            .any(|tw| tw.contains(kw) || kw.contains(tw))
    })
}

fn split_words(s: &str) -> SmallVec<[&str; 8]> {
    s.split(|ch: char| SEPARATORS.contains(&ch))
        .filter(|word| !word.is_empty())
        .collect()
}
