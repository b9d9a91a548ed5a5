//! Script-aware text segmentation
//!
//! A PDF text renderer assigns one font per contiguous run of text. Mixed
//! label lines ("对乙酰氨基酚 500mg") therefore need to be split wherever
//! the font class changes, and only there: emitting one run per character
//! would be correct but would defeat ligatures and kerning within a script
//! and multiply the renderer's object count.

mod blocks;
mod font;

pub use blocks::{classify_char, ScriptClass};
pub use font::{font_runs, FontRun, FontScheme};

use serde::{Deserialize, Serialize};

/// A maximal run of characters sharing one [`ScriptClass`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    /// The run's text; never empty
    pub text: String,
    /// The font class shared by every character in the run
    pub script: ScriptClass,
}

/// Partition `text` into maximal same-script runs.
///
/// Guarantees:
/// - concatenating the segment texts in order reproduces `text` exactly;
/// - no two adjacent segments share a [`ScriptClass`];
/// - the empty string yields an empty vector, and no input panics.
pub fn segment(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_class: Option<ScriptClass> = None;

    for ch in text.chars() {
        let class = classify_char(ch);
        match current_class {
            Some(open) if open == class => current.push(ch),
            Some(open) => {
                segments.push(TextSegment {
                    text: std::mem::take(&mut current),
                    script: open,
                });
                current.push(ch);
                current_class = Some(class);
            }
            None => {
                current.push(ch);
                current_class = Some(class);
            }
        }
    }

    if let Some(open) = current_class {
        segments.push(TextSegment {
            text: current,
            script: open,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(text: &str) -> Vec<ScriptClass> {
        segment(text).into_iter().map(|s| s.script).collect()
    }

    #[test]
    fn test_empty_string_yields_no_segments() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_single_script_is_one_segment() {
        let segments = segment("Paracetamol");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Paracetamol");
        assert_eq!(segments[0].script, ScriptClass::Secondary);
    }

    #[test]
    fn test_mixed_cjk_and_latin() {
        let segments = segment("对乙酰氨基酚 500mg");
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["对乙酰氨基酚", " ", "500mg"]);
        assert_eq!(
            classes("对乙酰氨基酚 500mg"),
            [
                ScriptClass::Primary,
                ScriptClass::Punctuation,
                ScriptClass::Secondary,
            ]
        );
    }

    #[test]
    fn test_round_trip_reconstruction() {
        let inputs = [
            "Lot No: XX-123",
            "主要成分：对乙酰氨基酚",
            "الاسم التجاري Paracetamol",
            "ยาพาราเซตามอล 500 มก.",
            "é😀ü",
        ];
        for input in inputs {
            let joined: String = segment(input).into_iter().map(|s| s.text).collect();
            assert_eq!(joined, input);
        }
    }

    #[test]
    fn test_no_adjacent_segments_share_class() {
        let segments = segment("BG-X 对乙酰氨基酚 (500mg) 錠剤");
        for pair in segments.windows(2) {
            assert_ne!(pair[0].script, pair[1].script);
        }
    }

    #[test]
    fn test_segments_never_empty() {
        for input in ["a中b", " ", "。。。", "mixed 文本 here"] {
            for seg in segment(input) {
                assert!(!seg.text.is_empty());
            }
        }
    }

    #[test]
    fn test_digits_merge_with_latin_letters() {
        // Digits and ASCII letters share the secondary class, so "500mg"
        // stays one run
        let segments = segment("500mg");
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_fullwidth_colon_is_punctuation_run() {
        let segments = segment("成分：值");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].text, "：");
        assert_eq!(segments[1].script, ScriptClass::Punctuation);
    }
}
