//! Unicode block tables for script classification
//!
//! Label text is rendered with one font per contiguous script run, so every
//! code point is bucketed into one of three font classes. Classification
//! walks an ordered block table; the first containing block wins and
//! anything outside every block falls back to [`ScriptClass::Punctuation`].

use serde::{Deserialize, Serialize};

/// Font class of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptClass {
    /// Non-Latin scripts rendered with the CJK-capable primary font
    Primary,
    /// ASCII letters/digits and extended Latin, rendered with the Latin font
    Secondary,
    /// Everything else; rendered with the primary font, whose glyph set
    /// covers the common punctuation and space characters
    Punctuation,
}

impl ScriptClass {
    /// The snake_case code used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptClass::Primary => "primary",
            ScriptClass::Secondary => "secondary",
            ScriptClass::Punctuation => "punctuation",
        }
    }
}

impl std::fmt::Display for ScriptClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A script class plus the inclusive code-point blocks it claims
struct ScriptBlocks {
    class: ScriptClass,
    blocks: &'static [[u32; 2]],
}

/// Ordered classification table.
///
/// Primary entries must stay ahead of the secondary ones: the Vietnamese
/// blocks overlap Latin Extended-A/B and win only by position.
const SCRIPT_TABLE: &[ScriptBlocks] = &[
    ScriptBlocks {
        // Chinese, Japanese kanji, Korean hanja
        class: ScriptClass::Primary,
        blocks: &[
            [0x4E00, 0x9FFF],   // CJK Unified Ideographs
            [0x3400, 0x4DBF],   // CJK Unified Ideographs Extension A
            [0xF900, 0xFAFF],   // CJK Compatibility Ideographs
            [0x20000, 0x2A6DF], // CJK Unified Ideographs Extension B
        ],
    },
    ScriptBlocks {
        // Japanese kana
        class: ScriptClass::Primary,
        blocks: &[
            [0x3040, 0x309F], // Hiragana
            [0x30A0, 0x30FF], // Katakana
            [0x31F0, 0x31FF], // Katakana Phonetic Extensions
        ],
    },
    ScriptBlocks {
        // Korean hangul
        class: ScriptClass::Primary,
        blocks: &[
            [0xAC00, 0xD7AF], // Hangul Syllables
            [0x1100, 0x11FF], // Hangul Jamo
            [0x3130, 0x318F], // Hangul Compatibility Jamo
        ],
    },
    ScriptBlocks {
        class: ScriptClass::Primary,
        blocks: &[[0x0E00, 0x0E7F]], // Thai
    },
    ScriptBlocks {
        // Vietnamese additions to Latin. Overlaps Latin Extended-A/B, so
        // this entry must precede the Secondary table entries.
        class: ScriptClass::Primary,
        blocks: &[
            [0x0102, 0x0103], // Ă ă
            [0x0110, 0x0111], // Đ đ
            [0x01A0, 0x01A1], // Ơ ơ
            [0x01AF, 0x01B0], // Ư ư
            [0x1EA0, 0x1EF9], // Latin Extended Additional, Vietnamese section
        ],
    },
    ScriptBlocks {
        // Indic scripts
        class: ScriptClass::Primary,
        blocks: &[
            [0x0900, 0x097F], // Devanagari
            [0x0980, 0x09FF], // Bengali
            [0x0A00, 0x0A7F], // Gurmukhi
            [0x0A80, 0x0AFF], // Gujarati
            [0x0B00, 0x0B7F], // Oriya
            [0x0B80, 0x0BFF], // Tamil
            [0x0C00, 0x0C7F], // Telugu
            [0x0C80, 0x0CFF], // Kannada
            [0x0D00, 0x0D7F], // Malayalam
            [0x0D80, 0x0DFF], // Sinhala
        ],
    },
    ScriptBlocks {
        // Arabic, including the presentation forms produced by shaping
        class: ScriptClass::Primary,
        blocks: &[
            [0x0600, 0x06FF], // Arabic
            [0x0750, 0x077F], // Arabic Supplement
            [0x08A0, 0x08FF], // Arabic Extended-A
            [0xFB50, 0xFDFF], // Arabic Presentation Forms-A
            [0xFE70, 0xFEFF], // Arabic Presentation Forms-B
        ],
    },
    ScriptBlocks {
        class: ScriptClass::Primary,
        blocks: &[
            [0x0590, 0x05FF], // Hebrew
            [0xFB1D, 0xFB4F], // Hebrew presentation forms
        ],
    },
    ScriptBlocks {
        class: ScriptClass::Primary,
        blocks: &[
            [0x10A0, 0x10FF], // Georgian
            [0x2D00, 0x2D2F], // Georgian Supplement
        ],
    },
    ScriptBlocks {
        // Latin letters and digits
        class: ScriptClass::Secondary,
        blocks: &[
            [0x0030, 0x0039], // 0-9
            [0x0041, 0x005A], // A-Z
            [0x0061, 0x007A], // a-z
            [0x0100, 0x017F], // Latin Extended-A
            [0x0180, 0x024F], // Latin Extended-B
            [0x2C60, 0x2C7F], // Latin Extended-C
        ],
    },
];

/// Classify one code point into its font class.
///
/// Total function: code points outside every block, including unassigned
/// and symbol characters, classify as [`ScriptClass::Punctuation`].
pub fn classify_char(ch: char) -> ScriptClass {
    let cp = ch as u32;
    for entry in SCRIPT_TABLE {
        for [start, end] in entry.blocks {
            if (*start..=*end).contains(&cp) {
                return entry.class;
            }
        }
    }
    ScriptClass::Punctuation
}
