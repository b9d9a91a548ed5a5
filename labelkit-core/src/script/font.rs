//! Font assignment for segmented runs
//!
//! Font files are registered by the host application at startup; the core
//! only deals in font names. Punctuation runs use the primary font, whose
//! bundled glyphs cover the common punctuation and space characters.

use super::{segment, ScriptClass};
use serde::{Deserialize, Serialize};

/// Font names to resolve each [`ScriptClass`] against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontScheme {
    /// CJK-capable font for primary-script and punctuation runs
    pub primary: String,
    /// Latin font for secondary-script runs
    pub secondary: String,
}

impl Default for FontScheme {
    fn default() -> Self {
        Self {
            primary: "STHeiti".to_string(),
            secondary: "Arial".to_string(),
        }
    }
}

impl FontScheme {
    /// Create a scheme from explicit font names
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// The font name used for a script class
    pub fn font_for(&self, script: ScriptClass) -> &str {
        match script {
            ScriptClass::Primary | ScriptClass::Punctuation => &self.primary,
            ScriptClass::Secondary => &self.secondary,
        }
    }
}

/// A segment paired with its resolved font, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRun {
    /// The run's text
    pub text: String,
    /// The script class the run was classified as
    pub script: ScriptClass,
    /// The resolved font name
    pub font: String,
}

/// Segment `text` and resolve each run's font against `scheme`.
pub fn font_runs(text: &str, scheme: &FontScheme) -> Vec<FontRun> {
    segment(text)
        .into_iter()
        .map(|seg| FontRun {
            font: scheme.font_for(seg.script).to_string(),
            text: seg.text,
            script: seg.script,
        })
        .collect()
}
