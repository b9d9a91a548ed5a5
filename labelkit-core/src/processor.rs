//! High-level processing facade
//!
//! Bundles a keyword snapshot and a font scheme so callers that handle
//! whole label files do not thread both through every call. The processor
//! is cheap to clone and safe to share across threads; all underlying
//! operations are pure.

use crate::classify;
use crate::config::KeywordConfig;
use crate::error::Result;
use crate::field_type::FieldType;
use crate::keywords::KeywordList;
use crate::script::{self, FontRun, FontScheme, TextSegment};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Batch size at which [`LabelProcessor::classify_batch`] fans out over
/// rayon when the `parallel` feature is enabled
pub(crate) const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// One classified line of label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// 1-based line number in the source text
    pub line: usize,
    /// The line's text, trimmed
    pub text: String,
    /// The assigned field type
    pub field_type: FieldType,
}

/// Classifier and segmenter bound to one keyword snapshot and font scheme.
#[derive(Debug, Clone)]
pub struct LabelProcessor {
    keywords: KeywordList,
    fonts: FontScheme,
    parallel_threshold: usize,
}

impl LabelProcessor {
    /// Create a processor with default fonts
    pub fn new(keywords: KeywordList) -> Self {
        Self::builder().keywords(keywords).build()
    }

    /// Create a builder
    pub fn builder() -> LabelProcessorBuilder {
        LabelProcessorBuilder::default()
    }

    /// Classify one line of label text
    pub fn classify(&self, text: &str) -> FieldType {
        classify::classify(text, &self.keywords)
    }

    /// Classify a batch of lines, preserving input order.
    ///
    /// With the `parallel` feature, batches at or above the configured
    /// threshold are classified on the rayon thread pool; the result
    /// order is unchanged either way.
    pub fn classify_batch<T>(&self, texts: &[T]) -> Vec<FieldType>
    where
        T: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if texts.len() >= self.parallel_threshold {
                use rayon::prelude::*;
                return texts
                    .par_iter()
                    .map(|text| classify::classify(text.as_ref(), &self.keywords))
                    .collect();
            }
        }

        classify::classify_batch(texts, &self.keywords)
    }

    /// Partition text into maximal same-script runs
    pub fn segment(&self, text: &str) -> Vec<TextSegment> {
        script::segment(text)
    }

    /// Segment text and resolve each run's font against the scheme
    pub fn font_runs(&self, text: &str) -> Vec<FontRun> {
        script::font_runs(text, &self.fonts)
    }

    /// Classify every non-blank line of a text blob.
    ///
    /// Blank lines are skipped; surviving records keep their original
    /// 1-based line numbers.
    pub fn process_lines(&self, text: &str) -> Vec<ClassifiedLine> {
        text.lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return None;
                }
                Some(ClassifiedLine {
                    line: idx + 1,
                    text: trimmed.to_string(),
                    field_type: self.classify(trimmed),
                })
            })
            .collect()
    }

    /// The keyword snapshot in use
    pub fn keywords(&self) -> &KeywordList {
        &self.keywords
    }

    /// The font scheme in use
    pub fn fonts(&self) -> &FontScheme {
        &self.fonts
    }
}

/// Builder for [`LabelProcessor`].
#[derive(Debug, Clone)]
pub struct LabelProcessorBuilder {
    keywords: KeywordList,
    fonts: FontScheme,
    parallel_threshold: usize,
}

impl Default for LabelProcessorBuilder {
    fn default() -> Self {
        Self {
            keywords: KeywordList::new(),
            fonts: FontScheme::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl LabelProcessorBuilder {
    /// Use an already-built keyword list
    pub fn keywords(mut self, keywords: KeywordList) -> Self {
        self.keywords = keywords;
        self
    }

    /// Load keywords from a TOML config file
    pub fn keywords_from_path(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.keywords = KeywordConfig::load(path)?.into_keyword_list();
        Ok(self)
    }

    /// Use a specific font scheme
    pub fn fonts(mut self, fonts: FontScheme) -> Self {
        self.fonts = fonts;
        self
    }

    /// Batch size at which classification fans out over rayon
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Build the processor
    pub fn build(self) -> LabelProcessor {
        LabelProcessor {
            keywords: self.keywords,
            fonts: self.fonts,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptClass;

    fn processor() -> LabelProcessor {
        LabelProcessor::new(KeywordList::from_grouped([
            (FieldType::DrugName, vec!["Paracetamol"]),
            (FieldType::NumberField, vec!["Lot No"]),
        ]))
    }

    #[test]
    fn test_classify_delegates_to_core() {
        let p = processor();
        assert_eq!(p.classify("Paracetamol 500mg"), FieldType::DrugName);
        assert_eq!(p.classify("Lot No:"), FieldType::NumberField);
    }

    #[test]
    fn test_classify_batch_matches_sequential() {
        let p = processor();
        let lines = ["", "BG1", "Made in USA:", "Paracetamol"];
        let batch = p.classify_batch(&lines);
        let sequential: Vec<FieldType> = lines.iter().map(|l| p.classify(l)).collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_classify_batch_parallel_preserves_order() {
        let p = LabelProcessor::builder()
            .keywords(KeywordList::new())
            .parallel_threshold(1)
            .build();

        let lines: Vec<String> = (0..100)
            .map(|i| if i % 2 == 0 { format!("BG{i}") } else { format!("line {i}:") })
            .collect();
        let result = p.classify_batch(&lines);

        for (i, field_type) in result.iter().enumerate() {
            let expected = if i % 2 == 0 {
                FieldType::DrugName
            } else {
                FieldType::BasicInfo
            };
            assert_eq!(*field_type, expected, "line {i}");
        }
    }

    #[test]
    fn test_process_lines_skips_blanks_and_keeps_numbers() {
        let p = processor();
        let records = p.process_lines("Paracetamol\n\n   \nLot No:\n");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[0].field_type, FieldType::DrugName);
        assert_eq!(records[1].line, 4);
        assert_eq!(records[1].field_type, FieldType::NumberField);
    }

    #[test]
    fn test_font_runs_use_configured_scheme() {
        let p = LabelProcessor::builder()
            .fonts(FontScheme::new("NotoSansCJK", "Helvetica"))
            .build();

        let runs = p.font_runs("药 a");
        assert_eq!(runs[0].font, "NotoSansCJK");
        assert_eq!(runs[2].font, "Helvetica");
        assert_eq!(runs[0].script, ScriptClass::Primary);
    }

    #[test]
    fn test_builder_loads_keywords_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("kw.toml");
        std::fs::write(&path, "[keywords]\ncompany_name = [\"ACME Corp\"]\n").unwrap();

        let p = LabelProcessor::builder()
            .keywords_from_path(&path)
            .unwrap()
            .build();
        assert_eq!(p.classify("ACME Corp Ltd."), FieldType::CompanyName);
    }
}
