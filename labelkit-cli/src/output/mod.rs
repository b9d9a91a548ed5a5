//! Output formatting module

use anyhow::Result;
use labelkit_core::ClassifiedLine;

/// Trait for classification record formatters
pub trait RecordFormatter {
    /// Format and output a single classified line
    fn format_record(&mut self, record: &ClassifiedLine) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
