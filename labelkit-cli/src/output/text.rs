//! Plain text output formatter

use super::RecordFormatter;
use anyhow::Result;
use labelkit_core::ClassifiedLine;
use std::io::{self, Write};

/// Plain text formatter - one `field_type<TAB>text` record per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RecordFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &ClassifiedLine) -> Result<()> {
        writeln!(self.writer, "{}\t{}", record.field_type, record.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
