//! Markdown output formatter

use super::RecordFormatter;
use anyhow::Result;
use labelkit_core::ClassifiedLine;
use std::io::Write;

/// Markdown formatter - outputs classified lines as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
        }
    }
}

impl<W: Write> RecordFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &ClassifiedLine) -> Result<()> {
        if self.record_count == 0 {
            writeln!(self.writer, "| Line | Field type | Text |")?;
            writeln!(self.writer, "|------|------------|------|")?;
        }
        self.record_count += 1;

        writeln!(
            self.writer,
            "| {} | {} | {} |",
            record.line,
            record.field_type,
            record.text.replace('|', "\\|"),
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "*Total lines: {}*", self.record_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
