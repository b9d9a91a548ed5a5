//! JSON output formatter

use super::RecordFormatter;
use anyhow::Result;
use labelkit_core::ClassifiedLine;
use std::io::Write;

/// JSON formatter - outputs classified lines as a pretty-printed array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<ClassifiedLine>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> RecordFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &ClassifiedLine) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
