//! Segment command implementation

use crate::input::{resolve_patterns, FileReader};
use anyhow::{Context, Result};
use clap::Args;
use labelkit_core::{font_runs, FontRun, FontScheme};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Text to segment directly
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob; `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Font used for primary-script and punctuation runs
    #[arg(long, value_name = "NAME", default_value = "STHeiti")]
    pub primary_font: String,

    /// Font used for Latin runs
    #[arg(long, value_name = "NAME", default_value = "Arial")]
    pub secondary_font: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: SegmentFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported segment output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SegmentFormat {
    /// One `script<TAB>font<TAB>text` record per run
    Text,
    /// JSON array of lines with their runs
    Json,
}

/// One input line together with its font runs
#[derive(Debug, Serialize)]
struct SegmentedLine {
    line: usize,
    text: String,
    runs: Vec<FontRun>,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        let scheme = FontScheme::new(&self.primary_font, &self.secondary_font);
        log::debug!("Font scheme: {scheme:?}");

        let text = self.read_input()?;
        let lines: Vec<SegmentedLine> = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| SegmentedLine {
                line: idx + 1,
                text: line.to_string(),
                runs: font_runs(line, &scheme),
            })
            .collect();

        let run_count: usize = lines.iter().map(|l| l.runs.len()).sum();
        log::info!("Segmented {} lines into {run_count} runs", lines.len());

        let mut writer = self.create_writer()?;
        match self.format {
            SegmentFormat::Text => {
                for line in &lines {
                    for run in &line.runs {
                        writeln!(writer, "{}\t{}\t{}", run.script, run.font, run.text)?;
                    }
                }
            }
            SegmentFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &lines)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;

        Ok(())
    }

    /// Gather input text from the flag, files, or stdin
    fn read_input(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        if self.input.is_empty() || (self.input.len() == 1 && self.input[0] == "-") {
            return FileReader::read_stdin();
        }

        let files = resolve_patterns(&self.input)?;
        let mut text = String::new();
        for path in files {
            text.push_str(&FileReader::read_text(&path)?);
            if !text.ends_with('\n') {
                text.push('\n');
            }
        }
        Ok(text)
    }

    fn create_writer(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        })
    }
}
