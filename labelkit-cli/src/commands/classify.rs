//! Classify command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, RecordFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use labelkit_core::{ClassifiedLine, KeywordConfig, LabelProcessor};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Input files or patterns (supports glob; `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Keyword configuration file
    #[arg(short, long, value_name = "FILE")]
    pub keywords: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Classify input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `field_type<TAB>text` record per line
    Text,
    /// JSON array of classified lines
    Json,
    /// Markdown table
    Markdown,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting label classification");
        log::debug!("Arguments: {:?}", self);

        let processor = self.build_processor()?;
        let batches = self.classify_inputs(&processor)?;

        let mut formatter = self.create_formatter()?;
        for (_, records) in &batches {
            for record in records {
                formatter.format_record(record)?;
            }
        }
        formatter.finish()?;

        let total: usize = batches.iter().map(|(_, records)| records.len()).sum();
        log::info!("Classified {total} lines from {} input(s)", batches.len());

        Ok(())
    }

    /// Build the processor from the optional keyword config
    fn build_processor(&self) -> Result<LabelProcessor> {
        let mut builder = LabelProcessor::builder();

        if let Some(path) = &self.keywords {
            let config = KeywordConfig::load(path)
                .map_err(|err| CliError::ConfigError(err.to_string()))?;
            log::info!(
                "Loaded {} keywords from {}",
                config.stats().active,
                path.display()
            );
            builder = builder.keywords(config.into_keyword_list());
        } else {
            log::warn!("No keyword config given; classifying with structural rules only");
        }

        if self.parallel {
            // Fan out even small per-file batches
            builder = builder.parallel_threshold(1);
        }

        Ok(builder.build())
    }

    /// Read and classify every input, in input order
    fn classify_inputs(
        &self,
        processor: &LabelProcessor,
    ) -> Result<Vec<(String, Vec<ClassifiedLine>)>> {
        if self.input.len() == 1 && self.input[0] == "-" {
            let text = FileReader::read_stdin()?;
            return Ok(vec![("<stdin>".to_string(), processor.process_lines(&text))]);
        }

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results: Result<Vec<(String, Vec<ClassifiedLine>)>> = if self.parallel {
            files
                .par_iter()
                .map(|path| {
                    let text = FileReader::read_text(path)?;
                    let records = processor.process_lines(&text);
                    progress.file_completed(&path.display().to_string());
                    Ok((path.display().to_string(), records))
                })
                .collect()
        } else {
            files
                .iter()
                .map(|path| {
                    let text = FileReader::read_text(path)?;
                    let records = processor.process_lines(&text);
                    progress.file_completed(&path.display().to_string());
                    Ok((path.display().to_string(), records))
                })
                .collect()
        };

        progress.finish();
        results
    }

    /// Create the output formatter for the chosen format and destination
    fn create_formatter(&self) -> Result<Box<dyn RecordFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}
