//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod classify;
pub mod generate_config;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify label lines into field types
    Classify(classify::ClassifyArgs),

    /// Split text into script runs with resolved fonts
    Segment(segment::SegmentArgs),

    /// Validate a keyword configuration file
    Validate(validate::ValidateArgs),

    /// Generate a starter keyword configuration
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Classify(args) => args.execute(),
            Commands::Segment(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging from the verbosity count unless quieted
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .ok();
}
