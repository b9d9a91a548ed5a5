//! labelkit command-line entry point

use clap::Parser;
use labelkit_cli::commands::Commands;

/// Field-type classification and script-aware segmentation for
/// multilingual label text
#[derive(Debug, Parser)]
#[command(name = "labelkit", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
