//! svga11y CLI - Command-line interface for the SVG accessibility checker
//!
//! Analyzes SVG documents against a catalog of accessibility rules and
//! prints a scored text report.

mod commands;

use clap::Parser;
use commands::Commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "svga11y",
    author,
    version,
    about = "Accessibility checker for SVG documents",
    long_about = "svga11y evaluates SVG documents against a battery of accessibility\n\
                  rules (titles, descriptions, ARIA labeling, contrast, keyboard\n\
                  focus, animation control) and reports a pass/fail verdict with a\n\
                  score per file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::Init(args) => args.run(),
        Commands::Explain(args) => args.run(),
    }
}
