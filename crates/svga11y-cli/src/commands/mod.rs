//! CLI command implementations

pub mod check;
pub mod explain;
pub mod init;

pub use check::CheckArgs;
pub use explain::ExplainArgs;
pub use init::InitArgs;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an SVG file or a directory of SVG files
    Check(CheckArgs),

    /// Initialize svga11y configuration in the current directory
    Init(InitArgs),

    /// Show the description and status of a specific rule
    Explain(ExplainArgs),
}
