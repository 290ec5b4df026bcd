use std::path::PathBuf;

use clap::Parser;
use ldiff_render::OutputFormat;

/// Marker for reading an input from stdin.
pub const STDIN: &str = "-";

#[derive(Parser)]
#[command(
    name = "ldiff",
    about = "Compare two texts line by line, aligned by position",
    version,
)]
pub struct Cli {
    /// Left (original) input file, or `-` for stdin
    pub left: String,

    /// Right (modified) input file, or `-` for stdin
    pub right: String,

    /// Lower-case both texts before comparing
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Collapse all whitespace, line breaks included, into single spaces
    #[arg(short = 'w', long)]
    pub ignore_whitespace: bool,

    /// Output format
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Disable colored text output
    #[arg(long)]
    pub no_color: bool,

    /// Print the addition/removal summary after the entries
    #[arg(long)]
    pub stats: bool,

    /// Exit with status 1 when the inputs differ
    #[arg(long)]
    pub exit_code: bool,

    /// Configuration file (defaults to ./ldiff.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
