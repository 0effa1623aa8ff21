use std::path::PathBuf;

use clap::Parser;

/// Runs the SNP batch R script inside its container and reports the result.
#[derive(Parser, Debug)]
#[clap(version, author = "ydolev")]
pub struct Opts {
    /// Settings file to load over the built-in defaults
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Exit non-zero when the container fails
    #[clap(long)]
    pub strict: bool,

    /// Print the runtime command line without running it
    #[clap(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr
    #[clap(short, long)]
    pub verbose: bool,
}
