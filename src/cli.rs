use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "layout-guard")]
#[command(author, version, about = "Validate the structural layout of generated HTML pages")]
#[command(long_about = "A tool to validate the structural layout of generated HTML pages \
    against per-pattern rules.\n\n\
    Rule violations are advisory: they are printed to stdout and do not affect the exit status.\n\n\
    Exit codes:\n  \
    0 - Run completed (violations, if any, were reported)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Path to configuration file (built-in defaults when absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory to scan for HTML files
    #[arg(short, long, default_value = "_site")]
    pub source: PathBuf,

    /// Increase output verbosity (-v prints each file, -vv also each rule)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
