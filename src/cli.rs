use std::path::PathBuf;

use clap::Parser;

/// Command line for `jakt-new`.
#[derive(Parser, Debug)]
#[command(name = "jakt-new", version, about = "Create a new jakt project")]
pub struct Cli {
    /// Name of the project; also used as the directory and executable name.
    pub name: String,
    /// Create the project relative to this directory instead of the current one.
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// Report what would be created without touching the disk.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
