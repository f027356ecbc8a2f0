//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Map dependencies and class structure across codebases
#[derive(Parser, Debug)]
#[command(name = "repoatlas")]
#[command(about = "Map dependencies and class structure across codebases")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a repository and report its dependency graph and classes
    Analyze {
        /// Path to the repository root
        path: PathBuf,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Extra directory or file names to ignore (can be repeated)
        #[arg(long)]
        ignore: Vec<String>,

        /// Lines scanned after a class header when collecting methods
        #[arg(long)]
        scan_window: Option<usize>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}
