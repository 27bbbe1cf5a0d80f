//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Audit project descriptor files for missing, dead, or duplicate references
#[derive(Parser, Debug)]
#[command(name = "projref")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Descriptor file, or directory to search for descriptors
    /// (defaults to the current working directory)
    pub path: Option<PathBuf>,

    /// Write the report to a temp file and open it after scanning
    #[arg(short = 'f', long = "file")]
    pub to_file: bool,

    /// Ignore pattern (plain token or regular expression); repeatable
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Descriptor extension to search for in directory mode
    #[arg(short, long, default_value = "csproj", value_name = "EXT")]
    pub extension: String,

    /// Emit reports as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
