use crate::config::{RunConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "numcsv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract whitespace-delimited integers from text files into CSV rows")]
#[command(
    long_about = "NumCsv scans a directory for .txt files, pulls every whitespace-delimited \
                       all-digit token from each file, and writes each file's numbers as a \
                       single comma-separated row in results/<name>.csv. Files that produce \
                       no numbers produce no output file."
)]
#[command(after_help = "EXAMPLES:\n  \
    numcsv\n  \
    numcsv grade_sheets\n  \
    numcsv grade_sheets --output extracted --verbose\n  \
    numcsv grade_sheets --output-format json --quiet")]
pub struct Cli {
    /// Directory containing the .txt files to process
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory to write CSV rows into (created on demand)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Output format for console results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn build_config(&self) -> RunConfig {
        RunConfig::new()
            .with_input_dir(self.input_dir.clone())
            .with_output_dir(self.output.clone())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
