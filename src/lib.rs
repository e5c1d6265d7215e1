pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod ui;
pub mod writer;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::RunConfig;
pub use error::{NumcsvError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{is_all_digits, NumberExtractor};
pub use scanner::{DirectoryScan, SourceFile, TextFileScanner};
pub use ui::{OutputFormatter, OutputMode};
pub use writer::{CsvRowWriter, FileOutcome, FileRecord, RunReport};

use std::time::Instant;

/// Main library interface: drives scanner -> extractor -> writer over one
/// input directory, one file at a time.
pub struct NumCsv {
    config: RunConfig,
    output_formatter: OutputFormatter,
}

impl NumCsv {
    pub fn new(config: RunConfig, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        config.validate()?;
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Ok(Self {
            config,
            output_formatter,
        })
    }

    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.build_config();
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(config, output_mode, cli_args.verbose, cli_args.quiet)
    }

    /// Runs the full pipeline. A missing or invalid input directory is the
    /// only error that ends the run early; everything that goes wrong with an
    /// individual file is reported, recorded in the run report, and skipped.
    pub fn run(&self) -> Result<RunReport> {
        let start = Instant::now();

        self.output_formatter
            .start_operation("Scanning for text files");

        let scanner = TextFileScanner::new(self.config.text_suffix.clone());
        let scan = scanner.scan_directory(&self.config.input_dir)?;

        // Entries the listing could not read are diagnosed, then the scan
        // result stands as-is.
        for diagnostic in &scan.skipped {
            self.output_formatter.error(diagnostic);
        }

        let sources = scan.sources;

        self.output_formatter
            .info(&format!("Found {} text files", sources.len()));

        let extractor = NumberExtractor::new();
        let writer = CsvRowWriter::new(self.config.output_dir.clone());
        let mut report = RunReport::new(&self.config, sources.len());

        for source in &sources {
            self.process_file(source, &extractor, &writer, &mut report);
        }

        report.finish(start.elapsed());
        Ok(report)
    }

    fn process_file(
        &self,
        source: &SourceFile,
        extractor: &NumberExtractor,
        writer: &CsvRowWriter,
        report: &mut RunReport,
    ) {
        let numbers = match extractor.extract(&source.path) {
            Ok(numbers) => numbers,
            Err(err) => {
                self.output_formatter.error(&format!(
                    "Failed to read {}: {}",
                    source.display_path(),
                    err.user_message()
                ));
                report.record_failed(source, err.user_message());
                return;
            }
        };

        // Files that yield no numbers produce no output file.
        if numbers.is_empty() {
            self.output_formatter
                .info(&format!("No numbers in {}, skipping", source.file_name));
            report.record_empty(source);
            return;
        }

        match writer.write_row(&source.base_name, &numbers) {
            Ok(target) => {
                self.output_formatter.debug(&format!(
                    "Wrote {} numbers to {}",
                    numbers.len(),
                    target.display()
                ));
                report.record_written(source, numbers.len(), &target);
            }
            Err(err) => {
                self.output_formatter.error(&format!(
                    "Failed to write {}: {}",
                    writer.output_path(&source.base_name).display(),
                    err.user_message()
                ));
                report.record_failed(source, err.user_message());
            }
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn handle_error(&self, error: &NumcsvError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
