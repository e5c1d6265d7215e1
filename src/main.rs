use clap::Parser;
use numcsv::{Cli, NumCsv, NumcsvError, OutputFormatter, OutputMode};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    let app = match NumCsv::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    match app.run() {
        Ok(report) => {
            app.output_formatter().print_run_report(&report);

            if report.has_failures() {
                2 // Completed, but some files were diagnosed and skipped
            } else {
                0
            }
        }
        Err(e) => {
            app.handle_error(&e);

            match e {
                NumcsvError::MissingInput { .. } | NumcsvError::NotADirectory { .. } => 3,
                _ => 1,
            }
        }
    }
}

fn print_startup_error(error: &NumcsvError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
