pub mod csv_row_writer;
pub mod run_report;

pub use csv_row_writer::CsvRowWriter;
pub use run_report::{FileOutcome, FileRecord, RunReport};
