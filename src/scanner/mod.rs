pub mod text_file_scanner;

pub use text_file_scanner::{DirectoryScan, SourceFile, TextFileScanner};
