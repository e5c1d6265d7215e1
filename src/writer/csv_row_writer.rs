use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Persists one extracted number list as a single CSV row named after the
/// source file, inside the configured output directory.
pub struct CsvRowWriter {
    output_dir: PathBuf,
}

impl CsvRowWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn output_path(&self, base_name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.csv", base_name))
    }

    /// Writes the numbers as one comma-separated row, truncating any previous
    /// content (re-runs are last-write-wins). The output directory is created
    /// on demand; creating it again is a no-op. The caller is expected to skip
    /// empty lists, but no guard is applied here: an empty list writes a file
    /// containing an empty row.
    pub fn write_row(&self, base_name: &str, numbers: &[String]) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let target = self.output_path(base_name);
        let mut writer = csv::Writer::from_path(&target)?;

        writer.write_record(numbers)?;
        writer.flush()?;

        Ok(target)
    }
}
