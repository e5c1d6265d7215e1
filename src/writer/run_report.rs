use crate::config::RunConfig;
use crate::scanner::SourceFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// What happened to one scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    Written,
    NoNumbers,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub file_name: String,
    pub outcome: FileOutcome,
    pub numbers_extracted: usize,
    pub output_path: Option<String>,
    pub error: Option<String>,
}

/// End-of-run summary: counts, per-file records, timing, and the
/// configuration the run used. Console-only, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    pub files_scanned: usize,
    pub files_written: usize,
    pub files_empty: usize,
    pub files_failed: usize,
    pub records: Vec<FileRecord>,
    pub config_used: RunConfig,
}

impl RunReport {
    pub fn new(config: &RunConfig, files_scanned: usize) -> Self {
        Self {
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
            files_scanned,
            files_written: 0,
            files_empty: 0,
            files_failed: 0,
            records: Vec::new(),
            config_used: config.clone(),
        }
    }

    pub fn record_written(&mut self, source: &SourceFile, count: usize, output: &Path) {
        self.files_written += 1;
        self.records.push(FileRecord {
            file_name: source.file_name.clone(),
            outcome: FileOutcome::Written,
            numbers_extracted: count,
            output_path: Some(output.display().to_string()),
            error: None,
        });
    }

    pub fn record_empty(&mut self, source: &SourceFile) {
        self.files_empty += 1;
        self.records.push(FileRecord {
            file_name: source.file_name.clone(),
            outcome: FileOutcome::NoNumbers,
            numbers_extracted: 0,
            output_path: None,
            error: None,
        });
    }

    pub fn record_failed(&mut self, source: &SourceFile, error: String) {
        self.files_failed += 1;
        self.records.push(FileRecord {
            file_name: source.file_name.clone(),
            outcome: FileOutcome::Failed,
            numbers_extracted: 0,
            output_path: None,
            error: Some(error),
        });
    }

    pub fn finish(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileRecord> {
        self.records
            .iter()
            .filter(|r| r.outcome == FileOutcome::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn source(name: &str) -> SourceFile {
        SourceFile::new(PathBuf::from(name), ".txt", 0)
    }

    #[test]
    fn test_report_counts() {
        let config = RunConfig::default();
        let mut report = RunReport::new(&config, 3);

        report.record_written(&source("a.txt"), 2, Path::new("results/a.csv"));
        report.record_empty(&source("b.txt"));
        report.record_failed(&source("c.txt"), "read failed".to_string());

        assert_eq!(report.files_scanned, 3);
        assert_eq!(report.files_written, 1);
        assert_eq!(report.files_empty, 1);
        assert_eq!(report.files_failed, 1);
        assert!(report.has_failures());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let config = RunConfig::default();
        let mut report = RunReport::new(&config, 1);
        report.record_written(&source("a.txt"), 2, Path::new("results/a.csv"));

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"files_written\":1"));
        assert!(json.contains("\"outcome\":\"written\""));
        assert!(json.contains("results/a.csv"));
    }

    #[test]
    fn test_clean_report_has_no_failures() {
        let config = RunConfig::default();
        let report = RunReport::new(&config, 0);
        assert!(!report.has_failures());
        assert_eq!(report.failures().count(), 0);
    }
}
