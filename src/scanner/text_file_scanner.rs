use crate::error::{NumcsvError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One qualifying text file discovered in the input directory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub file_name: String,
    pub base_name: String,
    pub size: u64,
}

impl SourceFile {
    pub fn new(path: PathBuf, text_suffix: &str, size: u64) -> Self {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        // Strip only the final suffix: report.v1.txt keeps its inner dots and
        // becomes report.v1, so sibling inputs never collide on output names.
        let base_name = file_name
            .strip_suffix(text_suffix)
            .unwrap_or(&file_name)
            .to_string();

        Self {
            path,
            file_name,
            base_name,
            size,
        }
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Result of enumerating one directory: the qualifying files, plus a
/// diagnostic line for every entry the listing could not read. The caller
/// reports the diagnostics; unreadable entries never abort the scan.
#[derive(Debug, Default)]
pub struct DirectoryScan {
    pub sources: Vec<SourceFile>,
    pub skipped: Vec<String>,
}

/// Enumerates the immediate children of a directory and keeps the ones whose
/// name carries the text suffix (case-sensitive exact match).
pub struct TextFileScanner {
    text_suffix: String,
}

impl TextFileScanner {
    pub fn new<S: Into<String>>(text_suffix: S) -> Self {
        Self {
            text_suffix: text_suffix.into(),
        }
    }

    pub fn scan_directory<P: AsRef<Path>>(&self, root: P) -> Result<DirectoryScan> {
        let root_path = root.as_ref();

        if !root_path.exists() {
            return Err(NumcsvError::MissingInput {
                path: root_path.display().to_string(),
            });
        }

        if !root_path.is_dir() {
            return Err(NumcsvError::NotADirectory {
                path: root_path.display().to_string(),
            });
        }

        let mut scan = DirectoryScan::default();

        // Direct children only; order is whatever the directory listing yields.
        let walker = WalkDir::new(root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root_path.display().to_string());
                    scan.skipped
                        .push(format!("Failed to read directory entry {}: {}", path, err));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if !self.matches_suffix(entry.path()) {
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            scan.sources.push(SourceFile::new(
                entry.path().to_path_buf(),
                &self.text_suffix,
                size,
            ));
        }

        Ok(scan)
    }

    fn matches_suffix(&self, path: &Path) -> bool {
        path.file_name().and_then(|n| n.to_str()).is_some_and(|name| {
            name.ends_with(&self.text_suffix) && name.len() > self.text_suffix.len()
        })
    }
}
