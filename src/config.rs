use crate::error::{NumcsvError, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Default input directory, matching the tool's historical invocation without
/// an argument. Carried as configuration state, not a global.
pub const DEFAULT_INPUT_DIR: &str = "sample_texts";

/// Output directory for CSV rows, created relative to the current working
/// directory at invocation time.
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Suffix a file name must end with (case-sensitive) to be processed.
pub const TEXT_SUFFIX: &str = ".txt";

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub text_suffix: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            text_suffix: TEXT_SUFFIX.to_string(),
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(NumcsvError::Config {
                message: "Input directory must not be empty".to_string(),
            });
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(NumcsvError::Config {
                message: "Output directory must not be empty".to_string(),
            });
        }

        if !self.text_suffix.starts_with('.') || self.text_suffix.len() < 2 {
            return Err(NumcsvError::Config {
                message: format!(
                    "Text suffix must be a dotted extension, got: {:?}",
                    self.text_suffix
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("sample_texts"));
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.text_suffix, ".txt");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = RunConfig::new()
            .with_input_dir("grades")
            .with_output_dir("out");
        assert_eq!(config.input_dir, PathBuf::from("grades"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = RunConfig::default();
        assert!(config.validate().is_ok());

        config.input_dir = PathBuf::new();
        assert!(config.validate().is_err());

        let mut config = RunConfig::default();
        config.text_suffix = "txt".to_string();
        assert!(config.validate().is_err());
    }
}
