use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumcsvError {
    #[error("Input not found: {path}")]
    MissingInput { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {message}")]
    Config { message: String },

    #[error("Unexpected failure: {message}")]
    Unexpected { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for NumcsvError {
    fn user_message(&self) -> String {
        match self {
            NumcsvError::MissingInput { path } => {
                format!("Input not found: {}", path)
            }
            NumcsvError::NotADirectory { path } => {
                format!("Input path is not a directory: {}", path)
            }
            NumcsvError::Io(err) => {
                format!("IO operation failed: {}", err)
            }
            NumcsvError::Csv(err) => {
                format!("CSV write failed: {}", err)
            }
            NumcsvError::Config { message } => {
                format!("Invalid configuration: {}", message)
            }
            NumcsvError::Unexpected { message } => {
                format!("Unexpected failure: {}", message)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            NumcsvError::MissingInput { .. } => Some(
                "Check that the input directory exists and the path is spelled correctly."
                    .to_string(),
            ),
            NumcsvError::NotADirectory { .. } => {
                Some("Pass a directory containing .txt files, not a single file.".to_string())
            }
            NumcsvError::Io(_) => Some(
                "Check read/write permissions and available disk space for the target directory."
                    .to_string(),
            ),
            NumcsvError::Config { .. } => {
                Some("Run with --help to see valid arguments and defaults.".to_string())
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumcsvError>;
