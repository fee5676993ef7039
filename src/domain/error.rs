use std::io;

use thiserror::Error;

use super::validation::NameError;

/// Library-wide error type for vfsctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Persisted JSON document could not be encoded or decoded.
    #[error("Malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Entity name failed validation.
    #[error("Invalid name '{name}': {source}")]
    InvalidName {
        name: String,
        #[source]
        source: NameError,
    },

    #[error("the {0} doesn't exist")]
    UserNotFound(String),

    #[error("the {0} doesn't exist")]
    FolderNotFound(String),

    #[error("the {0} doesn't exist")]
    FileNotFound(String),

    #[error("the {0} has already existed")]
    UserExists(String),

    #[error("the {0} has already existed")]
    FolderExists(String),

    #[error("the {0} has already existed")]
    FileExists(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view so callers can branch on the failure class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Json(_)
            | AppError::Configuration(_)
            | AppError::TomlParse(_)
            | AppError::InvalidName { .. } => io::ErrorKind::InvalidInput,
            AppError::UserNotFound(_) | AppError::FolderNotFound(_) | AppError::FileNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::UserExists(_) | AppError::FolderExists(_) | AppError::FileExists(_) => {
                io::ErrorKind::AlreadyExists
            }
        }
    }
}
