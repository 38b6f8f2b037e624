use std::path::PathBuf;
use thiserror::Error;

use crate::config::DocumentFormat;

/// Custom error type for locale key comparison
#[derive(Debug, Error)]
pub enum CheckError {
    /// Locale file does not exist
    #[error("Locale file not found: {file}\n\nTip: Check the path or run from the project root")]
    NotFound { file: PathBuf },

    /// Locale file could not be parsed as a dictionary
    #[error("Failed to parse {format} file {file}:\n{reason}\n\nTip: The top level must be a key-value mapping")]
    Parse {
        file: PathBuf,
        format: DocumentFormat,
        reason: String,
    },

    /// Locale file exists but could not be read
    #[error("Failed to read {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// Create a NotFound error
    pub fn not_found(file: impl Into<PathBuf>) -> Self {
        Self::NotFound { file: file.into() }
    }

    /// Create a Parse error from a file path, its format and a reason
    pub fn parse(
        file: impl Into<PathBuf>,
        format: DocumentFormat,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            file: file.into(),
            format,
            reason: reason.into(),
        }
    }

    /// Map an IO error raised while reading `file`.
    ///
    /// A missing file becomes `NotFound`, every other kind stays `Io`.
    pub fn from_read(file: impl Into<PathBuf>, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(file),
            _ => Self::Io {
                file: file.into(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type alias for CheckError
pub type Result<T> = std::result::Result<T, CheckError>;
