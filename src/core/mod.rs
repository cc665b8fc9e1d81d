use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the setup tool.
///
/// This enum represents all possible errors that can occur while collecting
/// answers, deriving values, and reading or writing configuration files.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Refresh interval answer is not an integer
    #[error("invalid refresh interval '{value}': {details}")]
    InvalidRefreshHours {
        /// The rejected answer, as typed
        value: String,
        /// Parse error details
        details: String,
    },

    /// Refresh interval does not fit in milliseconds
    #[error("refresh interval of {hours} hours is too large")]
    RefreshOverflow {
        /// The parsed hour count
        hours: i64,
    },

    /// The input stream ended while a prompt was waiting for an answer
    #[error("input closed while waiting for '{label}'")]
    InputClosed {
        /// Label of the pending prompt
        label: String,
    },

    /// A required prompt kept receiving empty answers
    #[error("no answer for required field '{label}' after {attempts} attempts")]
    RequiredFieldUnanswered {
        /// Label of the required prompt
        label: String,
        /// Number of prompts shown
        attempts: usize,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error (prompt and echo streams)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// JSON parsing error with location context
    #[error("failed to parse JSON at '{location}': {details}")]
    JsonParseError {
        /// Location of JSON being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for setup operations.
pub type Result<T> = result::Result<T, SetupError>;

impl SetupError {
    /// Creates an I/O error tagged with the path it occurred on.
    pub fn io_at(error: impl fmt::Display, path: &Path) -> Self {
        SetupError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        SetupError::TomlParseError {
            location: describe_location(path),
            details: error.to_string(),
        }
    }

    /// Creates a JSON parsing error with optional file path context.
    pub fn json_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        SetupError::JsonParseError {
            location: describe_location(path),
            details: error.to_string(),
        }
    }
}

fn describe_location(path: Option<&Path>) -> String {
    match path {
        Some(p) => {
            let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
            clean_path.to_string_lossy().to_string()
        }
        None => "string".to_string(),
    }
}
