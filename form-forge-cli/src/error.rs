//! Error types for the CLI.
//!
//! This module defines all error types used throughout the CLI,
//! providing detailed error messages with context for debugging.

use std::path::PathBuf;

use form_forge::FormError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// A form operation was rejected.
    #[error("{0}")]
    Form(#[from] FormError),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error reading or writing a form document.
    #[error("{0}")]
    Document(#[from] DocumentError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Error during file watching.
    #[error("Watch error: {0}")]
    Watch(#[from] WatchError),

    /// A command-line value could not be applied.
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// At least one artifact could not be generated.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Validation failed (artifacts out of date).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid value error.
    pub fn invalid_value(key: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 2,
            _ => 1,
        }
    }
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// Config file exists and overwriting was not requested.
    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    /// A name emitted into generated code is not an identifier.
    #[error("Invalid {key} '{value}': must be a valid identifier")]
    InvalidIdentifier { key: String, value: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error reading or writing a form document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Document does not exist.
    #[error("Form document not found: {path}")]
    NotFound { path: PathBuf },

    /// Document exists and overwriting was not requested.
    #[error("Form document already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    /// Document content is not a valid form.
    #[error("Invalid form document {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: FormError,
    },

    /// IO error reading or writing the document.
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error during file watching.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Failed to initialize watcher.
    #[error("Failed to initialize file watcher: {0}")]
    Init(String),

    /// Error from notify crate.
    #[error("Watch notification error: {0}")]
    Notify(String),
}

impl ConfigError {
    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}

impl DocumentError {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Validation("stale".into()).exit_code(), 2);
        assert_eq!(CliError::Generation("boom".into()).exit_code(), 1);
        assert_eq!(
            CliError::Form(FormError::unknown_kind("slider")).exit_code(),
            1
        );
    }

    #[test]
    fn test_form_error_display_passes_through() {
        let err = CliError::from(FormError::unknown_kind("slider"));
        assert_eq!(err.to_string(), "Unknown field kind 'slider'");
    }

    #[test]
    fn test_document_error_display() {
        let err = DocumentError::NotFound {
            path: PathBuf::from("signup.json"),
        };
        assert_eq!(err.to_string(), "Form document not found: signup.json");
    }
}
