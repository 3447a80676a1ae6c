//! All error types for the arbgen crate.
//!
//! Structural failures (configuration, CSV source) are returned as `Err` and
//! abort a run. Per-language failures (`ResourceRead`, `ResourceWrite`) are
//! collected into a [`crate::generator::Report`] instead.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to load config file {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to read CSV source {}: {source}", .path.display())]
    CsvRead {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to read resource {}: {source}", .path.display())]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to write resource {}: {source}", .path.display())]
    ResourceWrite {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    DataMismatch(String),
}

impl Error {
    /// Creates the fatal error raised when the CSV header has no language column.
    pub fn missing_language_columns() -> Self {
        Error::Configuration(
            "at least one key column and one language column required".to_string(),
        )
    }

    pub fn config_file(path: impl AsRef<Path>, source: Error) -> Self {
        Error::ConfigFile {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }

    pub fn csv_read(path: impl AsRef<Path>, source: Error) -> Self {
        Error::CsvRead {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }

    pub fn resource_read(path: impl AsRef<Path>, source: Error) -> Self {
        Error::ResourceRead {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }

    pub fn resource_write(path: impl AsRef<Path>, source: Error) -> Self {
        Error::ResourceWrite {
            path: path.as_ref().to_path_buf(),
            source: Box::new(source),
        }
    }

    /// Returns `true` if this error (or the error it wraps) is an I/O
    /// "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            Error::ConfigFile { source, .. }
            | Error::CsvRead { source, .. }
            | Error::ResourceRead { source, .. }
            | Error::ResourceWrite { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}
