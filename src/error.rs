//! Error types for loading, configuration and coordinate mapping

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading the dataset file.
///
/// A missing file is not an error: the loader reports it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed CSV in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Column '{column}' row {row}: '{value}' is not a number")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },
    #[error("Dataset {0:?} has no plottable columns")]
    NoColumns(PathBuf),
}

/// Failure while mapping a pointer position into data space.
///
/// These are expected during normal pointer movement and are never shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    #[error("Panel has no view established yet")]
    NoView,
    #[error("Pointer is outside the plot area")]
    OutsideScene,
    #[error("Mapped coordinate is not finite")]
    NonFinite,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Delimiter {0:?} must be a single ASCII character")]
    Delimiter(char),
}
