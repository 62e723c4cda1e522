//! Configuration loader - YAML file + .env overrides

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dataset::DatasetSource;
use crate::error::ConfigError;

/// Main configuration loaded from plotter.yaml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dataset_path: PathBuf,
    /// Column kept out of the checkbox list
    pub label_column: String,
    pub delimiter: char,
    /// Top of the vertical axis
    pub y_extent: f64,
    pub window_size: [f32; 2],
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("resource/test_data.csv"),
            label_column: "Name".to_string(),
            delimiter: ',',
            y_extent: 150.0,
            window_size: [1200.0, 800.0],
            log_dir: PathBuf::from("logs"),
        }
    }
}

/// Environment overrides, read after .env is loaded
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dataset_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a YAML file. Missing keys fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.delimiter_byte()?;
        Ok(config)
    }

    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(ConfigError::Delimiter(self.delimiter))
    }

    pub fn dataset_source(&self) -> Result<DatasetSource, ConfigError> {
        Ok(DatasetSource::new(
            &self.dataset_path,
            self.label_column.clone(),
            self.delimiter_byte()?,
        ))
    }
}

impl Overrides {
    /// Load overrides from the environment (and .env if present)
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Overrides {
            dataset_path: std::env::var_os("PLOTTER_DATASET").map(PathBuf::from),
            log_dir: std::env::var_os("PLOTTER_LOG_DIR").map(PathBuf::from),
        }
    }

    pub fn apply(self, config: &mut Config) {
        if let Some(path) = self.dataset_path {
            config.dataset_path = path;
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = dir;
        }
    }
}
