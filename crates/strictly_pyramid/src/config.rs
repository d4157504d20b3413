//! Board configuration loaded from TOML.

use crate::error::GeometryError;
use crate::geometry::{BoardGeometry, DEFAULT_PROFILE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a pyramid board.
///
/// ```toml
/// rows = [1, 2, 3, 2, 1]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PyramidConfig {
    /// Cells per row, apex first.
    #[serde(default = "default_rows")]
    rows: Vec<usize>,
}

fn default_rows() -> Vec<usize> {
    DEFAULT_PROFILE.to_vec()
}

impl PyramidConfig {
    /// Creates a configuration with the given row sizes.
    pub fn new(rows: Vec<usize>) -> Self {
        Self { rows }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(rows = ?config.rows, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(rows = config.rows.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Validates the row sizes into a board geometry.
    ///
    /// # Errors
    ///
    /// Fails if the profile is empty or has an empty row.
    pub fn geometry(&self) -> Result<BoardGeometry, GeometryError> {
        BoardGeometry::new(&self.rows)
    }
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self::new(default_rows())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
