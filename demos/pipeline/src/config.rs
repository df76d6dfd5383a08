//! Configuration for the pipeline demo.
//!
//! Pipeline parameters load from an optional TOML file so the walkthrough
//! can be re-run with different shapes without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Parameters of the demo pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PipelineConfig {
    /// First source value (inclusive).
    #[serde(default = "default_start")]
    pub start: i64,

    /// Last source value (inclusive).
    #[serde(default = "default_end")]
    pub end: i64,

    /// Offset the map stage adds to every element.
    #[serde(default = "default_offset")]
    pub offset: f64,

    /// Threshold the filter stage keeps elements above.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Element budget for the take stage.
    #[serde(default = "default_take")]
    pub take: usize,
}

fn default_start() -> i64 {
    1
}

fn default_end() -> i64 {
    9
}

fn default_offset() -> f64 {
    1.0
}

fn default_threshold() -> f64 {
    5.0
}

fn default_take() -> usize {
    3
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            start: default_start(),
            end: default_end(),
            offset: default_offset(),
            threshold: default_threshold(),
            take: default_take(),
        }
    }
}

impl PipelineConfig {
    /// Loads configuration from a TOML file and validates it.
    ///
    /// Returns an error if the file is missing, unparsable, or describes an
    /// inverted source range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Checks cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.end < self.start {
            return Err(ConfigError::Invalid(format!(
                "source range is inverted: {}..={}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}
