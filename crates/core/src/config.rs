// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Writer and sink configuration
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! [writer]
//! max_bytes = 52428800
//!
//! [sink]
//! high_water_mark = 16384
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default ceiling on bytes a single writer may append (50 MiB)
pub const DEFAULT_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// Default buffered-byte threshold at which a file sink reports saturation (16 KiB)
pub const DEFAULT_HIGH_WATER_MARK: usize = 16 * 1024;

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("writer.max_bytes must be positive")]
    InvalidMaxBytes,
    #[error("sink.high_water_mark must be positive")]
    InvalidHighWaterMark,
}

/// Configuration for a single append writer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Hard ceiling on cumulative bytes handed to the sink
    pub max_bytes: u64,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl WriterConfig {
    /// Config with a custom ceiling
    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    /// Check that the ceiling is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bytes == 0 {
            return Err(ConfigError::InvalidMaxBytes);
        }
        Ok(())
    }
}

/// Configuration for the platform file sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Buffered bytes at which `write` starts reporting saturation
    pub high_water_mark: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            high_water_mark: DEFAULT_HIGH_WATER_MARK,
        }
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub writer: WriterConfig,
    pub sink: SinkConfig,
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.writer.validate()?;
        if self.sink.high_water_mark == 0 {
            return Err(ConfigError::InvalidHighWaterMark);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
