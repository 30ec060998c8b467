//! Configuration types for Life simulations.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compute::DEFAULT_GLIDER_SPACING;

fn default_glider_spacing() -> usize {
    DEFAULT_GLIDER_SPACING
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Probability that a cell starts alive when randomizing (0.0-1.0).
    pub density: f64,
    /// Tick interval settings.
    #[serde(default)]
    pub pace: PaceConfig,
    /// Distance between tiled gliders.
    #[serde(default = "default_glider_spacing")]
    pub glider_spacing: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 40,
            density: 0.2,
            pace: PaceConfig::default(),
            glider_spacing: DEFAULT_GLIDER_SPACING,
        }
    }
}

/// Delay between animation ticks, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceConfig {
    /// Delay used at start-up and after a pace reset.
    pub initial_ms: u64,
    /// Amount added or removed by one slower/faster request.
    pub step_ms: u64,
    /// Fastest allowed delay.
    pub min_ms: u64,
    /// Slowest allowed delay.
    pub max_ms: u64,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            initial_ms: 90,
            step_ms: 40,
            min_ms: 10,
            max_ms: 150,
        }
    }
}

impl PaceConfig {
    /// Validate pace bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_ms == 0 {
            return Err(ConfigError::InvalidPace(
                "minimum delay must be positive".to_string(),
            ));
        }
        if self.step_ms == 0 {
            return Err(ConfigError::InvalidPace(
                "delay step must be positive".to_string(),
            ));
        }
        if !(self.min_ms..=self.max_ms).contains(&self.initial_ms) {
            return Err(ConfigError::InvalidPace(format!(
                "initial delay {}ms outside [{}ms, {}ms]",
                self.initial_ms, self.min_ms, self.max_ms
            )));
        }
        Ok(())
    }
}

impl LifeConfig {
    /// Total number of cells.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Parse configuration from a JSON string and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        if self.glider_spacing == 0 {
            return Err(ConfigError::InvalidGliderSpacing);
        }
        self.pace.validate()
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be positive (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Density must be within [0, 1] (got {0})")]
    InvalidDensity(f64),
    #[error("Glider spacing must be non-zero")]
    InvalidGliderSpacing,
    #[error("Invalid pace: {0}")]
    InvalidPace(String),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
