//! Session configuration.

use crate::color::StrokeColor;
use crate::tools::{DEFAULT_STROKE_WIDTH, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, ToolKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Startup settings for a drawing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_tool: ToolKind,
    pub default_color: StrokeColor,
    pub default_width: f64,
    pub min_width: f64,
    pub max_width: f64,
    /// Surface color; also the color eraser strokes paint with.
    pub background: StrokeColor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tool: ToolKind::Pencil,
            default_color: StrokeColor::INDIGO,
            default_width: DEFAULT_STROKE_WIDTH,
            min_width: MIN_STROKE_WIDTH,
            max_width: MAX_STROKE_WIDTH,
            background: StrokeColor::WHITE,
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check width bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let widths = [self.min_width, self.default_width, self.max_width];
        if widths.iter().any(|w| !w.is_finite()) {
            return Err(ConfigError::Invalid("widths must be finite".to_string()));
        }
        if self.min_width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_width must be positive, got {}",
                self.min_width
            )));
        }
        if !(self.min_width..=self.max_width).contains(&self.default_width) {
            return Err(ConfigError::Invalid(format!(
                "default_width {} outside [{}, {}]",
                self.default_width, self.min_width, self.max_width
            )));
        }
        Ok(())
    }
}
