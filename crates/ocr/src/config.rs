use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid parser config: {0}")]
    Invalid(String),
}

/// Tunables for the receipt heuristics. Every key is optional in TOML.
///
/// ```toml
/// value_column_ratio = 0.6
/// subtotal_keyword = "subtotal"
/// min_structured_entries = 4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Fraction of the left-edge span past which a currency-like fragment
    /// counts as a price.
    pub value_column_ratio: f64,
    /// Case-insensitive label substring marking the subtotal line.
    pub subtotal_keyword: String,
    /// Fewer entries than this are all reported as plain items.
    pub min_structured_entries: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            value_column_ratio: 0.6,
            subtotal_keyword: "subtotal".to_string(),
            min_structured_entries: 4,
        }
    }
}

impl ParserConfig {
    pub fn from_toml(toml_content: &str) -> Result<Self, ConfigError> {
        let config: ParserConfig = toml::from_str(toml_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.value_column_ratio) {
            return Err(ConfigError::Invalid(format!(
                "value_column_ratio must be within 0..=1, got {}",
                self.value_column_ratio
            )));
        }
        if self.subtotal_keyword.trim().is_empty() {
            return Err(ConfigError::Invalid("subtotal_keyword must not be empty".into()));
        }
        if self.min_structured_entries == 0 {
            return Err(ConfigError::Invalid("min_structured_entries must be at least 1".into()));
        }
        Ok(())
    }
}
