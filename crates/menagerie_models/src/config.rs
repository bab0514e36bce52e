//! # Model Configuration
//!
//! Floor height and palette, read by the generators and never by the engine.
//!
//! ## File Format
//!
//! ```toml
//! floor_y = -12.0
//!
//! [palette]
//! dark = 0x4A3728
//! gold = 0xF2B632
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos do not pass
//! silently.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::palette::Palette;

/// Settings shared by every species generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Height of the ground plane the figures stand on.
    pub floor_y: f64,
    /// Named colors.
    pub palette: Palette,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            floor_y: Self::DEFAULT_FLOOR_Y,
            palette: Palette::default(),
        }
    }
}

impl ModelConfig {
    /// Default floor height.
    pub const DEFAULT_FLOOR_Y: f64 = -12.0;

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidConfig`] on malformed TOML, unknown keys
    /// or a non-finite floor height.
    pub fn from_toml_str(text: &str) -> ModelResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| ModelError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ConfigRead`] if the file cannot be read and
    /// [`ModelError::InvalidConfig`] if its contents are rejected.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ModelError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), floor_y = config.floor_y, "model config loaded");
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidConfig`] if the values cannot be encoded.
    pub fn to_toml_string(&self) -> ModelResult<String> {
        toml::to_string(self).map_err(|e| ModelError::InvalidConfig(e.to_string()))
    }

    /// Checks values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidConfig`] for a NaN or infinite floor.
    pub fn validate(&self) -> ModelResult<()> {
        if !self.floor_y.is_finite() {
            return Err(ModelError::InvalidConfig(format!(
                "floor_y must be finite, got {}",
                self.floor_y
            )));
        }
        Ok(())
    }

    /// Returns a copy standing on a different floor.
    #[must_use]
    pub fn with_floor_y(mut self, floor_y: f64) -> Self {
        self.floor_y = floor_y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::colors;
    use menagerie_core::Color;

    #[test]
    fn test_empty_text_is_default() {
        let config = ModelConfig::from_toml_str("").unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ModelConfig::from_toml_str(
            r"
            floor_y = 4.0

            [palette]
            gold = 0x123456
            ",
        )
        .unwrap();

        assert_eq!(config.floor_y, 4.0);
        assert_eq!(config.palette.gold, Color(0x12_3456));
        assert_eq!(config.palette.dark, colors::DARK);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ModelConfig::from_toml_str("flor_y = 1.0").unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(_)));

        let err = ModelConfig::from_toml_str("[palette]\npurple = 1").unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(_)));
    }

    #[test]
    fn test_non_finite_floor_rejected() {
        let err = ModelConfig::from_toml_str("floor_y = nan").unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(ref msg) if msg.contains("finite")));

        let err = ModelConfig::from_toml_str("floor_y = inf").unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_roundtrip_preserves_values() {
        let mut config = ModelConfig::default().with_floor_y(-3.5);
        config.palette.orange = Color(0xAB_CDEF);

        let text = config.to_toml_string().unwrap();
        assert_eq!(ModelConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = ModelConfig::from_toml_file("/definitely/not/here/menagerie.toml").unwrap_err();
        assert!(matches!(err, ModelError::ConfigRead { .. }));
    }
}
