//! Palette settings file
//!
//! A [`PaletteConfig`] captures the slider values and the label format so
//! a palette can be reproduced later. Settings are stored as JSON; any
//! field left out falls back to its default.
//!
//! ```no_run
//! use rainbow_palette::PaletteConfig;
//! use std::path::Path;
//!
//! let config = PaletteConfig::from_json_file(Path::new("palette.json"))?;
//! let session = config.into_session()?;
//! # Ok::<(), rainbow_palette::PaletteError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::limits::{MAX_COUNT, MIN_COUNT};
use crate::palette::{PaletteParams, Representation};
use crate::session::Session;
use crate::{PaletteError, Result};

/// Stored palette settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Slider values
    #[serde(flatten)]
    pub params: PaletteParams,

    /// Label format
    pub format: Representation,

    /// Optional color (`#RGB`, `#RRGGBB` or `rgb(r,g,b)`) whose saturation
    /// and lightness override the stored ones
    pub seed_color: Option<String>,
}

impl PaletteConfig {
    /// Check parameter ranges, including the count slider limits
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        if !(MIN_COUNT..=MAX_COUNT).contains(&self.params.count) {
            return Err(PaletteError::invalid_parameter("count", self.params.count));
        }
        Ok(())
    }

    /// Build a session from these settings, applying the seed color if set
    pub fn into_session(self) -> Result<Session> {
        self.validate()?;
        let mut session = Session::new(self.params, self.format);
        if let Some(color) = &self.seed_color {
            session.apply_color_input(color)?;
        }
        Ok(session)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PaletteError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PaletteError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        log::debug!("Loaded palette settings from {}", path.display());
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config("Failed to encode settings", e))?;
        std::fs::write(path, json).map_err(|e| {
            PaletteError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PaletteConfig =
            serde_json::from_str(r#"{"count": 3, "format": "rgb"}"#).unwrap();
        assert_eq!(config.params.count, 3);
        assert_eq!(config.params.saturation, 50);
        assert_eq!(config.format, Representation::Rgb);
        assert!(config.seed_color.is_none());
    }

    #[test]
    fn test_validate_count_limits() {
        let mut config = PaletteConfig::default();
        assert!(config.validate().is_ok());

        config.params.count = 0;
        assert!(config.validate().is_err());
        config.params.count = 65;
        assert!(config.validate().is_err());
        config.params.count = 64;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_into_session_applies_seed() {
        let config = PaletteConfig {
            seed_color: Some("#ff0000".into()),
            ..Default::default()
        };
        let session = config.into_session().unwrap();
        assert_eq!(session.params().saturation, 100);
        assert_eq!(session.params().lightness, 50);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");

        let config = PaletteConfig {
            params: PaletteParams {
                count: 5,
                saturation: 80,
                lightness: 30,
                hue_min: 90,
                hue_max: 10,
            },
            format: Representation::Hsl,
            seed_color: None,
        };
        config.to_json_file(&path).unwrap();
        assert_eq!(PaletteConfig::from_json_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = PaletteConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, PaletteError::ConfigError { .. }));
    }
}
