//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::device::{Facing, Resolution};
use crate::preview::FALLBACK_RESOLUTION;

/// Camera-side settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Facing opened on the first surface-created callback.
    pub initial_facing: Facing,
    /// Preview resolution applied when the device reports no size list.
    pub fallback_resolution: Resolution,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            initial_facing: Facing::Back,
            fallback_resolution: FALLBACK_RESOLUTION,
        }
    }
}

/// Storage-side settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory captured images are written into.
    pub pictures_dir: PathBuf,
    /// Filename prefix, e.g. `IMG` for `IMG_20240101_120000.jpg`.
    pub file_prefix: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            pictures_dir: PathBuf::from("pictures"),
            file_prefix: "IMG".to_string(),
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("fallback resolution must be non-zero")]
    InvalidFallbackResolution,
    #[error("file prefix must not be empty")]
    EmptyFilePrefix,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: FileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fallback = self.camera.fallback_resolution;
        if fallback.width == 0 || fallback.height == 0 {
            return Err(ConfigError::InvalidFallbackResolution);
        }
        if self.storage.file_prefix.is_empty() {
            return Err(ConfigError::EmptyFilePrefix);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_fallback_invalid() {
        let mut config = FileConfig::default();
        config.camera.fallback_resolution = Resolution::new(0, 480);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFallbackResolution)
        ));
    }

    #[test]
    fn test_empty_prefix_invalid() {
        let mut config = FileConfig::default();
        config.storage.file_prefix.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyFilePrefix)));
    }

    #[test]
    fn test_parse_toml_sections() {
        let toml = r#"
            [camera]
            initial_facing = "front"
            fallback_resolution = { width = 800, height = 600 }

            [storage]
            pictures_dir = "/tmp/shots"
            file_prefix = "PIC"
        "#;
        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.camera.initial_facing, Facing::Front);
        assert_eq!(config.camera.fallback_resolution, Resolution::new(800, 600));
        assert_eq!(config.storage.file_prefix, "PIC");
        assert!(config.validate().is_ok());
    }
}
