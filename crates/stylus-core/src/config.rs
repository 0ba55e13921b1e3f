//! Simulator configuration file serialization

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::OrientationParameters;
use crate::tablet::TabletGeometry;

/// Configuration file for a simulator instance: tablet extents and the
/// parameter set applied on startup/reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// File format version
    pub version: u32,
    /// Tablet surface geometry
    pub tablet: TabletGeometry,
    /// Parameters applied on startup and returned by reset
    pub defaults: OrientationParameters,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            version: 1,
            tablet: TabletGeometry::default(),
            defaults: OrientationParameters::default(),
        }
    }
}

impl SimConfig {
    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize configuration to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: SimConfig =
            ron::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content = std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        let config: SimConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        Ok(config)
    }
}

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_bytes() {
        let mut config = SimConfig::default();
        config.defaults.azimuth = 242.0;
        config.tablet.width = 12.0;
        let bytes = config.to_bytes().unwrap();
        let loaded = SimConfig::load_from_bytes(&bytes).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.ron");
        let config = SimConfig::default();
        config.save(&path).unwrap();
        let loaded = SimConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_garbage_fails() {
        let err = SimConfig::load_from_bytes(b"not ron at all (").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_)));
    }
}
