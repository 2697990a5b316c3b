use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::audio_system::assets::{DEFAULT_SAMPLE_RATE, SAMPLE_RATE_RANGE};
use crate::error::ConfigError;

fn default_volume() -> f32 {
    0.5
}

fn default_enabled() -> bool {
    true
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

/// Initial player settings supplied by the host
///
/// Read-only: the player never writes preferences back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Master volume applied to every clip (0.0-1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Whether play requests produce sound
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Sample rate the embedded clips are rendered at
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            enabled: default_enabled(),
            sample_rate: default_sample_rate(),
        }
    }
}

impl PlayerConfig {
    /// Parse a host-provided JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PlayerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the clips cannot be rendered with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SAMPLE_RATE_RANGE.contains(&self.sample_rate) {
            return Err(ConfigError::Invalid(format!(
                "sample_rate {} outside {}..={} Hz",
                self.sample_rate,
                SAMPLE_RATE_RANGE.start(),
                SAMPLE_RATE_RANGE.end()
            )));
        }
        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json(&content)?;
        tracing::info!("Loaded sound config from: {}", path.display());
        Ok(config)
    }
}
