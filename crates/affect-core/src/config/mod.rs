pub mod defaults;
pub mod fusion_config;
pub mod observability_config;
pub mod validation;

pub use fusion_config::FusionConfig;
pub use observability_config::ObservabilityConfig;
pub use validation::{validate, validate_or_error, ConfigValidationError};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{AffectError, AffectResult};

/// Top-level configuration for the affect workspace.
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AffectConfig {
    pub fusion: FusionConfig,
    pub observability: ObservabilityConfig,
}

impl AffectConfig {
    /// Parse a configuration from a TOML string. Missing keys fall back
    /// to their defaults.
    pub fn from_toml(toml_str: &str) -> AffectResult<Self> {
        toml::from_str(toml_str).map_err(|e| AffectError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> AffectResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| AffectError::ConfigIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }
}
