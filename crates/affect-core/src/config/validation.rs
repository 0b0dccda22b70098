//! Config validation: reject invalid values at startup.

use crate::errors::{AffectError, AffectResult};

use super::AffectConfig;

/// Validation error for affect configuration.
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Which field is invalid.
    pub field: String,
    /// Description of the problem.
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "config.{}: {}", self.field, self.message)
    }
}

/// Validate an AffectConfig, returning all errors found.
pub fn validate(config: &AffectConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    let f = &config.fusion;

    let weights = [
        ("fusion.default_face_weight", f.default_face_weight),
        ("fusion.default_voice_weight", f.default_voice_weight),
        ("fusion.uncertain_face_weight", f.uncertain_face_weight),
        ("fusion.uncertain_voice_weight", f.uncertain_voice_weight),
        (
            "fusion.face_confidence_threshold",
            f.face_confidence_threshold,
        ),
    ];

    for (field, value) in weights {
        if value.is_nan() {
            errors.push(ConfigValidationError {
                field: field.to_string(),
                message: "must not be NaN".to_string(),
            });
        } else if value < 0.0 {
            errors.push(ConfigValidationError {
                field: field.to_string(),
                message: format!("must be >= 0.0, got {}", value),
            });
        }
    }

    errors
}

/// Validate and return Ok(()) or Err with all validation errors combined.
pub fn validate_or_error(config: &AffectConfig) -> AffectResult<()> {
    let errors = validate(config);
    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        Err(AffectError::ConfigError {
            reason: format!("invalid configuration: {}", messages.join("; ")),
        })
    }
}
