use serde::{Deserialize, Serialize};

use crate::models::WeightPair;
use crate::regime::Regime;

use super::defaults;

/// Fusion subsystem configuration.
///
/// Immutable once constructed: the engine only reads it. Weights must be
/// non-negative but are free to sum to anything, since fused scores are
/// normalized afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Face weight under the default regime.
    pub default_face_weight: f64,
    /// Voice weight under the default regime.
    pub default_voice_weight: f64,
    /// Face confidence strictly below this selects the uncertain regime.
    pub face_confidence_threshold: f64,
    /// Face weight under the uncertain regime.
    pub uncertain_face_weight: f64,
    /// Voice weight under the uncertain regime.
    pub uncertain_voice_weight: f64,
}

impl FusionConfig {
    /// Weights applied under the default regime.
    pub fn default_weights(&self) -> WeightPair {
        WeightPair::new(self.default_face_weight, self.default_voice_weight)
    }

    /// Weights applied under the uncertain regime.
    pub fn uncertain_weights(&self) -> WeightPair {
        WeightPair::new(self.uncertain_face_weight, self.uncertain_voice_weight)
    }

    /// Weights for the given regime.
    pub fn weights_for(&self, regime: Regime) -> WeightPair {
        match regime {
            Regime::Default => self.default_weights(),
            Regime::Uncertain => self.uncertain_weights(),
        }
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            default_face_weight: defaults::DEFAULT_FACE_WEIGHT,
            default_voice_weight: defaults::DEFAULT_VOICE_WEIGHT,
            face_confidence_threshold: defaults::DEFAULT_FACE_CONFIDENCE_THRESHOLD,
            uncertain_face_weight: defaults::DEFAULT_UNCERTAIN_FACE_WEIGHT,
            uncertain_voice_weight: defaults::DEFAULT_UNCERTAIN_VOICE_WEIGHT,
        }
    }
}
