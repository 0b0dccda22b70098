use affect_core::traits::IEmotionDetector;
use affect_core::{EmotionDistribution, Modality};

use crate::neutral_distribution;

/// A detector that always reports the same distribution.
pub struct FixedDetector {
    modality: Modality,
    name: String,
    distribution: EmotionDistribution,
}

impl FixedDetector {
    /// Create a detector that always returns `distribution`.
    pub fn new(
        modality: Modality,
        name: impl Into<String>,
        distribution: EmotionDistribution,
    ) -> Self {
        Self {
            modality,
            name: name.into(),
            distribution,
        }
    }

    /// Create a detector reporting the neutral fallback distribution.
    pub fn neutral(modality: Modality) -> Self {
        Self::new(modality, format!("fixed-{modality}"), neutral_distribution())
    }
}

impl IEmotionDetector for FixedDetector {
    fn detect(&self) -> EmotionDistribution {
        self.distribution.clone()
    }

    fn modality(&self) -> Modality {
        self.modality
    }

    fn name(&self) -> &str {
        &self.name
    }
}
