use std::sync::Mutex;

use affect_core::traits::IEmotionDetector;
use affect_core::{EmotionDistribution, Modality};

use crate::neutral_distribution;

/// A detector whose next result can be set from outside.
///
/// Drives demonstrations and tests: set a distribution, then let the
/// caller poll `detect()` as if a live source had produced it. Until a
/// result is set, the neutral fallback is returned.
pub struct MockDetector {
    modality: Modality,
    name: String,
    /// Last set result. A poisoned lock still holds a usable value.
    result: Mutex<Option<EmotionDistribution>>,
}

impl MockDetector {
    pub fn new(modality: Modality, name: impl Into<String>) -> Self {
        Self {
            modality,
            name: name.into(),
            result: Mutex::new(None),
        }
    }

    /// Mock face detector.
    pub fn face() -> Self {
        Self::new(Modality::Face, "mock-face")
    }

    /// Mock voice detector.
    pub fn voice() -> Self {
        Self::new(Modality::Voice, "mock-voice")
    }

    /// Set the distribution returned by subsequent `detect` calls.
    pub fn set_result(&self, distribution: EmotionDistribution) {
        let mut slot = self
            .result
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(distribution);
    }

    /// Clear any previously set result, restoring the neutral fallback.
    pub fn clear(&self) {
        let mut slot = self
            .result
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = None;
    }
}

impl IEmotionDetector for MockDetector {
    fn detect(&self) -> EmotionDistribution {
        self.result
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
            .unwrap_or_else(neutral_distribution)
    }

    fn modality(&self) -> Modality {
        self.modality
    }

    fn name(&self) -> &str {
        &self.name
    }
}
