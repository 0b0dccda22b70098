use affect_core::config::FusionConfig;
use affect_core::errors::AffectResult;
use affect_core::traits::IFusionEngine;
use affect_core::{DecisionRecord, EmotionDistribution, Modality};
use tracing::debug;

use crate::formula;
use crate::regime;

/// The fusion engine. Holds the immutable weighting configuration and
/// carries no other state, so one instance can serve any number of
/// callers concurrently.
pub struct FusionEngine {
    config: FusionConfig,
}

impl FusionEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: FusionConfig::default(),
        }
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: FusionConfig) -> Self {
        Self { config }
    }

    /// Get the engine's configuration.
    pub fn config(&self) -> &FusionConfig {
        &self.config
    }
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IFusionEngine for FusionEngine {
    fn confidence(&self, distribution: &EmotionDistribution) -> f64 {
        distribution.confidence()
    }

    fn fuse(
        &self,
        face: &EmotionDistribution,
        voice: &EmotionDistribution,
    ) -> AffectResult<(EmotionDistribution, DecisionRecord)> {
        formula::validate(face, Modality::Face)?;
        formula::validate(voice, Modality::Voice)?;

        let face_confidence = face.confidence();
        let voice_confidence = voice.confidence();

        let regime = regime::select(face_confidence, self.config.face_confidence_threshold);
        let weights = self.config.weights_for(regime);
        let reasoning = regime::reasoning(
            regime,
            face_confidence,
            self.config.face_confidence_threshold,
        );

        debug!(
            %regime,
            face_confidence,
            voice_confidence,
            face_weight = weights.face,
            voice_weight = weights.voice,
            "selected fusion weights"
        );

        let mut fused = formula::weighted_union(face, voice, weights);
        fused.normalize();

        let record = DecisionRecord {
            face_confidence,
            voice_confidence,
            regime,
            weights_used: weights,
            reasoning,
        };

        Ok((fused, record))
    }
}
