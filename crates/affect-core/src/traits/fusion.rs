use crate::emotion::EmotionDistribution;
use crate::errors::AffectResult;
use crate::models::DecisionRecord;

/// The fusion capability: combine two modality distributions into one.
pub trait IFusionEngine: Send + Sync {
    /// Confidence metric for a distribution: its maximum score, 0.0 when
    /// empty.
    fn confidence(&self, distribution: &EmotionDistribution) -> f64;

    /// Fuse face and voice distributions, returning the fused
    /// distribution and the record explaining the weighting decision.
    fn fuse(
        &self,
        face: &EmotionDistribution,
        voice: &EmotionDistribution,
    ) -> AffectResult<(EmotionDistribution, DecisionRecord)>;
}
