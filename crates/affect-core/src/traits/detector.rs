use crate::emotion::EmotionDistribution;
use crate::modality::Modality;

/// A source of emotion estimates for one modality.
///
/// Detectors are infallible at this boundary: a detector with nothing to
/// report returns its fallback distribution rather than an error.
pub trait IEmotionDetector: Send + Sync {
    /// Produce the current emotion distribution.
    fn detect(&self) -> EmotionDistribution;

    /// The modality this detector observes.
    fn modality(&self) -> Modality;

    /// Human-readable detector name.
    fn name(&self) -> &str;
}
