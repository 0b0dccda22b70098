//! # affect-detect
//!
//! Detector stubs implementing [`affect_core::traits::IEmotionDetector`].
//! These produce emotion distributions without doing any signal
//! processing: a fixed detector always reports the same distribution,
//! and a mock detector reports whatever was last set on it. Live sensor
//! adapters would implement the same trait.

pub mod fixed;
pub mod mock;

pub use fixed::FixedDetector;
pub use mock::MockDetector;

use affect_core::emotion::labels;
use affect_core::EmotionDistribution;

/// The fallback distribution a detector reports when it has nothing to
/// say: fully neutral.
pub fn neutral_distribution() -> EmotionDistribution {
    EmotionDistribution::from_scores([(labels::NEUTRAL, 1.0)])
}
