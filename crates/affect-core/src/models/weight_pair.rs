use serde::{Deserialize, Serialize};

/// The pair of modality weights applied during one fusion call.
///
/// Weights are multipliers, not probabilities: they must be non-negative
/// but need not sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    pub face: f64,
    pub voice: f64,
}

impl WeightPair {
    pub fn new(face: f64, voice: f64) -> Self {
        Self { face, voice }
    }

    /// Weighted sum of one label's face and voice scores.
    pub fn blend(&self, face_score: f64, voice_score: f64) -> f64 {
        face_score * self.face + voice_score * self.voice
    }
}
