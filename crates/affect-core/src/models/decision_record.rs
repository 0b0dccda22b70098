use serde::{Deserialize, Serialize};

use crate::models::WeightPair;
use crate::regime::Regime;

/// Audit record explaining one fusion decision.
///
/// Carries everything needed to reconstruct why the engine weighted the
/// two channels the way it did. There are no timestamps or generated
/// ids: the same inputs always produce the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Confidence of the face distribution (its maximum score).
    pub face_confidence: f64,
    /// Confidence of the voice distribution (its maximum score).
    pub voice_confidence: f64,
    /// Weighting regime selected for this call.
    pub regime: Regime,
    /// The weights actually applied.
    pub weights_used: WeightPair,
    /// Human-readable explanation of the weighting choice.
    pub reasoning: String,
}
