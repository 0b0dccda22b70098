use affect_core::Regime;

/// Select the weighting regime from face confidence.
///
/// The comparison is strictly `<`: confidence exactly at the threshold
/// keeps the default regime.
pub fn select(face_confidence: f64, threshold: f64) -> Regime {
    if face_confidence < threshold {
        Regime::Uncertain
    } else {
        Regime::Default
    }
}

/// Human-readable explanation of the regime choice.
pub fn reasoning(regime: Regime, face_confidence: f64, threshold: f64) -> String {
    match regime {
        Regime::Uncertain => {
            format!("Face confidence ({face_confidence:.2}) < {threshold}. Prioritizing Voice.")
        }
        Regime::Default => "Face confidence sufficient. Using standard weights.".to_string(),
    }
}
