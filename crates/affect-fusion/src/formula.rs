use std::collections::BTreeMap;

use affect_core::errors::FusionError;
use affect_core::{EmotionDistribution, Modality, WeightPair};

/// Reject distributions carrying negative or NaN scores.
///
/// The first offending label in sorted order is reported, so the error
/// is deterministic.
pub fn validate(distribution: &EmotionDistribution, modality: Modality) -> Result<(), FusionError> {
    for (label, score) in distribution.iter() {
        if score < 0.0 || score.is_nan() {
            return Err(FusionError::InvalidDistribution {
                modality,
                label: label.to_string(),
                score,
            });
        }
    }
    Ok(())
}

/// Blend two distributions over the union of their labels.
///
/// A label missing from one channel contributes 0.0 for that channel, so
/// no label is ever dropped. Labels accumulate in sorted order.
pub fn weighted_union(
    face: &EmotionDistribution,
    voice: &EmotionDistribution,
    weights: WeightPair,
) -> EmotionDistribution {
    let mut fused: BTreeMap<String, f64> = BTreeMap::new();

    for (label, face_score) in face.iter() {
        fused.insert(
            label.to_string(),
            weights.blend(face_score, voice.score(label)),
        );
    }
    for (label, voice_score) in voice.iter() {
        fused
            .entry(label.to_string())
            .or_insert_with(|| weights.blend(0.0, voice_score));
    }

    EmotionDistribution::from(fused)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(pairs: &[(&str, f64)]) -> EmotionDistribution {
        EmotionDistribution::from_scores(pairs.iter().map(|(label, score)| (*label, *score)))
    }

    #[test]
    fn union_keeps_labels_from_both_channels() {
        let face = dist(&[("happy", 0.4)]);
        let voice = dist(&[("angry", 0.8)]);
        let fused = weighted_union(&face, &voice, WeightPair::new(0.5, 0.5));
        assert!(fused.contains("happy"));
        assert!(fused.contains("angry"));
    }

    #[test]
    fn missing_label_contributes_zero() {
        let face = dist(&[("happy", 1.0)]);
        let voice = dist(&[("sad", 1.0)]);
        let fused = weighted_union(&face, &voice, WeightPair::new(0.6, 0.4));
        assert!((fused.score("happy") - 0.6).abs() < 1e-9);
        assert!((fused.score("sad") - 0.4).abs() < 1e-9);
    }

    #[test]
    fn shared_label_blends_both_scores() {
        let face = dist(&[("neutral", 0.5)]);
        let voice = dist(&[("neutral", 0.3)]);
        let fused = weighted_union(&face, &voice, WeightPair::new(0.6, 0.4));
        assert!((fused.score("neutral") - 0.42).abs() < 1e-9);
    }

    #[test]
    fn validate_accepts_non_negative_scores() {
        let d = dist(&[("happy", 0.0), ("sad", 1.5)]);
        assert!(validate(&d, Modality::Face).is_ok());
    }

    #[test]
    fn validate_rejects_negative_score() {
        let d = dist(&[("happy", 0.5), ("angry", -0.1)]);
        let err = validate(&d, Modality::Face).unwrap_err();
        match err {
            FusionError::InvalidDistribution {
                modality,
                label,
                score,
            } => {
                assert_eq!(modality, Modality::Face);
                assert_eq!(label, "angry");
                assert_eq!(score, -0.1);
            }
        }
    }

    #[test]
    fn validate_rejects_nan_score() {
        let d = dist(&[("happy", f64::NAN)]);
        assert!(validate(&d, Modality::Voice).is_err());
    }

    #[test]
    fn validate_reports_first_offender_in_sorted_order() {
        let d = dist(&[("sad", -0.5), ("angry", -0.2)]);
        let err = validate(&d, Modality::Face).unwrap_err();
        match err {
            FusionError::InvalidDistribution { label, .. } => assert_eq!(label, "angry"),
        }
    }
}
