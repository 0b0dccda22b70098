use std::collections::BTreeSet;

use affect_core::traits::IFusionEngine;
use affect_core::EmotionDistribution;
use affect_fusion::FusionEngine;
use proptest::prelude::*;

fn arb_distribution() -> impl Strategy<Value = EmotionDistribution> {
    prop::collection::btree_map("[a-z]{1,8}", 0.0f64..10.0, 0..8).prop_map(EmotionDistribution::from)
}

// ── Fusion is total over well-formed inputs ──────────────────────────────

proptest! {
    #[test]
    fn fuse_accepts_all_non_negative_inputs(
        face in arb_distribution(),
        voice in arb_distribution(),
    ) {
        let engine = FusionEngine::new();
        prop_assert!(engine.fuse(&face, &voice).is_ok());
    }
}

// ── Normalization: positive mass sums to 1.0, zero mass stays zero ───────

proptest! {
    #[test]
    fn fused_total_is_one_when_inputs_carry_mass(
        face in arb_distribution(),
        voice in arb_distribution(),
    ) {
        let engine = FusionEngine::new();
        let (fused, _) = engine.fuse(&face, &voice).unwrap();

        let input_mass = face.total() + voice.total();
        if input_mass > 1e-12 {
            prop_assert!(
                (fused.total() - 1.0).abs() < 1e-9,
                "fused total = {}",
                fused.total()
            );
        } else if input_mass == 0.0 {
            prop_assert_eq!(fused.total(), 0.0);
        }
    }
}

// ── Label completeness: fused labels are exactly the union ───────────────

proptest! {
    #[test]
    fn fused_labels_equal_union_of_inputs(
        face in arb_distribution(),
        voice in arb_distribution(),
    ) {
        let engine = FusionEngine::new();
        let (fused, _) = engine.fuse(&face, &voice).unwrap();

        let mut expected: BTreeSet<&str> = face.labels().collect();
        expected.extend(voice.labels());
        let got: BTreeSet<&str> = fused.labels().collect();
        prop_assert_eq!(got, expected);
    }
}

// ── Regime is a function of face confidence alone ────────────────────────

proptest! {
    #[test]
    fn regime_ignores_voice_input(
        face in arb_distribution(),
        voice_a in arb_distribution(),
        voice_b in arb_distribution(),
    ) {
        let engine = FusionEngine::new();
        let (_, record_a) = engine.fuse(&face, &voice_a).unwrap();
        let (_, record_b) = engine.fuse(&face, &voice_b).unwrap();

        prop_assert_eq!(record_a.regime, record_b.regime);
        prop_assert_eq!(record_a.weights_used, record_b.weights_used);
        prop_assert_eq!(&record_a.reasoning, &record_b.reasoning);
    }
}

// ── Determinism: identical inputs, identical outputs ─────────────────────

proptest! {
    #[test]
    fn fuse_is_deterministic(
        face in arb_distribution(),
        voice in arb_distribution(),
    ) {
        let engine = FusionEngine::new();
        let (fused_a, record_a) = engine.fuse(&face, &voice).unwrap();
        let (fused_b, record_b) = engine.fuse(&face, &voice).unwrap();

        prop_assert_eq!(fused_a, fused_b);
        prop_assert_eq!(record_a, record_b);
    }
}

// ── Confidence: maximum score, 0.0 only for empty or all-zero input ──────

proptest! {
    #[test]
    fn confidence_matches_maximum_score(dist in arb_distribution()) {
        let engine = FusionEngine::new();
        let confidence = engine.confidence(&dist);

        let max = dist
            .iter()
            .map(|(_, score)| score)
            .fold(None::<f64>, |acc, score| {
                Some(acc.map_or(score, |m| m.max(score)))
            });
        match max {
            Some(max) => prop_assert_eq!(confidence, max),
            None => prop_assert_eq!(confidence, 0.0),
        }
    }
}

proptest! {
    #[test]
    fn record_confidences_match_input_confidences(
        face in arb_distribution(),
        voice in arb_distribution(),
    ) {
        let engine = FusionEngine::new();
        let (_, record) = engine.fuse(&face, &voice).unwrap();

        prop_assert_eq!(record.face_confidence, face.confidence());
        prop_assert_eq!(record.voice_confidence, voice.confidence());
    }
}
