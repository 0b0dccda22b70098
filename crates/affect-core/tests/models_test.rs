use affect_core::{DecisionRecord, Modality, Regime, WeightPair};

#[test]
fn weight_pair_blend_is_weighted_sum() {
    let weights = WeightPair::new(0.6, 0.4);
    assert!((weights.blend(0.9, 0.2) - 0.62).abs() < 1e-9);
    assert_eq!(weights.blend(0.0, 0.0), 0.0);
}

#[test]
fn decision_record_serializes_with_expected_keys() {
    let record = DecisionRecord {
        face_confidence: 0.9,
        voice_confidence: 0.8,
        regime: Regime::Default,
        weights_used: WeightPair::new(0.6, 0.4),
        reasoning: "Face confidence sufficient. Using standard weights.".to_string(),
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["face_confidence"], 0.9);
    assert_eq!(value["voice_confidence"], 0.8);
    assert_eq!(value["regime"], "default");
    assert_eq!(value["weights_used"]["face"], 0.6);
    assert_eq!(value["weights_used"]["voice"], 0.4);
    assert_eq!(
        value["reasoning"],
        "Face confidence sufficient. Using standard weights."
    );
}

#[test]
fn decision_record_roundtrips_through_json() {
    let record = DecisionRecord {
        face_confidence: 0.4,
        voice_confidence: 0.8,
        regime: Regime::Uncertain,
        weights_used: WeightPair::new(0.2, 0.8),
        reasoning: "Face confidence (0.40) < 0.6. Prioritizing Voice.".to_string(),
    };
    let json = serde_json::to_string(&record).unwrap();
    let parsed: DecisionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
}

// ── Enum surfaces ────────────────────────────────────────────────────────

#[test]
fn modality_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Modality::Face).unwrap(), "face");
    assert_eq!(serde_json::to_value(Modality::Voice).unwrap(), "voice");
}

#[test]
fn regime_serializes_snake_case() {
    assert_eq!(serde_json::to_value(Regime::Default).unwrap(), "default");
    assert_eq!(serde_json::to_value(Regime::Uncertain).unwrap(), "uncertain");
}

#[test]
fn modality_display_matches_as_str() {
    for modality in Modality::ALL {
        assert_eq!(modality.to_string(), modality.as_str());
    }
    assert_eq!(Modality::ALL.len(), Modality::COUNT);
}

#[test]
fn regime_display_matches_as_str() {
    for regime in Regime::ALL {
        assert_eq!(regime.to_string(), regime.as_str());
    }
    assert_eq!(Regime::ALL.len(), Regime::COUNT);
}
