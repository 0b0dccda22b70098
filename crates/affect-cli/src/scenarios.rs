use affect_core::EmotionDistribution;

/// A canned pair of detector outputs demonstrating one fusion behavior.
pub struct Scenario {
    /// Kebab-case identifier used with `--scenario`.
    pub id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// What the scenario demonstrates.
    pub summary: &'static str,
    face: &'static [(&'static str, f64)],
    voice: &'static [(&'static str, f64)],
}

impl Scenario {
    pub fn face_input(&self) -> EmotionDistribution {
        EmotionDistribution::from_scores(self.face.iter().map(|(label, score)| (*label, *score)))
    }

    pub fn voice_input(&self) -> EmotionDistribution {
        EmotionDistribution::from_scores(self.voice.iter().map(|(label, score)| (*label, *score)))
    }
}

/// The built-in demonstrations, in presentation order.
pub const SCENARIOS: [Scenario; 3] = [
    Scenario {
        id: "reliable-face",
        title: "Reliable Face",
        summary: "Face confidence is high, so the default face-leaning weights apply.",
        face: &[("happy", 0.9), ("neutral", 0.1)],
        voice: &[("neutral", 0.8), ("happy", 0.2)],
    },
    Scenario {
        id: "unreliable-face",
        title: "Unreliable Face",
        summary: "Face confidence falls below the threshold, so voice dominates and its angry reading wins.",
        face: &[("happy", 0.4), ("sad", 0.3), ("neutral", 0.3)],
        voice: &[("angry", 0.8), ("neutral", 0.2)],
    },
    Scenario {
        id: "ambiguous-edge",
        title: "Ambiguous Edge Case",
        summary: "Face confidence sits just below the threshold, so voice still decides the outcome.",
        face: &[("sad", 0.55), ("neutral", 0.45)],
        voice: &[("happy", 0.7), ("neutral", 0.3)],
    },
];

/// Look up a scenario by its id.
pub fn find(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|scenario| scenario.id == id)
}
