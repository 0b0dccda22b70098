// Canonical labels used by the built-in detectors and scenarios.
// The vocabulary stays open: distributions accept any label string.

pub const ANGRY: &str = "angry";
pub const DISGUSTED: &str = "disgusted";
pub const FEARFUL: &str = "fearful";
pub const HAPPY: &str = "happy";
pub const NEUTRAL: &str = "neutral";
pub const SAD: &str = "sad";
pub const SURPRISED: &str = "surprised";

/// The canonical labels, in sorted order.
pub const CANONICAL: [&str; 7] = [ANGRY, DISGUSTED, FEARFUL, HAPPY, NEUTRAL, SAD, SURPRISED];
