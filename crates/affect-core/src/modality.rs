use serde::{Deserialize, Serialize};
use std::fmt;

/// The two input channels the fusion engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Face,
    Voice,
}

impl Modality {
    /// Total number of modalities.
    pub const COUNT: usize = 2;

    /// All variants for iteration.
    pub const ALL: [Modality; 2] = [Self::Face, Self::Voice];

    /// Lowercase label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Voice => "voice",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
