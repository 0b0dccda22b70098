use serde::{Deserialize, Serialize};
use std::fmt;

/// Weighting regime selected for one fusion call.
///
/// `Default` applies the standard face-leaning weights. `Uncertain` is
/// entered when face confidence falls below the configured threshold and
/// shifts most of the weight onto voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Default,
    Uncertain,
}

impl Regime {
    /// Total number of regimes.
    pub const COUNT: usize = 2;

    /// All variants for iteration.
    pub const ALL: [Regime; 2] = [Self::Default, Self::Uncertain];

    /// Lowercase label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
