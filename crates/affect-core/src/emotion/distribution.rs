use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A distribution of emotion scores keyed by label.
///
/// The vocabulary is open: any label string is accepted, and the scores
/// are not required to sum to 1.0. Scores are expected to be
/// non-negative; the fusion engine rejects distributions that are not.
///
/// Backed by a `BTreeMap` so iteration order (and therefore summation
/// order) is fixed by label, keeping every derived quantity reproducible
/// across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionDistribution {
    scores: BTreeMap<String, f64>,
}

impl EmotionDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a distribution from label/score pairs.
    pub fn from_scores<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            scores: scores
                .into_iter()
                .map(|(label, score)| (label.into(), score))
                .collect(),
        }
    }

    /// Set the score for a label, inserting the label if absent.
    pub fn set(&mut self, label: impl Into<String>, score: f64) {
        self.scores.insert(label.into(), score);
    }

    /// Score for a label, 0.0 when the label is absent.
    pub fn score(&self, label: &str) -> f64 {
        self.scores.get(label).copied().unwrap_or(0.0)
    }

    /// Whether the label is present.
    pub fn contains(&self, label: &str) -> bool {
        self.scores.contains_key(label)
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.scores.keys().map(String::as_str)
    }

    /// (label, score) pairs in sorted label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores
            .iter()
            .map(|(label, score)| (label.as_str(), *score))
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the distribution carries no labels at all.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores, accumulated in label order.
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    /// Confidence metric: the maximum score.
    ///
    /// An empty distribution has confidence 0.0. No normalization is
    /// applied, so an unnormalized input can report confidence above 1.0.
    pub fn confidence(&self) -> f64 {
        if self.scores.is_empty() {
            0.0
        } else {
            self.scores
                .values()
                .fold(f64::NEG_INFINITY, |max, &v| max.max(v))
        }
    }

    /// Label with the highest score, or `None` for an empty distribution.
    ///
    /// Exact ties keep the first label in sorted order.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (label, &score) in &self.scores {
            let replace = match best {
                Some((_, best_score)) => score > best_score,
                None => true,
            };
            if replace {
                best = Some((label.as_str(), score));
            }
        }
        best
    }

    /// Scale scores in place so they sum to 1.0.
    ///
    /// Divides every score by the raw total. When the total is not
    /// strictly positive (empty or all-zero distribution) the scores are
    /// left untouched.
    pub fn normalize(&mut self) {
        let total = self.total();
        if total > 0.0 {
            for score in self.scores.values_mut() {
                *score /= total;
            }
        }
    }

    /// Consume the distribution, returning the underlying map.
    pub fn into_scores(self) -> BTreeMap<String, f64> {
        self.scores
    }
}

impl From<BTreeMap<String, f64>> for EmotionDistribution {
    fn from(scores: BTreeMap<String, f64>) -> Self {
        Self { scores }
    }
}

impl fmt::Display for EmotionDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, score)) in self.scores.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label}: {score:.3}")?;
        }
        write!(f, "}}")
    }
}
