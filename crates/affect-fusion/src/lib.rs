//! # affect-fusion
//!
//! Confidence-gated weighted fusion of face and voice emotion
//! distributions. Selects a weighting regime from face confidence,
//! blends the two channels over the union of their labels, normalizes
//! the result, and emits a decision record for every call.

pub mod engine;
pub mod formula;
pub mod regime;

pub use engine::FusionEngine;
