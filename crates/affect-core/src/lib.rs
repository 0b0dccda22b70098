//! # affect-core
//!
//! Foundation crate for the affect workspace. Defines the emotion
//! distribution model, the detector and fusion traits, errors, and
//! configuration that every other crate builds on.

pub mod config;
pub mod emotion;
pub mod errors;
pub mod modality;
pub mod models;
pub mod regime;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AffectConfig;
pub use emotion::EmotionDistribution;
pub use errors::{AffectError, AffectResult};
pub use modality::Modality;
pub use models::{DecisionRecord, WeightPair};
pub use regime::Regime;
