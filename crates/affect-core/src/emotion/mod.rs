pub mod distribution;
pub mod labels;

pub use distribution::EmotionDistribution;
