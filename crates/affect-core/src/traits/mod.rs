pub mod detector;
pub mod fusion;

pub use detector::IEmotionDetector;
pub use fusion::IFusionEngine;
