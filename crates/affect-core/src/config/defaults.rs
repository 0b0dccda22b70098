// Single source of truth for all default values.

// --- Fusion ---
pub const DEFAULT_FACE_WEIGHT: f64 = 0.6;
pub const DEFAULT_VOICE_WEIGHT: f64 = 0.4;
pub const DEFAULT_FACE_CONFIDENCE_THRESHOLD: f64 = 0.6;
pub const DEFAULT_UNCERTAIN_FACE_WEIGHT: f64 = 0.2;
pub const DEFAULT_UNCERTAIN_VOICE_WEIGHT: f64 = 0.8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
