use crate::modality::Modality;

/// Fusion subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum FusionError {
    #[error("invalid {modality} distribution: label {label:?} has score {score}")]
    InvalidDistribution {
        modality: Modality,
        label: String,
        score: f64,
    },
}
