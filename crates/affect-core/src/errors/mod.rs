pub mod fusion_error;

pub use fusion_error::FusionError;

/// Top-level error type for the affect workspace.
#[derive(Debug, thiserror::Error)]
pub enum AffectError {
    #[error("fusion error: {0}")]
    FusionError(#[from] FusionError),

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used across the workspace.
pub type AffectResult<T> = Result<T, AffectError>;
