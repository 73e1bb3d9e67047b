use thiserror::Error;

/// Failures that can surface from the platform-free engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlassError {
    #[error("unknown theme name `{0}`")]
    UnknownTheme(String),
    #[error("unknown display mode `{0}`")]
    UnknownMode(String),
    #[error("unknown visual variant `{0}`")]
    UnknownVariant(String),
    #[error("unknown refraction mode `{0}`")]
    UnknownRefractionMode(String),
    #[error("frame task was cancelled")]
    Cancelled,
}
