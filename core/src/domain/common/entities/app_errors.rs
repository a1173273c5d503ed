use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Unsupported image type: {0}")]
    UnsupportedMediaType(String),

    #[error("Image too large: {size} bytes (max {max} bytes)")]
    ImageTooLarge { size: usize, max: usize },

    #[error("Invalid facing mode: {0}")]
    InvalidFacingMode(String),

    #[error("{0}")]
    MissingCredential(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
