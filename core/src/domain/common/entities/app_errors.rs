use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("image is {size} bytes, limit is {limit} bytes")]
    ImageTooLarge { size: usize, limit: usize },

    #[error("unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("no text detected in image")]
    NoTextDetected,

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("internal server error")]
    InternalServerError,
}
