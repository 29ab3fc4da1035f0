//! Error types for face image decoding.

use thiserror::Error;

/// Why an image payload could not become an image.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("empty image payload")]
    EmptyPayload,

    #[error("unrecognized image data: {0}")]
    UnrecognizedImage(#[from] image::ImageError),

    #[error("image has zero width or height")]
    EmptyImage,
}
