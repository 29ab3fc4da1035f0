//! Image payload decoding.
//!
//! Payloads arrive as base64 text, usually straight from a browser canvas
//! (`data:image/jpeg;base64,...`). Decoded images are resized to a fixed
//! canonical resolution so downstream geometry can use absolute pixel
//! thresholds.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{imageops::FilterType, RgbImage};

use crate::error::DecodeError;

/// Side length of the canonical square resolution.
pub const CANONICAL_SIZE: u32 = 600;

/// Strip an optional data-URI header (`data:<mime>;base64,`).
///
/// Everything up to and including the first comma is treated as header.
pub fn strip_data_uri(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, data)) => data,
        None => payload,
    }
}

/// Decode a base64 image payload to a canonical-resolution RGB image.
///
/// ASCII whitespace anywhere in the base64 body is ignored, so MIME-style
/// line-wrapped payloads decode. Any other non-alphabet byte is an error.
pub fn decode_base64_image(payload: &str) -> Result<RgbImage, DecodeError> {
    let data: String = strip_data_uri(payload.trim())
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(data)?;
    decode_image_bytes(&bytes)
}

/// Decode raw encoded image bytes to a canonical-resolution RGB image.
pub fn decode_image_bytes(bytes: &[u8]) -> Result<RgbImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let decoded = image::load_from_memory(bytes)?;
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(DecodeError::EmptyImage);
    }

    Ok(decoded
        .resize_exact(CANONICAL_SIZE, CANONICAL_SIZE, FilterType::Triangle)
        .to_rgb8())
}
