//! Payload-to-labels entry points.

use crate::decode::{decode_base64_image, decode_image_bytes};
use crate::error::DecodeError;
use crate::sampler::{GridSampler, SampleOutcome};

/// Decode a base64 face photo and sample its nine stickers.
///
/// Either all nine labels are produced or decoding fails; there are no
/// partial results.
pub fn scan_base64(sampler: &GridSampler, payload: &str) -> Result<SampleOutcome, DecodeError> {
    let image = decode_base64_image(payload)?;
    Ok(sampler.sample(&image))
}

/// Decode raw image bytes (e.g. a file) and sample its nine stickers.
pub fn scan_bytes(sampler: &GridSampler, bytes: &[u8]) -> Result<SampleOutcome, DecodeError> {
    let image = decode_image_bytes(bytes)?;
    Ok(sampler.sample(&image))
}
