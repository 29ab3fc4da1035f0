//! facelet-vision: sticker colors from photos of Rubik's Cube faces
//!
//! Turns one photographed face into nine sticker labels:
//!
//! ```text
//! base64 payload
//!     |
//!     v
//! decode ---------------> 600x600 RGB image
//!     |
//!     v
//! sampler --(strategy)--> contour detector: exactly 9 squares?
//!     |                      yes: one window per detected sticker
//!     |                      no:  fixed 3x3 grid over the middle half
//!     v
//! classify (x9) --------> mean HSV -> ordered decision list -> ColorLabel
//!     |
//!     v
//! FaceScan (row-major)
//! ```
//!
//! # Example
//!
//! ```
//! use facelet_vision::{ColorLabel, FaceScan, GridSampler};
//! use image::{Rgb, RgbImage};
//!
//! let image = RgbImage::from_pixel(600, 600, Rgb([0, 69, 173]));
//! let outcome = GridSampler::default().sample(&image);
//! assert_eq!(outcome.scan, FaceScan::uniform(ColorLabel::Back));
//! ```
//!
//! Everything here is a pure function of its input. There is no shared
//! state between calls and nothing is cached.

pub mod classify;
pub mod color;
pub mod contour;
pub mod decode;
pub mod error;
pub mod face;
pub mod pipeline;
pub mod roi;
pub mod sampler;

pub use classify::{classify, classify_roi, is_fallback, FALLBACK_LABEL};
pub use color::{ColorLabel, Hsv8, InvalidFaceletCode, MeanHsv};
pub use contour::{ContourDetector, DetectorConfig, StickerSquare};
pub use decode::{decode_base64_image, decode_image_bytes, CANONICAL_SIZE};
pub use error::DecodeError;
pub use face::{FaceScan, ParseFaceError};
pub use pipeline::{scan_base64, scan_bytes};
pub use roi::Roi;
pub use sampler::{GridSampler, SampleOutcome, SampleSource, SamplerConfig, SamplingStrategy};
