//! Color types for sticker classification.
//!
//! - [`ColorLabel`]: the six sticker colors, each tied to a cube face
//! - [`Hsv8`] / [`MeanHsv`]: 8-bit HSV pixels and region averages

mod hsv;
mod label;

pub use hsv::{Hsv8, MeanHsv, HUE_RANGE};
pub use label::{ColorLabel, InvalidFaceletCode};
