//! Sticker color classification from mean HSV.
//!
//! Classification is an ordered decision list: rules are tried in sequence
//! and the first matching rule decides the label. The hue bands of the
//! colored rules do not overlap, but the white rule (low saturation) is
//! tried first and wins over any hue, and the red rule owns both ends of the
//! hue circle. Reordering the list changes results for edge cases.
//!
//! ```text
//! 1. s < 30 and v > 100                 -> Up    (white)
//! 2. (h < 10 or h > 160) and s > 50     -> Right (red)
//! 3. 10 <= h < 25 and s > 50            -> Left  (orange)
//! 4. 25 <= h < 35 and s > 50            -> Down  (yellow)
//! 5. 35 <= h < 85 and s > 50            -> Front (green)
//! 6. 85 <= h < 130 and s > 50           -> Back  (blue)
//! otherwise                             -> Up    (white)
//! ```

use image::RgbImage;

use crate::color::{ColorLabel, MeanHsv};
use crate::roi::Roi;

/// Label returned when no rule matches.
///
/// Anything unmatched (dim grays, near-black, saturated purples in
/// `130..=160`, weakly saturated colors with `30 <= s <= 50`) is reported as
/// white. Cubes have no gray or black stickers, so an unmatched region
/// usually means a missed sticker or a gap rather than a white one; callers
/// should treat a fallback label as low-confidence.
pub const FALLBACK_LABEL: ColorLabel = ColorLabel::Up;

/// One entry of the decision list.
#[derive(Clone, Copy)]
pub struct Rule {
    pub label: ColorLabel,
    pub matches: fn(&MeanHsv) -> bool,
}

/// The decision list, in evaluation order.
pub const RULES: [Rule; 6] = [
    Rule {
        label: ColorLabel::Up,
        matches: is_white,
    },
    Rule {
        label: ColorLabel::Right,
        matches: is_red,
    },
    Rule {
        label: ColorLabel::Left,
        matches: is_orange,
    },
    Rule {
        label: ColorLabel::Down,
        matches: is_yellow,
    },
    Rule {
        label: ColorLabel::Front,
        matches: is_green,
    },
    Rule {
        label: ColorLabel::Back,
        matches: is_blue,
    },
];

const MAX_WHITE_SATURATION: f64 = 30.0;
const MIN_WHITE_VALUE: f64 = 100.0;
const MIN_COLOR_SATURATION: f64 = 50.0;

fn is_white(hsv: &MeanHsv) -> bool {
    hsv.s < MAX_WHITE_SATURATION && hsv.v > MIN_WHITE_VALUE
}

fn is_red(hsv: &MeanHsv) -> bool {
    (hsv.h < 10.0 || hsv.h > 160.0) && hsv.s > MIN_COLOR_SATURATION
}

fn is_orange(hsv: &MeanHsv) -> bool {
    in_hue_band(hsv, 10.0, 25.0)
}

fn is_yellow(hsv: &MeanHsv) -> bool {
    in_hue_band(hsv, 25.0, 35.0)
}

fn is_green(hsv: &MeanHsv) -> bool {
    in_hue_band(hsv, 35.0, 85.0)
}

fn is_blue(hsv: &MeanHsv) -> bool {
    in_hue_band(hsv, 85.0, 130.0)
}

fn in_hue_band(hsv: &MeanHsv, from: f64, to: f64) -> bool {
    from <= hsv.h && hsv.h < to && hsv.s > MIN_COLOR_SATURATION
}

/// Classify a region by its mean HSV. Never fails.
pub fn classify(hsv: &MeanHsv) -> ColorLabel {
    RULES
        .iter()
        .find(|rule| (rule.matches)(hsv))
        .map_or(FALLBACK_LABEL, |rule| rule.label)
}

/// Whether `hsv` falls through every rule and gets [`FALLBACK_LABEL`].
pub fn is_fallback(hsv: &MeanHsv) -> bool {
    !RULES.iter().any(|rule| (rule.matches)(hsv))
}

/// Classify the pixels of `roi` in `image`.
pub fn classify_roi(image: &RgbImage, roi: &Roi) -> ColorLabel {
    classify(&MeanHsv::of_pixels(roi.pixels(image)))
}
