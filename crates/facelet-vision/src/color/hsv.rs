//! 8-bit HSV quantization and region averaging.
//!
//! Hue is expressed on the half-circle scale `0..180` (degrees / 2) and
//! saturation/value on `0..=255`, the layout camera tooling conventionally
//! uses for 8-bit HSV images. Each pixel is quantized before averaging so a
//! region's mean matches what an 8-bit HSV image would produce.

use image::Rgb;
use palette::{FromColor, Hsv, Srgb};

/// Exclusive upper bound of the half-circle hue scale.
pub const HUE_RANGE: u8 = 180;

/// One pixel in 8-bit HSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv8 {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv8 {
    pub fn from_rgb(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        let hsv: Hsv = Hsv::from_color(Srgb::new(r, g, b).into_format::<f32>());

        let mut h = (hsv.hue.into_positive_degrees() / 2.0).round() as u16;
        if h >= HUE_RANGE as u16 {
            h -= HUE_RANGE as u16;
        }

        Self {
            h: h as u8,
            s: to_byte(hsv.saturation),
            v: to_byte(hsv.value),
        }
    }
}

fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Channel-wise spatial mean of a region in 8-bit HSV units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeanHsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl MeanHsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Average the quantized HSV of every pixel.
    ///
    /// An empty region averages to all zeros.
    pub fn of_pixels<I>(pixels: I) -> Self
    where
        I: IntoIterator<Item = Rgb<u8>>,
    {
        let (mut h, mut s, mut v, mut count) = (0u64, 0u64, 0u64, 0u64);
        for pixel in pixels {
            let hsv = Hsv8::from_rgb(pixel);
            h += hsv.h as u64;
            s += hsv.s as u64;
            v += hsv.v as u64;
            count += 1;
        }

        if count == 0 {
            return Self::default();
        }

        let n = count as f64;
        Self {
            h: h as f64 / n,
            s: s as f64 / n,
            v: v as f64 / n,
        }
    }
}
