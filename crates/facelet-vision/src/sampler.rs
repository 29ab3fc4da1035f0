//! Grid sampling of one face image into nine sticker labels.
//!
//! Two ways of placing the nine sample windows exist:
//!
//! - **Detected**: the [`ContourDetector`] found exactly nine sticker
//!   squares; one window is centered on each.
//! - **Fixed grid**: the face is assumed to fill the middle half of the
//!   frame (a quarter margin on every side). That region is split into 3x3
//!   equal cells and one window is centered on each cell.
//!
//! [`SamplingStrategy`] selects whether detection is attempted at all.

use image::RgbImage;

use crate::classify::{classify, is_fallback, FALLBACK_LABEL};
use crate::color::{ColorLabel, MeanHsv};
use crate::contour::{ContourDetector, DetectorConfig, StickerSquare};
use crate::face::FaceScan;
use crate::roi::Roi;

/// How sample windows are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingStrategy {
    /// Try contour detection; use the fixed grid unless exactly nine
    /// stickers were found.
    #[default]
    GeometricWithFallback,
    /// Always use the fixed grid; never run the detector.
    FixedGridOnly,
}

/// Where the windows of a scan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSource {
    Detected,
    FixedGrid,
}

/// Result of sampling one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOutcome {
    pub scan: FaceScan,
    pub source: SampleSource,
    /// Row-major; `true` where no rule matched and the label is
    /// [`FALLBACK_LABEL`] by default rather than by color.
    pub fallback: [bool; 9],
}

impl SampleOutcome {
    /// Number of stickers that got the fallback label.
    pub fn fallback_count(&self) -> usize {
        self.fallback.iter().filter(|&&f| f).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    pub strategy: SamplingStrategy,
    /// Side length of each square sample window in pixels.
    pub roi_size: u32,
    pub detector: DetectorConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            strategy: SamplingStrategy::default(),
            roi_size: 40,
            detector: DetectorConfig::default(),
        }
    }
}

/// Samples nine sticker labels from a face image.
///
/// Holds only immutable configuration; one sampler can serve any number of
/// images concurrently.
#[derive(Debug, Clone)]
pub struct GridSampler {
    strategy: SamplingStrategy,
    roi_half: u32,
    detector: ContourDetector,
}

impl GridSampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            strategy: config.strategy,
            roi_half: (config.roi_size / 2).max(1),
            detector: ContourDetector::new(config.detector),
        }
    }

    pub fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    pub fn detector(&self) -> &ContourDetector {
        &self.detector
    }

    /// Classify the nine stickers of `image`.
    pub fn sample(&self, image: &RgbImage) -> SampleOutcome {
        let (rois, source) = match self.strategy {
            SamplingStrategy::GeometricWithFallback => match self.detector.locate_grid(image) {
                Some(squares) => (self.detected_rois(&squares, image), SampleSource::Detected),
                None => (self.fixed_grid_rois(image), SampleSource::FixedGrid),
            },
            SamplingStrategy::FixedGridOnly => {
                (self.fixed_grid_rois(image), SampleSource::FixedGrid)
            }
        };

        let classified: [(ColorLabel, bool); 9] = rois.map(|roi| match roi {
            Some(roi) => {
                let hsv = MeanHsv::of_pixels(roi.pixels(image));
                (classify(&hsv), is_fallback(&hsv))
            }
            None => (FALLBACK_LABEL, true),
        });

        SampleOutcome {
            scan: FaceScan::new(classified.map(|(label, _)| label)),
            source,
            fallback: classified.map(|(_, fallback)| fallback),
        }
    }

    /// Windows centered on the cells of the middle-half 3x3 grid.
    pub fn fixed_grid_rois(&self, image: &RgbImage) -> [Option<Roi>; 9] {
        let (width, height) = image.dimensions();
        let margin_x = width / 4;
        let margin_y = height / 4;
        let cell_w = (width / 2) / 3;
        let cell_h = (height / 2) / 3;

        std::array::from_fn(|i| {
            let (row, col) = ((i / 3) as u32, (i % 3) as u32);
            let cx = margin_x + col * cell_w + cell_w / 2;
            let cy = margin_y + row * cell_h + cell_h / 2;
            Roi::around(cx, cy, self.roi_half, width, height)
        })
    }

    /// Windows centered on detected stickers, shrunk to fit inside each one.
    fn detected_rois(&self, squares: &[StickerSquare; 9], image: &RgbImage) -> [Option<Roi>; 9] {
        let (width, height) = image.dimensions();
        squares.map(|square| {
            let (cx, cy) = square.center();
            let half = self
                .roi_half
                .min(square.width / 2)
                .min(square.height / 2)
                .max(1);
            Roi::around(cx, cy, half, width, height)
        })
    }
}

impl Default for GridSampler {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}
