//! Geometric sticker localization.
//!
//! Finds near-square outlines in a face photo:
//!
//! ```text
//! RGB -> gray -> canny edges -> outer contours
//!     -> polygon approximation -> 4-vertex, size and aspect filter
//! ```
//!
//! When exactly nine squares survive the filter they are taken to be the
//! stickers of one face and arranged in row-major order.

use image::{imageops, GrayImage, RgbImage};
use imageproc::contours::{find_contours, BorderType};
use imageproc::edges::canny;
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;

/// Thresholds for the square detector.
///
/// Areas are in square pixels of the canonical-resolution image.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Hysteresis thresholds on gradient magnitude. imageproc's `canny`
    /// smooths internally, so no separate blur precedes it.
    pub canny_low: f32,
    pub canny_high: f32,
    /// Polygon approximation tolerance as a fraction of the contour perimeter.
    pub epsilon_ratio: f64,
    /// Inclusive bounds on bounding-box area.
    pub min_area: u32,
    pub max_area: u32,
    /// Inclusive bounds on bounding-box width / height.
    pub min_aspect: f64,
    pub max_aspect: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            // low enough for red and blue stickers on a black body, whose
            // luma differs from black by only ~40 levels
            canny_low: 20.0,
            canny_high: 60.0,
            epsilon_ratio: 0.04,
            min_area: 2_000,
            max_area: 50_000,
            min_aspect: 0.8,
            max_aspect: 1.2,
        }
    }
}

/// Axis-aligned bounding box of a detected sticker outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickerSquare {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl StickerSquare {
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Bounding box of a polygon, counting pixels inclusively on both ends.
    pub fn bounding(polygon: &[Point<i32>]) -> Option<Self> {
        let min_x = polygon.iter().map(|p| p.x).min()?.max(0);
        let max_x = polygon.iter().map(|p| p.x).max()?.max(0);
        let min_y = polygon.iter().map(|p| p.y).min()?.max(0);
        let max_y = polygon.iter().map(|p| p.y).max()?.max(0);

        Some(Self {
            x: min_x as u32,
            y: min_y as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }
}

/// Edge-based square detector.
#[derive(Debug, Clone, Default)]
pub struct ContourDetector {
    config: DetectorConfig,
}

impl ContourDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Binary edge map of `image`.
    pub fn edges(&self, image: &RgbImage) -> GrayImage {
        let gray = imageops::grayscale(image);
        canny(&gray, self.config.canny_low, self.config.canny_high)
    }

    /// All sticker-like squares in `image`, in contour discovery order.
    pub fn detect(&self, image: &RgbImage) -> Vec<StickerSquare> {
        let edges = self.edges(image);

        find_contours::<i32>(&edges)
            .into_iter()
            .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
            .filter_map(|c| {
                let polygon = self.approximate(&c.points)?;
                self.square_from_polygon(&polygon)
            })
            .collect()
    }

    /// The nine stickers of a face in row-major order, if exactly nine
    /// squares were detected.
    pub fn locate_grid(&self, image: &RgbImage) -> Option<[StickerSquare; 9]> {
        arrange_row_major(self.detect(image))
    }

    /// Approximate a closed contour by a polygon.
    fn approximate(&self, points: &[Point<i32>]) -> Option<Vec<Point<i32>>> {
        if points.len() < 4 {
            return None;
        }
        let epsilon = self.config.epsilon_ratio * arc_length(points, true);
        if epsilon <= 0.0 {
            return None;
        }
        Some(simplify_closed(points, epsilon))
    }

    /// Accept a polygon as a sticker if it is a small-to-medium quadrilateral
    /// with a near-square bounding box.
    pub fn square_from_polygon(&self, polygon: &[Point<i32>]) -> Option<StickerSquare> {
        if polygon.len() != 4 {
            return None;
        }

        let square = StickerSquare::bounding(polygon)?;
        let area = square.area();
        let aspect = square.aspect_ratio();

        let area_ok = (self.config.min_area..=self.config.max_area).contains(&area);
        let aspect_ok = self.config.min_aspect <= aspect && aspect <= self.config.max_aspect;

        (area_ok && aspect_ok).then_some(square)
    }
}

/// Douglas-Peucker simplification of a closed curve.
///
/// The curve is split at the point farthest from its first point and each
/// half simplified as an open curve, so the arbitrary start point of a
/// traced contour only survives if it is a real corner. Vertices lying
/// within `epsilon` of the line through their neighbors are then dropped.
pub fn simplify_closed(points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    let Some(&start) = points.first() else {
        return Vec::new();
    };

    let far = points
        .iter()
        .enumerate()
        .max_by_key(|(_, p)| squared_distance(start, **p))
        .map_or(0, |(i, _)| i);
    if far == 0 {
        return vec![start];
    }

    let first = approximate_polygon_dp(&points[..=far], epsilon, false);
    let mut back_half = points[far..].to_vec();
    back_half.push(start);
    let second = approximate_polygon_dp(&back_half, epsilon, false);

    let mut polygon: Vec<Point<i32>> = Vec::with_capacity(first.len() + second.len());
    for p in first.into_iter().chain(second) {
        if polygon.last() != Some(&p) {
            polygon.push(p);
        }
    }
    if polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }

    drop_flat_vertices(polygon, epsilon)
}

fn drop_flat_vertices(mut polygon: Vec<Point<i32>>, epsilon: f64) -> Vec<Point<i32>> {
    while polygon.len() > 3 {
        let n = polygon.len();
        let flat = (0..n).find(|&i| {
            let prev = polygon[(i + n - 1) % n];
            let next = polygon[(i + 1) % n];
            distance_to_line(polygon[i], prev, next) <= epsilon
        });
        match flat {
            Some(i) => {
                polygon.remove(i);
            }
            None => break,
        }
    }
    polygon
}

fn squared_distance(a: Point<i32>, b: Point<i32>) -> i64 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    dx * dx + dy * dy
}

fn distance_to_line(p: Point<i32>, a: Point<i32>, b: Point<i32>) -> f64 {
    let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let length = dx.hypot(dy);
    if length == 0.0 {
        return ((p.x - a.x) as f64).hypot((p.y - a.y) as f64);
    }
    (dx * (a.y - p.y) as f64 - dy * (a.x - p.x) as f64).abs() / length
}

/// Arrange exactly nine squares top-to-bottom, then left-to-right per row.
pub fn arrange_row_major(mut squares: Vec<StickerSquare>) -> Option<[StickerSquare; 9]> {
    if squares.len() != 9 {
        return None;
    }

    squares.sort_by_key(|s| {
        let (cx, cy) = s.center();
        (cy, cx)
    });
    for row in squares.chunks_mut(3) {
        row.sort_by_key(|s| s.center().0);
    }

    squares.try_into().ok()
}
