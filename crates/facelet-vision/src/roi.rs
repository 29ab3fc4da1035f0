//! Rectangular regions of interest.

use image::{Rgb, RgbImage};

/// A non-empty rectangle of pixels, `[x, x + width) x [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roi {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Roi {
    /// Returns `None` for a zero-area rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// A square of side `2 * half_size` centered on `(center_x, center_y)`,
    /// clamped to an image of `image_width` x `image_height`.
    ///
    /// Returns `None` if nothing of the square lies inside the image.
    pub fn around(
        center_x: u32,
        center_y: u32,
        half_size: u32,
        image_width: u32,
        image_height: u32,
    ) -> Option<Self> {
        let x0 = center_x.saturating_sub(half_size).min(image_width);
        let y0 = center_y.saturating_sub(half_size).min(image_height);
        let x1 = center_x.saturating_add(half_size).min(image_width);
        let y1 = center_y.saturating_add(half_size).min(image_height);

        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Pixels of `image` inside this region, row by row.
    ///
    /// Parts of the region outside `image` are skipped.
    pub fn pixels<'a>(&self, image: &'a RgbImage) -> impl Iterator<Item = Rgb<u8>> + 'a {
        let x_end = (self.x + self.width).min(image.width());
        let y_end = (self.y + self.height).min(image.height());
        let x_start = self.x.min(x_end);
        let y_start = self.y.min(y_end);

        (y_start..y_end)
            .flat_map(move |y| (x_start..x_end).map(move |x| *image.get_pixel(x, y)))
    }
}
