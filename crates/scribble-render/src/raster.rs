//! CPU raster surface.
//!
//! A pixel belongs to a stroked polyline when its center lies within half the
//! line width of any segment. That is the coverage of a path stroked with
//! round caps and round joins, so drawing a stroke one segment at a time
//! yields exactly the pixels of drawing it as a single polyline. Pixels are
//! not anti-aliased and colors are opaque.

use crate::surface::Surface;
use image::{Rgba, RgbaImage};
use kurbo::Point;
use scribble_core::{LineStyle, StrokeColor};

/// Software surface backed by an RGBA image.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// The underlying pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// RGBA value of a pixel, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Number of pixels painted exactly `color`.
    pub fn count_pixels(&self, color: StrokeColor) -> usize {
        let target = color.to_rgba8();
        self.image.pixels().filter(|p| p.0 == target).count()
    }

    /// Paint the capsule around segment `a`-`b`.
    fn stamp_segment(&mut self, a: Point, b: Point, half_width: f64, color: Rgba<u8>) {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return;
        }

        let x0 = clamp_index((a.x.min(b.x) - half_width).floor(), width);
        let x1 = clamp_index((a.x.max(b.x) + half_width).ceil(), width);
        let y0 = clamp_index((a.y.min(b.y) - half_width).floor(), height);
        let y1 = clamp_index((a.y.max(b.y) + half_width).ceil(), height);

        let limit = half_width * half_width;
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if distance_sq_to_segment(center, a, b) <= limit {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }
}

/// Convert a pixel coordinate to an index in `0..=len`.
fn clamp_index(value: f64, len: u32) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= len as f64 {
        len
    } else {
        value as u32
    }
}

/// Squared distance from `point` to the segment `a`-`b`.
fn distance_sq_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let line_vec = b - a;
    let point_vec = point - a;

    let line_len_sq = line_vec.hypot2();
    if line_len_sq < f64::EPSILON {
        // Degenerate segment is a dot
        return point_vec.hypot2();
    }

    let t = (point_vec.dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    let projection = a + line_vec * t;
    (point - projection).hypot2()
}

impl Surface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
    }

    fn clear(&mut self, background: StrokeColor) {
        let fill = Rgba(background.to_rgba8());
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &LineStyle) {
        let color = Rgba(style.color.to_rgba8());
        let half_width = style.width / 2.0;
        for pair in points.windows(2) {
            self.stamp_segment(pair[0], pair[1], half_width, color);
        }
    }
}
