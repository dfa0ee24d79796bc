//! Drawing surface abstraction.

use scribble_core::{LineStyle, Point, StrokeColor};

/// A 2D target that strokes are painted onto.
///
/// Implementations can rasterize on the CPU, encode a Vello scene, or
/// forward to a browser canvas. Every polyline is stroked as one continuous
/// path with round caps and round joins.
pub trait Surface {
    /// Size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Change the pixel size. Existing content is discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill the whole surface with `background`.
    fn clear(&mut self, background: StrokeColor);

    /// Stroke a connected polyline through `points`.
    ///
    /// Fewer than two points draw nothing.
    fn stroke_polyline(&mut self, points: &[Point], style: &LineStyle);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height);
    }

    fn clear(&mut self, background: StrokeColor) {
        (**self).clear(background);
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &LineStyle) {
        (**self).stroke_polyline(points, style);
    }
}
