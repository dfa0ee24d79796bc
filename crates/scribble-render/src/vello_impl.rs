//! Vello-based surface implementation.

use crate::surface::Surface;
use scribble_core::{LineStyle, Point, StrokeColor};
use vello::Scene;
use vello::kurbo::{Affine, BezPath, Cap, Join, Rect, Stroke};
use vello::peniko::{Color, Fill};

/// Surface that encodes draw calls into a Vello scene for GPU rendering.
///
/// Clearing resets the scene, so a full redraw re-encodes only the active
/// strokes. Incremental segments are appended to the current scene.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    width: u32,
    height: u32,
    /// Polylines encoded since the last clear.
    polylines: usize,
}

impl VelloSurface {
    /// Create a surface with an empty scene.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scene: Scene::new(),
            width,
            height,
            polylines: 0,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Polylines encoded since the last clear.
    pub fn polylines(&self) -> usize {
        self.polylines
    }
}

fn to_color(color: StrokeColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, 255)
}

impl Surface for VelloSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.scene.reset();
        self.polylines = 0;
    }

    fn clear(&mut self, background: StrokeColor) {
        self.scene.reset();
        self.polylines = 0;
        let rect = Rect::new(0.0, 0.0, self.width as f64, self.height as f64);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, to_color(background), None, &rect);
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &LineStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        let mut path = BezPath::new();
        path.move_to((first.x, first.y));
        for point in rest {
            path.line_to((point.x, point.y));
        }

        let stroke = Stroke::new(style.width)
            .with_caps(Cap::Round)
            .with_join(Join::Round);
        self.scene
            .stroke(&stroke, Affine::IDENTITY, to_color(style.color), None, &path);
        self.polylines += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::full_redraw;
    use scribble_core::{Stroke as InkStroke, ToolKind};

    #[test]
    fn test_surface_creation() {
        let surface = VelloSurface::new(800, 600);
        assert!(surface.scene().encoding().is_empty());
        assert_eq!(surface.size(), (800, 600));
    }

    #[test]
    fn test_full_redraw_encodes_renderable_strokes() {
        let mut surface = VelloSurface::new(800, 600);
        let strokes = vec![
            InkStroke::from_points(
                vec![Point::new(10.0, 10.0), Point::new(50.0, 40.0)],
                ToolKind::Pencil,
                StrokeColor::BLACK,
                3.0,
            ),
            InkStroke::new(Point::new(5.0, 5.0), ToolKind::Pencil, StrokeColor::BLACK, 3.0),
        ];

        full_redraw(&mut surface, &strokes, StrokeColor::WHITE);
        assert_eq!(surface.polylines(), 1);
        assert!(!surface.scene().encoding().is_empty());
    }

    #[test]
    fn test_clear_resets_scene() {
        let mut surface = VelloSurface::new(100, 100);
        let style = LineStyle {
            color: StrokeColor::BLACK,
            width: 2.0,
        };
        surface.stroke_polyline(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)], &style);
        assert_eq!(surface.polylines(), 1);

        surface.clear(StrokeColor::WHITE);
        assert_eq!(surface.polylines(), 0);
    }
}
