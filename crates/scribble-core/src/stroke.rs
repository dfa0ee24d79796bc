//! Freehand stroke records.

use crate::color::StrokeColor;
use crate::tools::ToolKind;
use kurbo::Point;
use uuid::Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// One continuous pencil or eraser gesture.
///
/// Tool, color and width are captured when the stroke begins and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    tool: ToolKind,
    color: StrokeColor,
    width: f64,
    /// Points in drawing order, surface-local.
    points: Vec<Point>,
}

impl Stroke {
    /// Start a stroke at `start`.
    pub fn new(start: Point, tool: ToolKind, color: StrokeColor, width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            tool,
            color,
            width,
            points: vec![start],
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>, tool: ToolKind, color: StrokeColor, width: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            tool,
            color,
            width,
            points,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Color stored on the stroke (ignored by the eraser when rendering).
    pub fn color(&self) -> StrokeColor {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Add a point to the path.
    pub(crate) fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last recorded point.
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// A stroke needs at least two points to produce any ink.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Color the stroke paints with; erasers paint the background.
    pub fn render_color(&self, background: StrokeColor) -> StrokeColor {
        match self.tool {
            ToolKind::Eraser => background,
            ToolKind::Pencil => self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_creation() {
        let stroke = Stroke::new(Point::new(1.0, 2.0), ToolKind::Pencil, StrokeColor::BLACK, 3.0);
        assert_eq!(stroke.len(), 1);
        assert!(!stroke.is_renderable());
        assert_eq!(stroke.last_point(), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_add_points() {
        let mut stroke = Stroke::new(Point::ZERO, ToolKind::Pencil, StrokeColor::BLACK, 3.0);
        stroke.add_point(Point::new(10.0, 10.0));
        assert_eq!(stroke.len(), 2);
        assert!(stroke.is_renderable());
        assert_eq!(stroke.last_point(), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_eraser_paints_background() {
        let red = StrokeColor::new(255, 0, 0);
        let eraser = Stroke::new(Point::ZERO, ToolKind::Eraser, red, 10.0);
        let pencil = Stroke::new(Point::ZERO, ToolKind::Pencil, red, 10.0);

        assert_eq!(eraser.color(), red);
        assert_eq!(eraser.render_color(StrokeColor::WHITE), StrokeColor::WHITE);
        assert_eq!(pencil.render_color(StrokeColor::WHITE), red);
    }
}
