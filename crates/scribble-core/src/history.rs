//! Linear stroke history with an undo/redo cursor.

use crate::color::StrokeColor;
use crate::stroke::{Stroke, StrokeId};
use crate::tools::ToolKind;
use kurbo::Point;

/// Ordered strokes plus a cursor marking the visible prefix.
///
/// Strokes past the cursor form the redo buffer. They stay recoverable until
/// a new stroke begins, which discards them.
#[derive(Debug, Clone, Default)]
pub struct History {
    strokes: Vec<Stroke>,
    /// Number of active strokes (cursor + 1). Always `<= strokes.len()`.
    active: usize,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the redo buffer and append a new one-point stroke.
    pub fn begin_stroke(
        &mut self,
        point: Point,
        tool: ToolKind,
        color: StrokeColor,
        width: f64,
    ) -> StrokeId {
        let discarded = self.strokes.len() - self.active;
        if discarded > 0 {
            log::debug!("Discarding {} stroke(s) from redo buffer", discarded);
        }
        self.strokes.truncate(self.active);

        let stroke = Stroke::new(point, tool, color, width);
        let id = stroke.id();
        self.strokes.push(stroke);
        self.active = self.strokes.len();
        id
    }

    /// Append `point` to the stroke at the cursor.
    ///
    /// Returns the stroke's previous last point, or `None` (and does nothing)
    /// when no stroke is active.
    pub fn extend_stroke(&mut self, point: Point) -> Option<Point> {
        let stroke = self.active.checked_sub(1).map(|i| &mut self.strokes[i])?;
        let previous = stroke.last_point();
        stroke.add_point(point);
        previous
    }

    /// Move the cursor back one stroke.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.active -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor forward one stroke.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.active += 1;
            true
        } else {
            false
        }
    }

    /// Drop every stroke, including the redo buffer.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active = 0;
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.active > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.active < self.strokes.len()
    }

    /// Index of the last active stroke, `None` when nothing is active.
    pub fn cursor(&self) -> Option<usize> {
        self.active.checked_sub(1)
    }

    /// Visible strokes, oldest first.
    pub fn active_strokes(&self) -> &[Stroke] {
        &self.strokes[..self.active]
    }

    /// Every recorded stroke, including the redo buffer.
    pub fn all_strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Stroke at the cursor.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.cursor().map(|i| &self.strokes[i])
    }

    /// Number of strokes waiting in the redo buffer.
    pub fn redo_len(&self) -> usize {
        self.strokes.len() - self.active
    }

    /// Number of recorded strokes, active or not.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn draw(history: &mut History, points: &[Point]) -> StrokeId {
        let id = history.begin_stroke(points[0], ToolKind::Pencil, StrokeColor::BLACK, 3.0);
        for p in &points[1..] {
            history.extend_stroke(*p);
        }
        id
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_scenario_undo_redo() {
        let mut history = History::new();
        let (p0, p1, p2) = (pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0));

        history.begin_stroke(p0, ToolKind::Pencil, StrokeColor::from_hex("#000").unwrap(), 3.0);
        history.extend_stroke(p1);
        history.extend_stroke(p2);

        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), Some(0));
        let stroke = &history.active_strokes()[0];
        assert_eq!(stroke.tool(), ToolKind::Pencil);
        assert_eq!(stroke.color(), StrokeColor::BLACK);
        assert_eq!(stroke.width(), 3.0);
        assert_eq!(stroke.points(), &[p0, p1, p2]);
        assert!(history.can_undo());
        assert!(!history.can_redo());

        assert!(history.undo());
        assert_eq!(history.cursor(), None);
        assert!(history.active_strokes().is_empty());
        assert!(history.can_redo());

        assert!(history.redo());
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.active_strokes()[0].points(), &[p0, p1, p2]);
    }

    #[test]
    fn test_extend_returns_previous_point() {
        let mut history = History::new();
        history.begin_stroke(pt(0.0, 0.0), ToolKind::Pencil, StrokeColor::BLACK, 1.0);
        assert_eq!(history.extend_stroke(pt(4.0, 0.0)), Some(pt(0.0, 0.0)));
        assert_eq!(history.extend_stroke(pt(8.0, 0.0)), Some(pt(4.0, 0.0)));
    }

    #[test]
    fn test_extend_without_stroke_is_noop() {
        let mut history = History::new();
        assert_eq!(history.extend_stroke(pt(1.0, 1.0)), None);
        assert!(history.is_empty());

        // After undoing everything the cursor is -1 again
        draw(&mut history, &[pt(0.0, 0.0), pt(1.0, 0.0)]);
        history.undo();
        assert_eq!(history.extend_stroke(pt(5.0, 5.0)), None);
        assert_eq!(history.all_strokes()[0].len(), 2);
    }

    #[test]
    fn test_active_count_tracks_cursor() {
        let mut history = History::new();
        for i in 0..5 {
            let x = i as f64;
            draw(&mut history, &[pt(x, 0.0), pt(x, 10.0)]);
        }

        for _ in 0..8 {
            let expected = history.cursor().map_or(0, |c| c + 1);
            assert_eq!(history.active_strokes().len(), expected);
            history.undo();
        }
        assert_eq!(history.cursor(), None);
        assert_eq!(history.active_strokes().len(), 0);
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn test_redo_restores_same_strokes() {
        let mut history = History::new();
        let a = draw(&mut history, &[pt(0.0, 0.0), pt(1.0, 0.0)]);
        let b = draw(&mut history, &[pt(0.0, 5.0), pt(1.0, 5.0), pt(2.0, 5.0)]);
        let before: Vec<Stroke> = history.active_strokes().to_vec();

        history.undo();
        history.undo();
        history.redo();
        history.redo();
        assert!(!history.redo());

        let ids: Vec<StrokeId> = history.active_strokes().iter().map(Stroke::id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(history.active_strokes(), before.as_slice());
    }

    #[test]
    fn test_begin_discards_redo_buffer() {
        let mut history = History::new();
        let a = draw(&mut history, &[pt(0.0, 0.0), pt(1.0, 0.0)]);
        let b = draw(&mut history, &[pt(0.0, 1.0), pt(1.0, 1.0)]);
        let c = draw(&mut history, &[pt(0.0, 2.0), pt(1.0, 2.0)]);

        history.undo();
        history.undo();
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.redo_len(), 2);

        let d = draw(&mut history, &[pt(0.0, 3.0)]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert!(!history.can_redo());

        let ids: Vec<StrokeId> = history.all_strokes().iter().map(Stroke::id).collect();
        assert_eq!(ids, vec![a, d]);
        assert!(!ids.contains(&b));
        assert!(!ids.contains(&c));
    }

    #[test]
    fn test_begin_after_full_undo_replaces_everything() {
        let mut history = History::new();
        draw(&mut history, &[pt(0.0, 0.0), pt(1.0, 0.0)]);
        history.undo();

        let d = draw(&mut history, &[pt(3.0, 3.0)]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_stroke().map(Stroke::id), Some(d));
    }

    #[test]
    fn test_undo_redo_at_bounds_are_noops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());

        draw(&mut history, &[pt(0.0, 0.0), pt(1.0, 0.0)]);
        assert!(!history.redo());
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        draw(&mut history, &[pt(0.0, 0.0), pt(1.0, 0.0)]);
        draw(&mut history, &[pt(0.0, 1.0), pt(1.0, 1.0)]);
        history.undo();

        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_single_point_stroke_occupies_slot() {
        let mut history = History::new();
        draw(&mut history, &[pt(0.0, 0.0)]);
        draw(&mut history, &[pt(5.0, 5.0), pt(6.0, 6.0)]);

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
        assert!(!history.active_strokes()[0].is_renderable());

        history.undo();
        history.undo();
        assert_eq!(history.cursor(), None);
    }
}
