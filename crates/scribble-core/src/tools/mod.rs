//! Tool system for the drawing surface.

use crate::color::StrokeColor;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Thinnest selectable stroke width.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
/// Widest selectable stroke width.
pub const MAX_STROKE_WIDTH: f64 = 30.0;
/// Stroke width selected at session start.
pub const DEFAULT_STROKE_WIDTH: f64 = 5.0;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
}

impl ToolKind {
    /// Get display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pencil => "pencil",
            ToolKind::Eraser => "eraser",
        }
    }

    /// Parse a tool name as sent by the toolbar.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pencil" => Some(ToolKind::Pencil),
            "eraser" => Some(ToolKind::Eraser),
            _ => None,
        }
    }
}

/// Identifier of the pointer driving a gesture (mouse, pen, or touch point).
pub type PointerId = i32;

/// State of the drawing gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A stroke is being drawn.
    Drawing {
        /// Pointer that started the gesture.
        pointer_id: PointerId,
        /// Most recently recorded point.
        last_point: Point,
    },
}

/// Manages the current tool selection and gesture state.
#[derive(Debug, Clone)]
pub struct ToolManager {
    /// Currently selected tool.
    current_tool: ToolKind,
    /// Color for new pencil strokes.
    current_color: StrokeColor,
    /// Width for new strokes.
    current_width: f64,
    /// Allowed width range.
    width_range: (f64, f64),
    /// Current state of the gesture.
    state: ToolState,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self {
            current_tool: ToolKind::default(),
            current_color: StrokeColor::default(),
            current_width: DEFAULT_STROKE_WIDTH,
            width_range: (MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
            state: ToolState::default(),
        }
    }
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tool manager with a custom width range.
    pub fn with_width_range(min_width: f64, max_width: f64) -> Self {
        Self {
            width_range: (min_width, max_width),
            ..Self::default()
        }
    }

    /// Set the current tool. An in-progress stroke keeps its own tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
    }

    /// Set the color for new strokes.
    pub fn set_color(&mut self, color: StrokeColor) {
        self.current_color = color;
    }

    /// Set the width for new strokes, clamped to the allowed range.
    /// Returns the width actually applied.
    ///
    /// Non-finite widths select the minimum. The range is not assumed to be
    /// ordered; an inverted range pins every width to `max`.
    pub fn set_width(&mut self, width: f64) -> f64 {
        let (min, max) = self.width_range;
        let width = if width.is_finite() { width } else { min };
        self.current_width = width.max(min).min(max);
        self.current_width
    }

    /// Currently selected tool.
    pub fn current_tool(&self) -> ToolKind {
        self.current_tool
    }

    /// Color for new strokes.
    pub fn current_color(&self) -> StrokeColor {
        self.current_color
    }

    /// Width for new strokes.
    pub fn current_width(&self) -> f64 {
        self.current_width
    }

    /// Allowed width range as `(min, max)`.
    pub fn width_range(&self) -> (f64, f64) {
        self.width_range
    }

    /// Begin a gesture.
    pub fn begin(&mut self, pointer_id: PointerId, point: Point) {
        self.state = ToolState::Drawing {
            pointer_id,
            last_point: point,
        };
    }

    /// Advance the gesture to `point`, returning the previous point.
    ///
    /// Returns `None` when idle or when `pointer_id` is not the pointer
    /// that started the gesture.
    pub fn advance(&mut self, pointer_id: PointerId, point: Point) -> Option<Point> {
        match &mut self.state {
            ToolState::Drawing {
                pointer_id: active,
                last_point,
            } if *active == pointer_id => Some(std::mem::replace(last_point, point)),
            _ => None,
        }
    }

    /// End the gesture started by `pointer_id`. Returns true if one ended.
    pub fn end(&mut self, pointer_id: PointerId) -> bool {
        match self.state {
            ToolState::Drawing { pointer_id: active, .. } if active == pointer_id => {
                self.state = ToolState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop any gesture without regard to the pointer.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    /// Check if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, ToolState::Drawing { .. })
    }

    /// Pointer driving the current gesture, if any.
    pub fn active_pointer(&self) -> Option<PointerId> {
        match self.state {
            ToolState::Drawing { pointer_id, .. } => Some(pointer_id),
            ToolState::Idle => None,
        }
    }
}
