//! Toolbar-facing view of the session.

use scribble_core::{Session, StrokeColor, ToolKind};
use serde::Serialize;

/// Everything a toolbar needs to render itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiState {
    /// Currently selected tool.
    pub tool: ToolKind,
    /// Color for new strokes.
    pub color: StrokeColor,
    /// Width for new strokes.
    pub width: f64,
    /// Allowed width range, for the slider.
    pub min_width: f64,
    pub max_width: f64,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Number of visible strokes.
    pub active_strokes: usize,
    /// Whether a stroke is being drawn right now.
    pub is_drawing: bool,
}

impl UiState {
    pub fn from_session(session: &Session) -> Self {
        let (min_width, max_width) = session.tools().width_range();
        Self {
            tool: session.current_tool(),
            color: session.current_color(),
            width: session.current_width(),
            min_width,
            max_width,
            can_undo: session.can_undo(),
            can_redo: session.can_redo(),
            active_strokes: session.active_strokes().len(),
            is_drawing: session.is_drawing(),
        }
    }

    /// JSON form handed to the browser toolbar.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
