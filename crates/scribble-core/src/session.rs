//! Drawing session: history, tool state and the command/apply loop.

use crate::color::StrokeColor;
use crate::command::Command;
use crate::config::{Config, ConfigError};
use crate::history::History;
use crate::stroke::Stroke;
use crate::tools::{PointerId, ToolKind, ToolManager};
use kurbo::Point;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("pointer {rejected} pressed while pointer {active} is drawing")]
    GestureInProgress {
        active: PointerId,
        rejected: PointerId,
    },
}

/// Resolved paint parameters for one polyline or segment.
///
/// Caps and joins are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: StrokeColor,
    pub width: f64,
}

impl LineStyle {
    /// Style a stroke paints with on a surface of the given background.
    pub fn for_stroke(stroke: &Stroke, background: StrokeColor) -> Self {
        Self {
            color: stroke.render_color(background),
            width: stroke.width(),
        }
    }
}

/// What the surface needs after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Redraw {
    /// Nothing visible changed.
    None,
    /// The active prefix changed structurally; replay it from scratch.
    Full,
    /// One segment was appended to the stroke in progress.
    Segment {
        from: Point,
        to: Point,
        style: LineStyle,
    },
}

/// One drawing view's state: stroke history plus tool selection.
#[derive(Debug, Clone)]
pub struct Session {
    history: History,
    tools: ToolManager,
    background: StrokeColor,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            history: History::new(),
            tools: ToolManager::new(),
            background: StrokeColor::WHITE,
        }
    }
}

impl Session {
    /// Create an empty session with the configured tool defaults.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut tools = ToolManager::with_width_range(config.min_width, config.max_width);
        tools.set_tool(config.default_tool);
        tools.set_color(config.default_color);
        tools.set_width(config.default_width);

        Ok(Self {
            history: History::new(),
            tools,
            background: config.background,
        })
    }

    /// Apply a command and report what must be redrawn.
    pub fn apply(&mut self, command: Command) -> Result<Redraw, SessionError> {
        log::debug!("Applying {}", command.name());

        match command {
            Command::BeginStroke { point, pointer_id } => self.begin_stroke(point, pointer_id),
            Command::ExtendStroke { point, pointer_id } => Ok(self.extend_stroke(point, pointer_id)),
            Command::EndStroke { pointer_id } => {
                if self.tools.end(pointer_id) {
                    if let Some(stroke) = self.history.current_stroke() {
                        log::debug!("Stroke {} finished with {} point(s)", stroke.id(), stroke.len());
                    }
                }
                Ok(Redraw::None)
            }
            Command::Undo => {
                self.finish_gesture();
                Ok(if self.history.undo() { Redraw::Full } else { Redraw::None })
            }
            Command::Redo => {
                self.finish_gesture();
                Ok(if self.history.redo() { Redraw::Full } else { Redraw::None })
            }
            Command::Clear => {
                self.finish_gesture();
                log::info!("Clearing {} stroke(s)", self.history.len());
                self.history.clear();
                Ok(Redraw::Full)
            }
            Command::SelectTool { tool } => {
                self.tools.set_tool(tool);
                Ok(Redraw::None)
            }
            Command::SelectColor { color } => {
                self.tools.set_color(color);
                Ok(Redraw::None)
            }
            Command::SelectWidth { width } => {
                let applied = self.tools.set_width(width);
                if applied != width {
                    log::debug!("Stroke width {} clamped to {}", width, applied);
                }
                Ok(Redraw::None)
            }
        }
    }

    fn begin_stroke(&mut self, point: Point, pointer_id: PointerId) -> Result<Redraw, SessionError> {
        if let Some(active) = self.tools.active_pointer() {
            log::warn!("Rejecting pointer {} while pointer {} is drawing", pointer_id, active);
            return Err(SessionError::GestureInProgress {
                active,
                rejected: pointer_id,
            });
        }

        let id = self.history.begin_stroke(
            point,
            self.tools.current_tool(),
            self.tools.current_color(),
            self.tools.current_width(),
        );
        self.tools.begin(pointer_id, point);
        log::debug!("Stroke {} started with {}", id, self.tools.current_tool().name());
        Ok(Redraw::Full)
    }

    fn extend_stroke(&mut self, point: Point, pointer_id: PointerId) -> Redraw {
        // Stray moves while idle or from other pointers leave no trace
        let Some(from) = self.tools.advance(pointer_id, point) else {
            return Redraw::None;
        };
        if self.history.extend_stroke(point).is_none() {
            return Redraw::None;
        }
        match self.history.current_stroke() {
            Some(stroke) => Redraw::Segment {
                from,
                to: point,
                style: LineStyle::for_stroke(stroke, self.background),
            },
            None => Redraw::None,
        }
    }

    /// Undo, redo and clear move the cursor, so the stroke in progress
    /// stops accepting points first.
    fn finish_gesture(&mut self) {
        if let Some(pointer_id) = self.tools.active_pointer() {
            log::debug!("Ending gesture of pointer {} before history change", pointer_id);
            self.tools.cancel();
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    /// Surface background color.
    pub fn background(&self) -> StrokeColor {
        self.background
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Visible strokes, oldest first.
    pub fn active_strokes(&self) -> &[Stroke] {
        self.history.active_strokes()
    }

    pub fn is_drawing(&self) -> bool {
        self.tools.is_active()
    }

    pub fn current_tool(&self) -> ToolKind {
        self.tools.current_tool()
    }

    pub fn current_color(&self) -> StrokeColor {
        self.tools.current_color()
    }

    pub fn current_width(&self) -> f64 {
        self.tools.current_width()
    }
}
