//! Commands applied to a drawing session.

use crate::color::StrokeColor;
use crate::input::{PointerEvent, PointerPhase};
use crate::tools::{PointerId, ToolKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Every state change a session accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Pointer pressed on the surface.
    BeginStroke { point: Point, pointer_id: PointerId },
    /// Pointer moved while pressed.
    ExtendStroke { point: Point, pointer_id: PointerId },
    /// Pointer released, left the surface, or was cancelled.
    EndStroke { pointer_id: PointerId },
    Undo,
    Redo,
    Clear,
    SelectTool { tool: ToolKind },
    SelectColor { color: StrokeColor },
    SelectWidth { width: f64 },
}

impl Command {
    /// Translate a pointer event into the gesture command it drives.
    pub fn from_pointer(event: &PointerEvent) -> Self {
        let pointer_id = event.pointer_id;
        match event.phase {
            PointerPhase::Down => Command::BeginStroke {
                point: event.position,
                pointer_id,
            },
            PointerPhase::Move => Command::ExtendStroke {
                point: event.position,
                pointer_id,
            },
            PointerPhase::Up | PointerPhase::Leave | PointerPhase::Cancel => {
                Command::EndStroke { pointer_id }
            }
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::BeginStroke { .. } => "begin_stroke",
            Command::ExtendStroke { .. } => "extend_stroke",
            Command::EndStroke { .. } => "end_stroke",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Clear => "clear",
            Command::SelectTool { .. } => "select_tool",
            Command::SelectColor { .. } => "select_color",
            Command::SelectWidth { .. } => "select_width",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pointer() {
        let down = PointerEvent::new(PointerPhase::Down, Point::new(1.0, 2.0), 4);
        assert_eq!(
            Command::from_pointer(&down),
            Command::BeginStroke {
                point: Point::new(1.0, 2.0),
                pointer_id: 4
            }
        );

        let moved = PointerEvent::new(PointerPhase::Move, Point::new(3.0, 2.0), 4);
        assert!(matches!(
            Command::from_pointer(&moved),
            Command::ExtendStroke { pointer_id: 4, .. }
        ));

        for phase in [PointerPhase::Up, PointerPhase::Leave, PointerPhase::Cancel] {
            let event = PointerEvent::new(phase, Point::ZERO, 4);
            assert_eq!(
                Command::from_pointer(&event),
                Command::EndStroke { pointer_id: 4 }
            );
        }
    }

    #[test]
    fn test_json_shape() {
        let cmd: Command =
            serde_json::from_str(r##"{"type":"select_color","color":"#ff0000"}"##).unwrap();
        assert_eq!(
            cmd,
            Command::SelectColor {
                color: StrokeColor::new(255, 0, 0)
            }
        );

        let json = serde_json::to_string(&Command::Undo).unwrap();
        assert_eq!(json, r#"{"type":"undo"}"#);

        let tool: Command =
            serde_json::from_str(r#"{"type":"select_tool","tool":"eraser"}"#).unwrap();
        assert_eq!(tool.name(), "select_tool");
    }
}
