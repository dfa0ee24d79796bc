//! Pointer and keyboard input for the drawing surface.

use crate::tools::PointerId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer id used for mouse input.
pub const MOUSE_POINTER_ID: PointerId = 1;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Pointer left the surface.
    Leave,
    /// Platform aborted the gesture (e.g. touch interrupted).
    Cancel,
}

/// Pointer event for unified mouse/pen/touch handling.
///
/// `position` is surface-local: the caller has already subtracted the
/// surface's on-screen offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
    #[serde(default = "default_pointer_id")]
    pub pointer_id: PointerId,
}

fn default_pointer_id() -> PointerId {
    MOUSE_POINTER_ID
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Point, pointer_id: PointerId) -> Self {
        Self {
            phase,
            position,
            pointer_id,
        }
    }

    /// Mouse event at `(x, y)`.
    pub fn mouse(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self::new(phase, Point::new(x, y), MOUSE_POINTER_ID)
    }
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        shift: true,
        ..Self::NONE
    };

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    /// True when no modifier is held.
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_event_default_id() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"phase":"move","position":{"x":3.0,"y":4.0}}"#).unwrap();
        assert_eq!(event, PointerEvent::mouse(PointerPhase::Move, 3.0, 4.0));
    }

    #[test]
    fn test_modifiers() {
        assert!(Modifiers::NONE.is_empty());
        assert!(Modifiers::CTRL.command());
        let cmd = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert!(cmd.command());
        assert!(!Modifiers::CTRL_SHIFT.is_empty());
    }
}
