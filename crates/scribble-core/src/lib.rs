//! Scribble Core Library
//!
//! Platform-agnostic data model for the Scribble freehand drawing surface:
//! strokes, the undo/redo history, tool and gesture state, and the
//! command/apply loop that ties them together.

pub mod color;
pub mod command;
pub mod config;
pub mod history;
pub mod input;
pub mod session;
pub mod stroke;
pub mod tools;

pub use color::{ColorError, StrokeColor};
pub use command::Command;
pub use config::{Config, ConfigError};
pub use history::History;
pub use input::{Modifiers, PointerEvent, PointerPhase};
pub use session::{LineStyle, Redraw, Session, SessionError};
pub use stroke::{Stroke, StrokeId};
pub use tools::{PointerId, ToolKind, ToolManager, ToolState};

pub use kurbo::Point;
