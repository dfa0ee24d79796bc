//! Scribble Application
//!
//! The application shell: routes pointer and keyboard input through the
//! session and keeps a drawing surface in sync with it.

mod app;
mod shortcuts;
mod ui;

pub use app::{App, AppError};
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry};
pub use ui::UiState;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{CanvasSurface, WebSketchpad, run_wasm};
