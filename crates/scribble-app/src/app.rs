//! Application shell: binds a session to a drawing surface.

use crate::shortcuts::ShortcutRegistry;
use crate::ui::UiState;
use scribble_core::{
    Command, Config, ConfigError, Modifiers, PointerEvent, Redraw, Session, SessionError,
};
use scribble_render::{RendererError, Surface, check_size, full_redraw, render};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A drawing session plus the surface it paints on.
///
/// Every input runs the same loop: translate to a [`Command`], apply it to
/// the session, then render whatever the session reports as changed. The
/// session is updated even while no surface is attached; attaching one
/// replays the active strokes.
pub struct App<S: Surface> {
    session: Session,
    surface: Option<S>,
}

impl<S: Surface> App<S> {
    /// Create an app with no surface attached.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            session: Session::new(config)?,
            surface: None,
        })
    }

    /// Attach a surface and paint the current strokes onto it.
    pub fn attach_surface(&mut self, surface: S) {
        let (width, height) = surface.size();
        log::info!("Surface attached ({}x{})", width, height);
        let surface = self.surface.insert(surface);
        full_redraw(surface, self.session.active_strokes(), self.session.background());
    }

    /// Detach and return the surface.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resize the surface and replay the active strokes.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), AppError> {
        check_size(width, height)?;
        let surface = self
            .surface
            .as_mut()
            .ok_or(RendererError::SurfaceUnavailable)?;
        if surface.size() != (width, height) {
            log::debug!("Resizing surface to {}x{}", width, height);
            surface.resize(width, height);
        }
        full_redraw(surface, self.session.active_strokes(), self.session.background());
        Ok(())
    }

    /// Replay the active strokes from scratch.
    pub fn redraw(&mut self) -> Result<(), AppError> {
        self.render(Redraw::Full)
    }

    /// Apply a command and bring the surface up to date.
    pub fn dispatch(&mut self, command: Command) -> Result<Redraw, AppError> {
        let redraw = self.session.apply(command)?;
        self.render(redraw)?;
        Ok(redraw)
    }

    /// Feed a pointer event through the gesture state machine.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Result<Redraw, AppError> {
        self.dispatch(Command::from_pointer(event))
    }

    /// Run the shortcut bound to `key`. Returns false for unbound keys.
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers) -> Result<bool, AppError> {
        let Some(command) = ShortcutRegistry::command_for_key(key, modifiers, &self.ui_state())
        else {
            return Ok(false);
        };
        self.dispatch(command)?;
        Ok(true)
    }

    /// Snapshot for the toolbar.
    pub fn ui_state(&self) -> UiState {
        UiState::from_session(&self.session)
    }

    fn render(&mut self, redraw: Redraw) -> Result<(), AppError> {
        render(
            self.surface.as_mut(),
            redraw,
            self.session.active_strokes(),
            self.session.background(),
        )?;
        Ok(())
    }
}
