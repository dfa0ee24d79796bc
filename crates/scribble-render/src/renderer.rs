//! Stroke replay onto a surface.

use crate::surface::Surface;
use scribble_core::{LineStyle, Point, Redraw, Stroke, StrokeColor};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RendererError {
    #[error("no drawing surface attached")]
    SurfaceUnavailable,
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Reject sizes a surface cannot be created with.
pub fn check_size(width: u32, height: u32) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RendererError::InvalidSize { width, height });
    }
    Ok(())
}

/// Clear the surface and replay every stroke in `strokes`, oldest first.
///
/// `strokes` is the active prefix of the history. Strokes with fewer than
/// two points are skipped. Returns the number of polylines drawn.
pub fn full_redraw<S: Surface + ?Sized>(
    surface: &mut S,
    strokes: &[Stroke],
    background: StrokeColor,
) -> usize {
    surface.clear(background);

    let mut drawn = 0;
    for stroke in strokes.iter().filter(|s| s.is_renderable()) {
        let style = LineStyle::for_stroke(stroke, background);
        surface.stroke_polyline(stroke.points(), &style);
        drawn += 1;
    }

    log::debug!("Replayed {} of {} stroke(s)", drawn, strokes.len());
    drawn
}

/// Draw the single newest segment of a stroke in progress.
pub fn incremental_segment<S: Surface + ?Sized>(
    surface: &mut S,
    from: Point,
    to: Point,
    style: &LineStyle,
) {
    surface.stroke_polyline(&[from, to], style);
}

/// Bring `surface` up to date after a command produced `redraw`.
///
/// Fails with [`RendererError::SurfaceUnavailable`] when drawing is needed
/// but no surface is attached.
pub fn render<S: Surface + ?Sized>(
    surface: Option<&mut S>,
    redraw: Redraw,
    strokes: &[Stroke],
    background: StrokeColor,
) -> RenderResult<()> {
    if redraw == Redraw::None {
        return Ok(());
    }
    let surface = surface.ok_or(RendererError::SurfaceUnavailable)?;

    match redraw {
        Redraw::None => {}
        Redraw::Full => {
            full_redraw(surface, strokes, background);
        }
        Redraw::Segment { from, to, style } => incremental_segment(surface, from, to, &style),
    }
    Ok(())
}
