//! Scribble Render Library
//!
//! Surface abstraction and the stroke replay used by every backend.
//! A CPU raster surface is always available; the Vello scene surface is
//! behind the default `vello-renderer` feature.

mod raster;
mod renderer;
mod surface;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use raster::RasterSurface;
pub use renderer::{
    RenderResult, RendererError, check_size, full_redraw, incremental_segment, render,
};
pub use surface::Surface;

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloSurface;
