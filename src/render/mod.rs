mod frame;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::{LINE_SERIES_PALETTE, PIE_PALETTE};
pub use primitives::{
    ArcPrimitive, CirclePrimitive, Color, DrawCommand, LinePrimitive, PathPaint, PathPrimitive,
    TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, ordered `RenderFrame` so drawing
/// code stays isolated from chart aggregation and hit-testing.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
