use cairo::Context;

use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, Renderer};

use super::{LineChart, PieChart};

impl<R: Renderer + CairoContextRenderer> PieChart<R> {
    /// Draws the current frame onto a host-owned Cairo context.
    pub fn render_on_cairo_context(&mut self, context: &Context) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.needs_redraw = false;
        Ok(())
    }
}

impl<R: Renderer + CairoContextRenderer> LineChart<R> {
    /// Draws the current frame onto a host-owned Cairo context.
    pub fn render_on_cairo_context(&mut self, context: &Context) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.needs_redraw = false;
        Ok(())
    }
}
