use std::f64::consts::TAU;
use std::io::Write;

use cairo::{Context, Format, ImageSurface, LineCap};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, CirclePrimitive, Color, DrawCommand, LinePrimitive, PathPaint, PathPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

/// Per-kind command counts of the last painted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub arcs_drawn: usize,
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

impl CairoRenderStats {
    fn record(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Arc(_) => self.arcs_drawn += 1,
            DrawCommand::Line(_) => self.lines_drawn += 1,
            DrawCommand::Path(_) => self.paths_drawn += 1,
            DrawCommand::Circle(_) => self.circles_drawn += 1,
            DrawCommand::Text(_) => self.texts_drawn += 1,
        }
    }
}

/// Renderers able to paint into a host-owned Cairo context, such as the one
/// handed to a widget draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo/Pango backend painting chart frames.
///
/// Draws offscreen into its own ARGB surface via `Renderer::render`, or into
/// a caller's context via `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(format!(
                "cairo surface must be at least 1x1, got {width}x{height}"
            )));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("cannot allocate image surface", err))?;
        Ok(Self {
            surface,
            background: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Color painted under every frame. Defaults to white.
    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the offscreen surface as PNG.
    pub fn write_png(&self, out: &mut impl Write) -> ChartResult<()> {
        self.surface
            .write_to_png(out)
            .map_err(|err| ChartError::Backend(format!("cannot encode png: {err}")))
    }

    fn paint_frame(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        set_source(context, self.background);
        context
            .paint()
            .map_err(|err| backend_error("cannot paint background", err))?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            paint_command(context, command)?;
            stats.record(command);
        }
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| backend_error("cannot open surface context", err))?;
        self.paint_frame(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.paint_frame(context, frame)
    }
}

fn paint_command(context: &Context, command: &DrawCommand) -> ChartResult<()> {
    match command {
        DrawCommand::Arc(arc) => paint_arc(context, *arc),
        DrawCommand::Line(line) => paint_line(context, *line),
        DrawCommand::Path(path) => paint_path(context, path),
        DrawCommand::Circle(circle) => paint_circle(context, *circle),
        DrawCommand::Text(text) => {
            paint_text(context, text);
            Ok(())
        }
    }
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

/// Ring segments use butt caps so the gap between wedges stays visible.
fn paint_arc(context: &Context, arc: ArcPrimitive) -> ChartResult<()> {
    if arc.sweep_angle_deg <= 0.0 {
        return Ok(());
    }
    let from = arc.start_angle_deg.to_radians();
    let to = (arc.start_angle_deg + arc.sweep_angle_deg).to_radians();
    set_source(context, arc.color);
    context.set_line_cap(LineCap::Butt);
    context.set_line_width(arc.stroke_width);
    context.new_sub_path();
    context.arc(arc.center_x, arc.center_y, arc.radius, from, to);
    context
        .stroke()
        .map_err(|err| backend_error("cannot stroke ring arc", err))
}

fn paint_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    set_source(context, line.color);
    context.set_line_cap(LineCap::Butt);
    context.set_line_width(line.stroke_width);
    context.new_path();
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| backend_error("cannot stroke segment", err))
}

fn paint_path(context: &Context, path: &PathPrimitive) -> ChartResult<()> {
    let Some((head, tail)) = path.points.split_first() else {
        return Ok(());
    };
    context.new_path();
    context.move_to(head.x, head.y);
    for point in tail {
        context.line_to(point.x, point.y);
    }
    if path.closed {
        context.close_path();
    }
    match path.paint {
        PathPaint::Fill { color } => {
            set_source(context, color);
            context
                .fill()
                .map_err(|err| backend_error("cannot fill series area", err))
        }
        PathPaint::Stroke { color, width } => {
            set_source(context, color);
            context.set_line_cap(LineCap::Round);
            context.set_line_join(cairo::LineJoin::Round);
            context.set_line_width(width);
            context
                .stroke()
                .map_err(|err| backend_error("cannot stroke series line", err))
        }
    }
}

fn paint_circle(context: &Context, circle: CirclePrimitive) -> ChartResult<()> {
    set_source(context, circle.color);
    context.new_sub_path();
    context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
    context
        .fill()
        .map_err(|err| backend_error("cannot fill point marker", err))
}

fn paint_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let weight = if text.bold { "Bold " } else { "" };
    let font = FontDescription::from_string(&format!("Sans {weight}{}px", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, _) = layout.pixel_size();
    let width = f64::from(width);
    let left = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };
    // Layouts are placed by their top edge; primitives carry the baseline.
    let ascent = f64::from(layout.baseline()) / f64::from(pango::SCALE);

    set_source(context, text.color);
    context.move_to(left, text.y - ascent);
    pangocairo::functions::show_layout(context, &layout);
}

fn backend_error(what: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{what}: {err}"))
}
