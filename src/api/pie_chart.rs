use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    CategoryTotals, Record, RecordSource, RingGeometry, Viewport, Wedge, WedgeLayout,
    build_wedge_layout,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{PieChartConfig, PieChartStyle};

/// Callback invoked with the category of a clicked wedge.
pub type CategoryClickListener = Box<dyn FnMut(&str) + 'static>;

/// Caption drawn inside the ring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CenterText {
    pub text: String,
    pub sub_text: String,
}

/// Ring pie chart facade.
///
/// Owns the wedge layout derived from the last non-empty payload, the
/// selected category and the renderer it draws into.
pub struct PieChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) style: PieChartStyle,
    pub(super) layout: WedgeLayout,
    pub(super) center_text: CenterText,
    pub(super) selected_category: Option<String>,
    pub(super) on_category_click: Option<CategoryClickListener>,
    pub(super) needs_redraw: bool,
}

impl<R: Renderer> PieChart<R> {
    pub fn new(renderer: R, config: PieChartConfig) -> ChartResult<Self> {
        let viewport = config.viewport.ensure_valid()?;
        config.style.validate()?;
        Ok(Self {
            renderer,
            viewport,
            style: config.style,
            layout: WedgeLayout::default(),
            center_text: CenterText::default(),
            selected_category: None,
            on_category_click: None,
            needs_redraw: true,
        })
    }

    /// Replaces the wedges with the category totals of `records`.
    ///
    /// An empty list keeps the current wedges.
    pub fn set_payloads(&mut self, records: Vec<Record>) {
        if records.is_empty() {
            warn!("ignoring empty pie payload; keeping previous wedges");
            return;
        }
        let totals = CategoryTotals::from_records(&records);
        self.layout = build_wedge_layout(&totals, &self.style.palette);
        debug!(
            record_count = records.len(),
            wedge_count = self.layout.wedges.len(),
            total = self.layout.total_value,
            "set pie payloads"
        );
        self.needs_redraw = true;
    }

    /// Pulls records from `source` and applies them like `set_payloads`.
    pub fn load_from(&mut self, source: &(impl RecordSource + ?Sized)) -> ChartResult<()> {
        let records = source.records()?;
        self.set_payloads(records);
        Ok(())
    }

    pub fn set_center_text(&mut self, text: impl Into<String>, sub_text: impl Into<String>) {
        self.center_text = CenterText {
            text: text.into(),
            sub_text: sub_text.into(),
        };
        self.needs_redraw = true;
    }

    pub fn set_on_category_click(&mut self, listener: impl FnMut(&str) + 'static) {
        self.on_category_click = Some(Box::new(listener));
    }

    pub fn clear_on_category_click(&mut self) {
        self.on_category_click = None;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.viewport = viewport.ensure_valid()?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Replaces the style and recolors the current wedges.
    pub fn set_style(&mut self, style: PieChartStyle) -> ChartResult<()> {
        style.validate()?;
        let palette = &style.palette;
        for (index, wedge) in self.layout.wedges.iter_mut().enumerate() {
            wedge.color = palette[index % palette.len()];
        }
        self.style = style;
        self.needs_redraw = true;
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> &PieChartStyle {
        &self.style
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn wedges(&self) -> &[Wedge] {
        &self.layout.wedges
    }

    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.layout.total_value
    }

    #[must_use]
    pub fn center_text(&self) -> &CenterText {
        &self.center_text
    }

    #[must_use]
    pub fn ring_geometry(&self) -> RingGeometry {
        RingGeometry::for_viewport(
            self.viewport,
            self.style.radius_ratio,
            self.style.ring_width_ratio,
        )
    }

    /// Whether state changed since the last successful `render`.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)?;
        self.needs_redraw = false;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
