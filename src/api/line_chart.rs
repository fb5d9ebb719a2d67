use tracing::{debug, trace, warn};

use crate::core::{
    DaySeries, DenseDayDataset, LineChartGeometry, SeriesInput, Viewport, densify_series,
    project_line_chart,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{LineChartConfig, LineChartStyle};

/// Inputs the cached geometry was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct GeometryCacheKey {
    data_revision: u64,
    style_revision: u64,
    viewport: Viewport,
}

#[derive(Debug, Clone)]
pub(super) struct CachedGeometry {
    key: GeometryCacheKey,
    pub(super) geometry: LineChartGeometry,
}

/// Multi-series daily line chart facade.
///
/// Screen geometry is derived lazily and memoized on
/// `(data revision, style revision, viewport)`; data, style or size changes
/// only move the key.
pub struct LineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) style: LineChartStyle,
    pub(super) dataset: Option<DenseDayDataset>,
    pub(super) data_revision: u64,
    pub(super) style_revision: u64,
    pub(super) geometry_cache: Option<CachedGeometry>,
    pub(super) needs_redraw: bool,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        let viewport = config.viewport.ensure_valid()?;
        config.style.validate()?;
        Ok(Self {
            renderer,
            viewport,
            style: config.style,
            dataset: None,
            data_revision: 0,
            style_revision: 0,
            geometry_cache: None,
            needs_redraw: true,
        })
    }

    /// Replaces all series with their dense form over the combined day range.
    ///
    /// Input without any point (including an empty list) is ignored and the
    /// previous series stay in place.
    pub fn set_data(&mut self, series: Vec<SeriesInput>) {
        if series.is_empty() {
            warn!("ignoring empty line chart input; keeping previous series");
            return;
        }
        let Some(dataset) = densify_series(&series) else {
            warn!(
                series_count = series.len(),
                "ignoring line chart input without points; keeping previous series"
            );
            return;
        };
        debug!(
            series_count = dataset.series.len(),
            min_day = dataset.min_day,
            max_day = dataset.max_day,
            max_sum = dataset.max_sum,
            "set line chart data"
        );
        self.dataset = Some(dataset);
        self.data_revision += 1;
        self.needs_redraw = true;
    }

    /// Records a new widget size. Geometry is recomputed on the next read.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport = viewport.ensure_valid()?;
        if viewport != self.viewport {
            self.viewport = viewport;
            self.needs_redraw = true;
        }
        Ok(())
    }

    pub fn set_style(&mut self, style: LineChartStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        self.style_revision += 1;
        self.needs_redraw = true;
        Ok(())
    }

    /// Drops the cached geometry unconditionally.
    pub fn invalidate_geometry(&mut self) {
        self.geometry_cache = None;
        self.needs_redraw = true;
    }

    #[must_use]
    pub fn style(&self) -> &LineChartStyle {
        &self.style
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&DenseDayDataset> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn series(&self) -> &[DaySeries] {
        self.dataset
            .as_ref()
            .map_or(&[], |dataset| dataset.series.as_slice())
    }

    #[must_use]
    pub fn is_geometry_stale(&self) -> bool {
        self.geometry_cache
            .as_ref()
            .is_none_or(|cached| cached.key != self.geometry_key())
    }

    /// Current screen geometry, recomputed only when stale.
    pub fn geometry(&mut self) -> Option<&LineChartGeometry> {
        self.refresh_geometry();
        self.geometry_cache.as_ref().map(|cached| &cached.geometry)
    }

    pub(super) fn refresh_geometry(&mut self) {
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };
        let key = self.geometry_key();
        if self
            .geometry_cache
            .as_ref()
            .is_some_and(|cached| cached.key == key)
        {
            return;
        }
        trace!(
            data_revision = key.data_revision,
            width = key.viewport.width,
            height = key.viewport.height,
            "recompute line chart geometry"
        );
        let geometry = project_line_chart(dataset, self.viewport, self.style.insets);
        self.geometry_cache = Some(CachedGeometry { key, geometry });
    }

    fn geometry_key(&self) -> GeometryCacheKey {
        GeometryCacheKey {
            data_revision: self.data_revision,
            style_revision: self.style_revision,
            viewport: self.viewport,
        }
    }

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
