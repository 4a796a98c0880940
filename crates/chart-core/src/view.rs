// File: crates/chart-core/src/view.rs
// Summary: ChartView owns the dataset and caches axis range, transform, and geometry.

use log::{debug, warn};

use crate::axis::{compute_range, AxisBounds, AxisConfig};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::render::{build_geometry, RenderGeometry};
use crate::scale::{compute_transform, Gutter, Transform};
use crate::text::{LabelMetrics, MonospaceMetrics};
use crate::theme::ChartStyle;
use crate::types::Size;

/// Where the view is in its plot/layout cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartState {
    /// No dataset.
    Empty,
    /// Dataset present but no transform cached; the next `plot` re-ranges.
    Ranged,
    /// Dataset present, transform cached and geometry built.
    Ready,
}

pub struct ChartView {
    config: ChartConfig,
    viewport: Size,
    data: Vec<Point>,
    axis: Option<AxisConfig>,
    /// Memo: while set, `plot` reuses it instead of re-ranging.
    transform: Option<Transform>,
    geometry: Option<RenderGeometry>,
    metrics: Box<dyn LabelMetrics>,
}

impl ChartView {
    /// New view measuring labels with [`MonospaceMetrics`].
    pub fn new(config: ChartConfig, viewport: Size) -> Result<Self> {
        Self::with_metrics(config, viewport, MonospaceMetrics::default())
    }

    /// New view with caller-supplied label metrics. Fixed `bounds` in the config
    /// lay out the axes immediately, before any data arrives.
    pub fn with_metrics(
        config: ChartConfig,
        viewport: Size,
        metrics: impl LabelMetrics + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let mut view = Self {
            config,
            viewport,
            data: Vec::new(),
            axis: None,
            transform: None,
            geometry: None,
            metrics: Box::new(metrics),
        };
        if let Some(bounds) = config.bounds {
            view.axis = Some(AxisConfig::from_bounds(bounds, config.tick_x, config.tick_y)?);
            view.refresh_transform()?;
            view.rebuild_geometry();
        }
        Ok(view)
    }

    pub fn state(&self) -> ChartState {
        match (self.data.is_empty(), self.transform.is_some()) {
            (true, _) => ChartState::Empty,
            (false, false) => ChartState::Ranged,
            (false, true) => ChartState::Ready,
        }
    }

    /// Replace the dataset and rebuild geometry.
    ///
    /// Points are drawn in the given order. An empty slice clears the dataset,
    /// line and markers but keeps the cached range and transform, so axes, grid
    /// and labels stay drawn. A non-finite coordinate rejects the whole call and
    /// leaves the view unchanged.
    pub fn plot(&mut self, points: &[Point]) -> Result<()> {
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            warn!("rejecting dataset: sample {} is ({}, {})", index, p.x, p.y);
            return Err(ChartError::InvalidSample { index, x: p.x, y: p.y });
        }

        self.data.clear();
        self.geometry = None;
        if points.is_empty() {
            debug!("plot: empty dataset");
            self.rebuild_geometry();
            return Ok(());
        }
        self.data.extend_from_slice(points);

        if self.transform.is_none() {
            let (tick_x, tick_y) = (self.config.tick_x, self.config.tick_y);
            self.axis = match self.config.bounds {
                Some(bounds) => Some(AxisConfig::from_bounds(bounds, tick_x, tick_y)?),
                None => compute_range(&self.data, tick_x, tick_y, self.config.baseline)?,
            };
            debug!("plot: ranged {} points to {:?}", self.data.len(), self.axis);
            self.refresh_transform()?;
        }
        self.rebuild_geometry();
        Ok(())
    }

    /// Convenience for `(x, y)` tuples.
    pub fn plot_xy(&mut self, points: &[(f64, f64)]) -> Result<()> {
        let points: Vec<Point> = points.iter().copied().map(Point::from).collect();
        self.plot(&points)
    }

    /// New viewport size from the host layout. Keeps the axis range.
    pub fn resize(&mut self, viewport: Size) -> Result<()> {
        debug!(
            "resize: {}x{} -> {}x{}",
            self.viewport.width, self.viewport.height, viewport.width, viewport.height
        );
        self.viewport = viewport;
        self.refresh_transform()?;
        self.rebuild_geometry();
        Ok(())
    }

    /// Drop the cached range and transform; the next `plot` re-ranges.
    pub fn reset_range(&mut self) {
        debug!("reset_range");
        self.transform = None;
        self.geometry = None;
        if self.config.bounds.is_none() {
            self.axis = None;
        }
    }

    /// Pin the axis to explicit bounds, overriding auto-ranging until cleared.
    pub fn set_axis_bounds(&mut self, bounds: AxisBounds) -> Result<()> {
        let axis = AxisConfig::from_bounds(bounds, self.config.tick_x, self.config.tick_y)?;
        self.config.bounds = Some(bounds);
        self.axis = Some(axis);
        self.refresh_transform()?;
        self.rebuild_geometry();
        Ok(())
    }

    /// Return to auto-ranging. Takes effect on the next `plot`.
    pub fn clear_axis_bounds(&mut self) {
        self.config.bounds = None;
        self.reset_range();
    }

    /// New grid spacing for the current range. Rejected spacing, including one
    /// that would lay out too many ticks, leaves the view unchanged.
    pub fn set_tick_spacing(&mut self, tick_x: f64, tick_y: f64) -> Result<()> {
        let config = self.config.with_ticks(tick_x, tick_y);
        config.validate()?;
        let axis = self.axis.map(|a| a.with_ticks(tick_x, tick_y)).transpose()?;
        self.config = config;
        self.axis = axis;
        self.rebuild_geometry();
        Ok(())
    }

    /// Visual update. Label size or tick length changes also move the gutters.
    pub fn set_style(&mut self, style: ChartStyle) -> Result<()> {
        let moves_gutter = self.config.style.changes_gutter(&style);
        self.config.style = style;
        if moves_gutter {
            self.refresh_transform()?;
        }
        self.rebuild_geometry();
        Ok(())
    }

    pub fn style(&self) -> &ChartStyle {
        &self.config.style
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn data(&self) -> &[Point] {
        &self.data
    }

    pub fn axis(&self) -> Option<&AxisConfig> {
        self.axis.as_ref()
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn geometry(&self) -> Option<&RenderGeometry> {
        self.geometry.as_ref()
    }

    pub fn metrics(&self) -> &dyn LabelMetrics {
        self.metrics.as_ref()
    }

    /// Map a viewport pixel back to data space, if a transform is cached.
    pub fn data_at(&self, px: Point) -> Option<Point> {
        self.transform.map(|t| t.invert(px))
    }

    fn refresh_transform(&mut self) -> Result<()> {
        let Some(axis) = self.axis else {
            return Ok(());
        };
        let style = &self.config.style;
        let gutter = Gutter::measure(
            &axis,
            style.label_font_size,
            style.effective_tick_length(),
            self.metrics.as_ref(),
        );
        match compute_transform(&axis, self.viewport, &gutter) {
            Ok(t) => {
                self.transform = Some(t);
                Ok(())
            }
            Err(e) => {
                self.transform = None;
                self.geometry = None;
                Err(e)
            }
        }
    }

    /// Axes, grid and labels follow the cached layout; the line and markers
    /// follow the dataset and are empty without one.
    fn rebuild_geometry(&mut self) {
        self.geometry = match (self.transform, self.axis) {
            (Some(t), Some(axis)) => Some(build_geometry(
                &self.data,
                &t,
                &axis,
                &self.config.style,
                self.metrics.as_ref(),
            )),
            _ => None,
        };
    }
}
