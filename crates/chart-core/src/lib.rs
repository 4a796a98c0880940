// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart view, geometry pipeline and painter.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{compute_range, Axis, AxisBounds, AxisConfig, Baseline};
pub use chart::RenderOptions;
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use geometry::{Circle, Point, Segment};
pub use render::{build_geometry, Label, RenderGeometry};
pub use scale::{compute_transform, Gutter, Transform};
pub use text::{format_tick, LabelMetrics, MonospaceMetrics, TextShaper};
pub use theme::ChartStyle;
pub use types::{Rgba, Size};
pub use view::{ChartState, ChartView};
