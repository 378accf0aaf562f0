//! Charts module - Gauge configuration and rendering

mod geometry;
mod host;
mod plotter;
mod renderer;
mod spec;

pub use geometry::GaugeGeometry;
pub use host::{GaugeHost, GaugeInstance, GAUGE_TARGET};
pub use plotter::ChartPlotter;
pub use renderer::{GaugeRenderer, RenderError};
pub use spec::{
    Axis, Delta, DeltaDirection, Domain, Gauge, GaugeLayout, GaugeSpec, Margin, Title,
    AXIS_RANGE, GAUGE_HEIGHT, GAUGE_MARGIN, GAUGE_MODE, GAUGE_TITLE, GAUGE_WIDTH,
};
