//! Gauge Geometry
//! Maps gauge values onto a half circle inside the layout's plot area.
//!
//! Coordinates are in pixels with y pointing down. The range minimum sits at
//! the left end of the arc, the maximum at the right end.

use crate::charts::GaugeSpec;
use std::f64::consts::PI;

/// Share of the plot height reserved for the title.
const TITLE_BAND: f64 = 0.15;
/// Inner radius as a share of the outer radius.
const INNER_RATIO: f64 = 0.62;
/// Segments per full half circle.
const ARC_STEPS: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub center: (f64, f64),
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub title_pos: (f64, f64),
    pub number_pos: (f64, f64),
    pub delta_pos: (f64, f64),
    range: [f64; 2],
}

impl GaugeGeometry {
    pub fn for_spec(spec: &GaugeSpec) -> Self {
        let layout = spec.layout;
        let x0 = layout.margin.l as f64;
        let y0 = layout.margin.t as f64;
        let w = layout.width.saturating_sub(layout.margin.l + layout.margin.r) as f64;
        let h = layout.height.saturating_sub(layout.margin.t + layout.margin.b) as f64;

        let cx = x0 + w / 2.0;
        let cy = y0 + h * 0.85;
        let outer_radius = (w / 2.0).min(h * (0.85 - TITLE_BAND)).max(1.0);
        let inner_radius = outer_radius * INNER_RATIO;

        Self {
            center: (cx, cy),
            outer_radius,
            inner_radius,
            title_pos: (cx, y0),
            number_pos: (cx, cy - inner_radius * 0.15),
            delta_pos: (cx, cy + 4.0),
            range: spec.gauge.axis.range,
        }
    }

    /// Position of a value along the arc in [0, 1], clamped to the axis
    /// range. `None` for `NaN`.
    pub fn fraction(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let [min, max] = self.range;
        let span = max - min;
        if span <= 0.0 {
            return Some(0.0);
        }
        Some(((value - min) / span).clamp(0.0, 1.0))
    }

    /// Angle in radians for a fraction: π at the minimum, 0 at the maximum.
    pub fn angle(&self, fraction: f64) -> f64 {
        PI * (1.0 - fraction)
    }

    pub fn point(&self, angle: f64, radius: f64) -> (f64, f64) {
        let (cx, cy) = self.center;
        (cx + radius * angle.cos(), cy - radius * angle.sin())
    }

    /// Points along the arc between two fractions at the given radius.
    pub fn arc(&self, from: f64, to: f64, radius: f64) -> Vec<(f64, f64)> {
        let steps = ((ARC_STEPS as f64 * (to - from).abs()).ceil() as usize).max(1);
        (0..=steps)
            .map(|i| {
                let f = from + (to - from) * i as f64 / steps as f64;
                self.point(self.angle(f), radius)
            })
            .collect()
    }

    /// Closed outline of the ring segment between two fractions.
    pub fn band(&self, from: f64, to: f64) -> Vec<(f64, f64)> {
        let mut points = self.arc(from, to, self.outer_radius);
        let mut inner = self.arc(from, to, self.inner_radius);
        inner.reverse();
        points.extend(inner);
        points
    }

    /// Radius halfway through the ring, for stroke-based backends.
    pub fn mid_radius(&self) -> f64 {
        (self.outer_radius + self.inner_radius) / 2.0
    }

    pub fn thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GaugeGeometry {
        GaugeGeometry::for_spec(&GaugeSpec::score(0.0, 0.0))
    }

    #[test]
    fn test_fraction_maps_axis_range() {
        let g = geometry();
        assert_eq!(g.fraction(-100.0), Some(0.0));
        assert_eq!(g.fraction(0.0), Some(0.5));
        assert_eq!(g.fraction(100.0), Some(1.0));
        assert_eq!(g.fraction(50.0), Some(0.75));
    }

    #[test]
    fn test_fraction_clamps_and_skips_nan() {
        let g = geometry();
        assert_eq!(g.fraction(250.0), Some(1.0));
        assert_eq!(g.fraction(-1e9), Some(0.0));
        assert_eq!(g.fraction(f64::INFINITY), Some(1.0));
        assert_eq!(g.fraction(f64::NAN), None);
    }

    #[test]
    fn test_arc_ends() {
        let g = geometry();
        let (cx, cy) = g.center;
        let arc = g.arc(0.0, 1.0, g.outer_radius);
        let (lx, ly) = arc[0];
        let (rx, ry) = arc[arc.len() - 1];
        assert!((lx - (cx - g.outer_radius)).abs() < 1e-9);
        assert!((ly - cy).abs() < 1e-9);
        assert!((rx - (cx + g.outer_radius)).abs() < 1e-9);
        assert!((ry - cy).abs() < 1e-9);

        // Midpoint is straight above the center
        let (mx, my) = g.point(g.angle(0.5), g.outer_radius);
        assert!((mx - cx).abs() < 1e-9);
        assert!((my - (cy - g.outer_radius)).abs() < 1e-9);
    }

    #[test]
    fn test_gauge_fits_plot_area() {
        let g = geometry();
        let (cx, cy) = g.center;
        assert!(cx - g.outer_radius >= 25.0);
        assert!(cx + g.outer_radius <= 375.0);
        assert!(cy - g.outer_radius >= 25.0);
        assert!(cy <= 225.0);
        assert!(g.inner_radius < g.outer_radius);
    }

    #[test]
    fn test_band_is_closed_ring_segment() {
        let g = geometry();
        let band = g.band(0.0, 0.5);
        let outer = g.arc(0.0, 0.5, g.outer_radius);
        assert_eq!(band.len(), outer.len() * 2);
    }
}
