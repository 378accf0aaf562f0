//! Gauge Configuration Module
//! Declarative description of the score gauge, shared by every backend.

use crate::data::format_number;
use serde::Serialize;

pub const GAUGE_TITLE: &str = "Score";
pub const GAUGE_MODE: &str = "number+delta+gauge";
pub const AXIS_RANGE: [f64; 2] = [-100.0, 100.0];
pub const GAUGE_WIDTH: u32 = 400;
pub const GAUGE_HEIGHT: u32 = 250;
pub const GAUGE_MARGIN: u32 = 25;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delta {
    pub reference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub visible: bool,
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub axis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub row: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeLayout {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
}

impl Default for GaugeLayout {
    fn default() -> Self {
        Self {
            width: GAUGE_WIDTH,
            height: GAUGE_HEIGHT,
            margin: Margin {
                t: GAUGE_MARGIN,
                b: GAUGE_MARGIN,
                l: GAUGE_MARGIN,
                r: GAUGE_MARGIN,
            },
        }
    }
}

/// Direction of the value relative to the delta reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaDirection {
    Increasing,
    Decreasing,
    Unchanged,
}

/// Single-value indicator gauge: number, delta and half-circle gauge.
///
/// Serializes with the field names charting front-ends expect
/// (`type`, `mode`, `delta.reference`, `gauge.axis.range`, ...).
/// Non-finite numbers serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub value: f64,
    pub delta: Delta,
    pub gauge: Gauge,
    pub domain: Domain,
    pub title: Title,
    pub layout: GaugeLayout,
}

impl GaugeSpec {
    /// The score gauge: hidden axis over [-100, 100], titled "Score".
    pub fn score(value: f64, reference: f64) -> Self {
        Self {
            kind: "indicator",
            mode: GAUGE_MODE,
            value,
            delta: Delta { reference },
            gauge: Gauge {
                axis: Axis {
                    visible: false,
                    range: AXIS_RANGE,
                },
            },
            domain: Domain { row: 0, column: 0 },
            title: Title {
                text: GAUGE_TITLE.to_string(),
            },
            layout: GaugeLayout::default(),
        }
    }

    pub fn delta_value(&self) -> f64 {
        self.value - self.delta.reference
    }

    pub fn delta_direction(&self) -> DeltaDirection {
        let delta = self.delta_value();
        if delta > 0.0 {
            DeltaDirection::Increasing
        } else if delta < 0.0 {
            DeltaDirection::Decreasing
        } else {
            DeltaDirection::Unchanged
        }
    }

    /// Main number, rounded to two decimals.
    pub fn number_text(&self) -> String {
        format_number(round2(self.value))
    }

    /// Delta annotation, e.g. `▲12.5`. Empty when either side is not a number.
    pub fn delta_text(&self) -> String {
        let delta = self.delta_value();
        if delta.is_nan() {
            return String::new();
        }
        let magnitude = format_number(round2(delta.abs()));
        match self.delta_direction() {
            DeltaDirection::Increasing => format!("▲{magnitude}"),
            DeltaDirection::Decreasing => format!("▼{magnitude}"),
            DeltaDirection::Unchanged => magnitude,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn round2(value: f64) -> f64 {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}
