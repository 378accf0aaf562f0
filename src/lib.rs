//! Score Gauge - latest-score dashboard
//!
//! Reads a CSV score series and shows its latest reading as three text
//! targets and a gauge chart, in a window or headless.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod gui;
pub mod logging;
