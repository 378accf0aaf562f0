//! Dashboard configuration shared by the window and the headless commands.

use crate::charts::GAUGE_TARGET;
use crate::data::RowSelection;
use std::path::PathBuf;

/// Score file location relative to the working directory.
pub const DEFAULT_SOURCE: &str = "assets/data/score.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Score CSV to read on every invocation.
    pub source: PathBuf,
    /// How the latest row is picked.
    pub selection: RowSelection,
    /// Name of the gauge chart target.
    pub gauge_target: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            selection: RowSelection::default(),
            gauge_target: GAUGE_TARGET.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, selection: RowSelection) -> Self {
        self.selection = selection;
        self
    }
}
