//! Display targets written by the score operations.

pub const LATEST_DATE_TARGET: &str = "latest date";
pub const INDICATED_TARGET: &str = "indicated";
pub const CERTAINTY_TARGET: &str = "certainty";

/// A named text slot. Empty until an operation writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTarget {
    name: String,
    text: Option<String>,
}

impl TextTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }
}

/// The three text targets of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardTargets {
    pub latest_date: TextTarget,
    pub indicated: TextTarget,
    pub certainty: TextTarget,
}

impl Default for DashboardTargets {
    fn default() -> Self {
        Self {
            latest_date: TextTarget::new(LATEST_DATE_TARGET),
            indicated: TextTarget::new(INDICATED_TARGET),
            certainty: TextTarget::new(CERTAINTY_TARGET),
        }
    }
}

impl DashboardTargets {
    pub fn iter(&self) -> impl Iterator<Item = &TextTarget> {
        [&self.latest_date, &self.indicated, &self.certainty].into_iter()
    }
}
