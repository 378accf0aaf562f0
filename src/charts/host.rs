//! Gauge Host Module
//! Owns the chart instance mounted in a named chart target.

use crate::charts::GaugeSpec;

/// Default name of the gauge chart target.
pub const GAUGE_TARGET: &str = "gauge";

/// One mounted chart. Instances are immutable; a re-render mounts a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeInstance {
    id: u64,
    target: String,
    spec: GaugeSpec,
}

impl GaugeInstance {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn spec(&self) -> &GaugeSpec {
        &self.spec
    }
}

/// A chart target holding at most one live gauge instance.
#[derive(Debug)]
pub struct GaugeHost {
    target: String,
    next_id: u64,
    current: Option<GaugeInstance>,
}

impl Default for GaugeHost {
    fn default() -> Self {
        Self::new(GAUGE_TARGET)
    }
}

impl GaugeHost {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            next_id: 1,
            current: None,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The live instance, if any.
    pub fn current(&self) -> Option<&GaugeInstance> {
        self.current.as_ref()
    }

    /// Number of instances mounted over the host's lifetime.
    pub fn mounted_total(&self) -> u64 {
        self.next_id - 1
    }

    /// Mount a new instance, disposing of the previous one.
    pub fn mount(&mut self, spec: GaugeSpec) -> &GaugeInstance {
        let instance = GaugeInstance {
            id: self.next_id,
            target: self.target.clone(),
            spec,
        };
        self.next_id += 1;

        if let Some(old) = self.current.take() {
            tracing::debug!(target_name = %self.target, instance = old.id, "gauge instance disposed");
        }
        self.current.insert(instance)
    }

    /// Remove the live instance without replacing it.
    pub fn clear(&mut self) -> Option<GaugeInstance> {
        self.current.take()
    }
}
