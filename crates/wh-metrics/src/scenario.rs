//! Per-scenario optimized vs current-practice results.

use tracing::debug;

use crate::{MetricsError, MetricsResult};

/// Scenario preselected by dashboards when present.
pub const DEFAULT_SCENARIO: &str = "Loadform 5";

/// One loadform scenario.  Distances are metres per order, times are hours
/// per order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioRecord {
    pub name:               String,
    pub distance_optimized: f64,
    pub distance_current:   f64,
    pub time_optimized:     f64,
    pub time_current:       f64,
}

impl ScenarioRecord {
    pub fn distance_saved(&self) -> f64 {
        self.distance_current - self.distance_optimized
    }

    pub fn time_saved(&self) -> f64 {
        self.time_current - self.time_optimized
    }

    /// Percentage reduction in distance, or `None` when the current distance
    /// is zero.
    pub fn distance_reduction_pct(&self) -> Option<f64> {
        reduction_pct(self.distance_current, self.distance_optimized)
    }

    /// Percentage reduction in time, or `None` when the current time is zero.
    pub fn time_reduction_pct(&self) -> Option<f64> {
        reduction_pct(self.time_current, self.time_optimized)
    }
}

fn reduction_pct(current: f64, optimized: f64) -> Option<f64> {
    (current != 0.0).then(|| (current - optimized) / current * 100.0)
}

// ── ScenarioTable ─────────────────────────────────────────────────────────────

/// Scenarios in source order.  Never empty, names unique.
#[derive(Clone, Debug)]
pub struct ScenarioTable {
    records: Vec<ScenarioRecord>,
}

impl ScenarioTable {
    /// # Errors
    ///
    /// [`MetricsError::NoScenarios`] for an empty list,
    /// [`MetricsError::DuplicateScenario`] when a name repeats.
    pub fn new(records: Vec<ScenarioRecord>) -> MetricsResult<Self> {
        if records.is_empty() {
            return Err(MetricsError::NoScenarios);
        }
        for (i, r) in records.iter().enumerate() {
            if records[..i].iter().any(|prev| prev.name == r.name) {
                return Err(MetricsError::DuplicateScenario(r.name.clone()));
            }
        }
        debug!(scenarios = records.len(), "built scenario table");
        Ok(Self { records })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> MetricsResult<&ScenarioRecord> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| MetricsError::ScenarioNotFound(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioRecord> {
        self.records.iter()
    }

    /// [`DEFAULT_SCENARIO`] when present, otherwise the first scenario.
    pub fn default_selection(&self) -> &ScenarioRecord {
        self.records
            .iter()
            .find(|r| r.name == DEFAULT_SCENARIO)
            .unwrap_or(&self.records[0])
    }
}
