//! Illustrative cache-efficiency estimate.
//!
//! The figure is a probability-weighted share of build time that would stay
//! cached under three hypothetical kinds of change. It does not depend on the
//! actual grouping and is not a measurement.

use crate::model::layers::Layer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeScenario {
    pub name: &'static str,
    pub probability: f64,
    /// Fraction of total build time invalidated by this change.
    pub affected_fraction: f64,
}

impl ChangeScenario {
    pub fn cached_fraction(&self) -> f64 {
        1.0 - self.affected_fraction
    }
}

pub const CHANGE_SCENARIOS: [ChangeScenario; 3] = [
    ChangeScenario {
        name: "config_change",
        probability: 0.80,
        affected_fraction: 0.15,
    },
    ChangeScenario {
        name: "dependency_update",
        probability: 0.15,
        affected_fraction: 0.30,
    },
    ChangeScenario {
        name: "major_refactor",
        probability: 0.05,
        affected_fraction: 0.70,
    },
];

/// Weighted cached fraction across [`CHANGE_SCENARIOS`].
///
/// `total_secs` and `layers` are accepted for symmetry with the report but do
/// not influence the result; an empty build still yields the same figure.
pub fn estimate_cache_efficiency(_total_secs: f64, _layers: &[Layer]) -> f64 {
    CHANGE_SCENARIOS
        .iter()
        .map(|s| s.probability * s.cached_fraction())
        .sum()
}
