use std::collections::BTreeMap;

use crate::error::ValidationError;

use super::types::MetricName;

/// Default noise tolerance per counter.
///
/// A change within tolerance is treated as background traffic (ARP, neighbour
/// discovery and the like); anything above it means the test is running.
const DEFAULT_TOLERANCES: [(MetricName, f64); 8] = [
    (MetricName::RxPackets, 50.0),
    (MetricName::TxPackets, 50.0),
    (MetricName::RxBytes, 1000.0),
    (MetricName::TxBytes, 1000.0),
    (MetricName::RxDropped, 0.0),
    (MetricName::TxDropped, 0.0),
    (MetricName::RxFifoErrors, 0.0),
    (MetricName::TxFifoErrors, 0.0),
];

/// Immutable per-metric noise thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ToleranceTable {
    values: [f64; 8],
}

impl Default for ToleranceTable {
    fn default() -> Self {
        let mut values = [0.0; 8];
        for (metric, tolerance) in DEFAULT_TOLERANCES {
            if let Some(slot) = values.get_mut(metric.index()) {
                *slot = tolerance;
            }
        }
        Self { values }
    }
}

impl ToleranceTable {
    /// Builds a table from the defaults with `overrides` applied on top.
    ///
    /// # Errors
    ///
    /// Returns the offending metric and error when an override is negative,
    /// NaN or infinite.
    pub fn with_overrides(
        overrides: &BTreeMap<MetricName, f64>,
    ) -> Result<Self, (MetricName, ValidationError)> {
        let mut table = Self::default();
        for (metric, tolerance) in overrides {
            let checked = validate_tolerance(*tolerance).map_err(|err| (*metric, err))?;
            if let Some(slot) = table.values.get_mut(metric.index()) {
                *slot = checked;
            }
        }
        Ok(table)
    }

    #[must_use]
    pub fn get(&self, metric: MetricName) -> f64 {
        self.values.get(metric.index()).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricName, f64)> + '_ {
        MetricName::ALL
            .into_iter()
            .map(move |metric| (metric, self.get(metric)))
    }
}

fn validate_tolerance(value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidTolerance { value })
    }
}
