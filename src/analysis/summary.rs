use serde::Serialize;

use crate::metrics::MetricSeries;

/// Nanoseconds per second; sample times are recorded in nanoseconds.
pub const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Totals-variant statistics over per-interval deltas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountSummary {
    pub sampled_secs: f64,
    pub samples: usize,
    pub total: f64,
    pub mean: f64,
}

/// Rate-variant statistics over a still-cumulative series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateSummary {
    pub sampled_secs: f64,
    pub samples: usize,
    pub total: f64,
    /// Units per second; `None` when the series spans no time.
    pub rate: Option<f64>,
}

fn sampled_secs(series: &MetricSeries) -> Option<f64> {
    let first = series.first()?;
    let last = series.last()?;
    Some((last.time_ns - first.time_ns) / NANOS_PER_SEC)
}

/// Sum and mean of a delta series. `None` for an empty series.
#[must_use]
pub fn summarize_counts(series: &MetricSeries) -> Option<CountSummary> {
    let samples = series.len();
    if samples == 0 {
        return None;
    }
    let total: f64 = series.values().iter().sum();
    Some(CountSummary {
        sampled_secs: sampled_secs(series)?,
        samples,
        total,
        mean: total / samples as f64,
    })
}

/// Increase between the first and last value, normalized by elapsed seconds.
/// `None` for an empty series.
#[must_use]
pub fn summarize_rate(series: &MetricSeries) -> Option<RateSummary> {
    let first = series.first()?;
    let last = series.last()?;
    let value_range = last.value - first.value;
    let time_range = (last.time_ns - first.time_ns) / NANOS_PER_SEC;
    let rate = (time_range > 0.0).then(|| value_range / time_range);
    Some(RateSummary {
        sampled_secs: time_range,
        samples: series.len(),
        total: value_range,
        rate,
    })
}
