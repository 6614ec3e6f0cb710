use tracing::trace;

use crate::metrics::MetricSeries;

/// Turns cumulative counter values into per-interval deltas in place.
///
/// The first element has no predecessor and becomes 0. Works from the back so
/// each predecessor is still cumulative when it is subtracted.
pub fn to_deltas(series: &mut MetricSeries) {
    let values = series.values_mut();
    for idx in (1..values.len()).rev() {
        let Some(prev) = values.get(idx.saturating_sub(1)).copied() else {
            continue;
        };
        if let Some(current) = values.get_mut(idx) {
            trace!(current = *current, prev, delta = *current - prev, "Interval delta");
            *current -= prev;
        }
    }
    if let Some(first) = values.first_mut() {
        *first = 0.0;
    }
}

/// Shifts all times so the series starts at 0.
pub fn rebase_times(series: &mut MetricSeries) {
    let times = series.times_mut();
    let Some(base) = times.first().copied() else {
        return;
    };
    for time in times.iter_mut() {
        *time -= base;
    }
}
