use std::collections::HashMap;

use tracing::trace;

use crate::error::InputError;
use crate::metrics::{MetricKey, MetricSeries, Sample, ToleranceTable};

/// What ingesting one sample did to its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The sample became the new pre-test baseline.
    Baseline,
    /// The series has started and the sample was within tolerance of the
    /// baseline (a counter reset or a stale reading). It still becomes the
    /// new baseline but is not recorded.
    Skipped,
    /// The sample was appended to the series.
    Recorded,
}

#[derive(Debug, Default)]
struct TrackedSeries {
    baseline: Option<Sample>,
    series: MetricSeries,
}

/// Stage one: per-key baseline detection while samples stream in.
///
/// Every sample that rises no more than the metric's tolerance above the
/// baseline replaces it, before and after the series starts. The first sample
/// over tolerance is recorded together with the baseline that preceded it, so
/// the series starts at the last quiet reading.
pub struct SeriesIngest<'table> {
    tolerances: &'table ToleranceTable,
    order: Vec<MetricKey>,
    tracked: HashMap<MetricKey, TrackedSeries>,
}

impl<'table> SeriesIngest<'table> {
    #[must_use]
    pub fn new(targets: &[MetricKey], tolerances: &'table ToleranceTable) -> Self {
        let mut order = Vec::with_capacity(targets.len());
        let mut tracked = HashMap::with_capacity(targets.len());
        for key in targets {
            if tracked.insert(key.clone(), TrackedSeries::default()).is_none() {
                order.push(key.clone());
            }
        }
        Self {
            tolerances,
            order,
            tracked,
        }
    }

    /// Feeds one sample for `key`.
    ///
    /// `row` is only used to point error messages at the offending input row.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UntrackedKey`] when `key` was not configured.
    pub fn observe(
        &mut self,
        key: &MetricKey,
        sample: Sample,
        row: usize,
    ) -> Result<Observation, InputError> {
        let tolerance = self.tolerances.get(key.metric);
        let tracked = self
            .tracked
            .get_mut(key)
            .ok_or_else(|| InputError::UntrackedKey {
                row,
                interface: key.interface.clone(),
                metric: key.metric.to_string(),
            })?;

        let Some(baseline) = tracked.baseline else {
            tracked.baseline = Some(sample);
            return Ok(Observation::Baseline);
        };

        if sample.value - baseline.value <= tolerance {
            tracked.baseline = Some(sample);
            if tracked.series.is_empty() {
                return Ok(Observation::Baseline);
            }
            trace!(%key, row, value = sample.value, "Sample within tolerance of baseline");
            return Ok(Observation::Skipped);
        }

        if tracked.series.is_empty() {
            trace!(%key, time_ns = baseline.time_ns, value = baseline.value, "Test start detected");
            tracked.series.push(baseline);
        }
        tracked.series.push(sample);
        Ok(Observation::Recorded)
    }

    /// Hands back every configured series in configuration order, including
    /// the ones that never left the baseline.
    #[must_use]
    pub fn finish(mut self) -> Vec<(MetricKey, MetricSeries)> {
        self.order
            .into_iter()
            .map(|key| {
                let series = self
                    .tracked
                    .remove(&key)
                    .map(|tracked| tracked.series)
                    .unwrap_or_default();
                (key, series)
            })
            .collect()
    }
}
