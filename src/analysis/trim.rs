use serde::Serialize;

use crate::args::PositiveU64;
use crate::metrics::MetricSeries;

/// Microseconds per second; sample rates are given in microseconds.
const MICROS_PER_SEC: f64 = 1_000_000.0;

/// Stage two: drops trailing samples whose increase over the previous sample
/// is within `tolerance`, i.e. the run has gone quiet again.
///
/// A series left with a single sample has no interval to measure and is
/// cleared. Returns the number of samples removed. Applying it twice is the
/// same as applying it once.
pub fn trim_tail(series: &mut MetricSeries, tolerance: f64) -> usize {
    let original = series.len();
    let values = series.values();
    let mut end = values.len();
    while end >= 2 {
        let (Some(prev), Some(last)) = (
            values.get(end.saturating_sub(2)),
            values.get(end.saturating_sub(1)),
        ) else {
            break;
        };
        if last - prev > tolerance {
            break;
        }
        end = end.saturating_sub(1);
    }

    if end <= 1 {
        series.clear();
    } else {
        series.retain_range(0..end);
    }
    original.saturating_sub(series.len())
}

/// Stage two applied to a delta series: each value already is the increase
/// over its interval, so trailing deltas within `tolerance` are dropped. The
/// synthetic leading zero is never a reason to keep a series alive on its own.
///
/// Returns the number of samples removed.
pub fn trim_quiet_deltas(series: &mut MetricSeries, tolerance: f64) -> usize {
    let original = series.len();
    let values = series.values();
    let mut end = values.len();
    while end >= 2 {
        match values.get(end.saturating_sub(1)) {
            Some(delta) if *delta <= tolerance => end = end.saturating_sub(1),
            Some(_) | None => break,
        }
    }

    if end <= 1 {
        series.clear();
    } else {
        series.retain_range(0..end);
    }
    original.saturating_sub(series.len())
}

/// Number of samples covering one second at `sample_rate_us`, rounded half to
/// even.
#[must_use]
pub fn samples_per_second(sample_rate_us: PositiveU64) -> usize {
    let rate = sample_rate_us.get() as f64;
    (MICROS_PER_SEC / rate).round_ties_even() as usize
}

/// How many samples to drop from each end of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeTrim {
    pub front: usize,
    pub back: usize,
}

/// Edge trimming policy.
///
/// Every policy drops the first sample, which may cover only part of an
/// interval, and about one second of ramp-up after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum TrimPolicy {
    /// `samples + 1` from both ends.
    Symmetric,
    /// `samples + 1` from the front, one sample from the back.
    Leading,
    /// Explicit counts.
    Custom { front: usize, back: usize },
}

impl TrimPolicy {
    #[must_use]
    pub const fn resolve(self, samples_per_second: usize) -> EdgeTrim {
        let warmup = samples_per_second.saturating_add(1);
        match self {
            TrimPolicy::Symmetric => EdgeTrim {
                front: warmup,
                back: warmup,
            },
            TrimPolicy::Leading => EdgeTrim {
                front: warmup,
                back: 1,
            },
            TrimPolicy::Custom { front, back } => EdgeTrim { front, back },
        }
    }
}

/// Stage three: removes `trim.front` samples from the start and `trim.back`
/// from the end. Clears the series when nothing would remain.
pub fn remove_edges(series: &mut MetricSeries, trim: EdgeTrim) {
    let len = series.len();
    let end = len.saturating_sub(trim.back);
    if trim.front >= end {
        series.clear();
    } else {
        series.retain_range(trim.front..end);
    }
}
