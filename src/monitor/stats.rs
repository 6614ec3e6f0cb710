use serde::Serialize;

use super::buckets::BucketCounts;

/// Distribution of samples over buckets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketStats {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub intervals: usize,
    pub total: u64,
    pub max: u64,
    pub min: u64,
    /// Labels of buckets that received no samples, in bucket order.
    pub unsampled: Vec<String>,
    /// First bucket holding the minimum count.
    pub min_label: String,
    /// First bucket holding the maximum count.
    pub max_label: String,
}

/// Summarizes `counts`; `None` when there are no buckets.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "Mean and standard deviation are floating point."
)]
pub fn bucket_stats(counts: &BucketCounts) -> Option<BucketStats> {
    let mut buckets = counts.iter();
    let (first_label, first_count) = buckets.next()?;

    let mut total = first_count;
    let mut min = (first_label, first_count);
    let mut max = (first_label, first_count);
    for (label, count) in buckets {
        total = total.saturating_add(count);
        if count < min.1 {
            min = (label, count);
        }
        if count > max.1 {
            max = (label, count);
        }
    }

    let intervals = counts.len();
    let n = intervals as f64;
    let mean = total as f64 / n;
    let variance = counts
        .iter()
        .map(|(_, count)| {
            let diff = count as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    let unsampled = counts
        .iter()
        .filter(|(_, count)| *count == 0)
        .map(|(label, _)| label.to_owned())
        .collect();

    Some(BucketStats {
        mean,
        std_dev: variance.sqrt(),
        intervals,
        total,
        max: max.1,
        min: min.1,
        unsampled,
        min_label: min.0.to_owned(),
        max_label: max.0.to_owned(),
    })
}
