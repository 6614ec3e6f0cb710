use serde::Serialize;
use tracing::{debug, warn};

use crate::error::InputError;
use crate::input::ResultRecord;

use super::buckets::BucketCounts;
use super::labels::{iteration_labels, time_labels};
use super::stats::{BucketStats, bucket_stats};

/// Per-slot record counts with the partial first and last slots removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTally {
    pub iterations: BucketCounts,
    pub times: BucketCounts,
    /// Labels seen in the records but absent from the generated range.
    pub unexpected_iterations: usize,
    pub unexpected_times: usize,
    /// Time slots are the distinct times seen in the records because the
    /// generated range would have been too large.
    pub observed_times: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorReport {
    pub records: usize,
    pub iterations: Option<BucketStats>,
    pub times: Option<BucketStats>,
    pub unexpected_iterations: usize,
    pub unexpected_times: usize,
    pub observed_times: bool,
}

/// Counts records per time slot and per iteration.
///
/// Slots are generated from the first to the last record so that slots with
/// no records show up as zero. Times written in whole nanoseconds would need
/// more than [`MAX_SLOT_LABELS`](super::MAX_SLOT_LABELS) slots; the distinct
/// times seen in the records are used instead, so only iterations can have
/// empty slots then. The first and last slot of each kind are dropped, since
/// collection may have started or stopped part way through them.
///
/// # Errors
///
/// Returns an error when there are no records or the boundary labels cannot
/// be expanded into a range.
pub fn tally_slots(records: &[ResultRecord]) -> Result<SlotTally, InputError> {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return Err(InputError::NoRecords);
    };

    let (times, observed_times) = match time_labels(&first.time, &last.time) {
        Ok(labels) => (BucketCounts::zeroed(labels), false),
        Err(InputError::SlotRangeTooLarge { count, .. }) => {
            debug!(
                count,
                "Time range too wide for generated slots, using observed times"
            );
            (BucketCounts::new(), true)
        }
        Err(err) => return Err(err),
    };
    let mut tally = SlotTally {
        iterations: BucketCounts::zeroed(iteration_labels(&first.iteration, &last.iteration)?),
        times,
        observed_times,
        ..SlotTally::default()
    };
    debug!(
        iterations = tally.iterations.len(),
        times = tally.times.len(),
        "Generated slot ranges"
    );

    for record in records {
        if !tally.times.increment(&record.time) && !tally.observed_times {
            warn!(label = %record.time, "Time slot missing from generated range, adding it");
            tally.unexpected_times = tally.unexpected_times.saturating_add(1);
        }
        if !tally.iterations.increment(&record.iteration) {
            warn!(label = %record.iteration, "Iteration missing from generated range, adding it");
            tally.unexpected_iterations = tally.unexpected_iterations.saturating_add(1);
        }
    }

    for label in [&first.time, &last.time] {
        tally.times.remove(label);
    }
    for label in [&first.iteration, &last.iteration] {
        tally.iterations.remove(label);
    }

    Ok(tally)
}

/// Tallies `records` and summarizes both slot distributions.
///
/// # Errors
///
/// See [`tally_slots`].
pub fn analyze_monitor(records: &[ResultRecord]) -> Result<MonitorReport, InputError> {
    let tally = tally_slots(records)?;
    Ok(MonitorReport {
        records: records.len(),
        iterations: bucket_stats(&tally.iterations),
        times: bucket_stats(&tally.times),
        unexpected_iterations: tally.unexpected_iterations,
        unexpected_times: tally.unexpected_times,
        observed_times: tally.observed_times,
    })
}
