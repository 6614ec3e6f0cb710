//! Sampling-frequency analysis of the monitor loop.
//!
//! Every record in the results file is tallied into the time slot and the
//! loop iteration it was taken in. A healthy monitor puts the same number of
//! records into every slot; gaps and bunching show up in the statistics.
mod buckets;
mod labels;
mod stats;
mod tally;


pub use buckets::BucketCounts;
pub use labels::{MAX_SLOT_LABELS, iteration_labels, time_labels};
pub use stats::{BucketStats, bucket_stats};
pub use tally::{MonitorReport, SlotTally, analyze_monitor, tally_slots};
