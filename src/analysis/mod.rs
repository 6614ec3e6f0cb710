//! The sample-trimming and rate pipeline.
//!
//! Each tracked series goes through the same stages: baseline detection while
//! ingesting, tail trimming once activity falls back to noise level, removal
//! of the partial first interval plus roughly one second of ramp-up samples,
//! and (for the totals variant) conversion to per-interval deltas. The last
//! stage reduces whatever is left to totals, averages or rates.
#![expect(
    clippy::float_arithmetic,
    reason = "Counter values, tolerances and rates are floating point."
)]

mod baseline;
mod normalize;
mod pipeline;
mod summary;
mod trim;

#[cfg(test)]
mod tests;

pub use baseline::{Observation, SeriesIngest};
pub use normalize::{rebase_times, to_deltas};
pub use pipeline::{
    PipelineSettings, SeriesOutcome, SeriesReport, Stage, Variant, process_series, run_pipeline,
};
pub use summary::{CountSummary, NANOS_PER_SEC, RateSummary, summarize_counts, summarize_rate};
pub use trim::{
    EdgeTrim, TrimPolicy, remove_edges, samples_per_second, trim_quiet_deltas, trim_tail,
};
