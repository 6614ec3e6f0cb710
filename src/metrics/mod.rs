//! Counter names, series identity and per-metric noise tolerances.
mod tolerance;
mod types;


pub use tolerance::ToleranceTable;
pub use types::{MetricKey, MetricName, MetricSeries, Sample};
