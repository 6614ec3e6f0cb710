//! Readers for the measurement config and the monitor's results CSV.
mod results;
mod targets;


pub use results::{KeyedSample, ResultRecord, load_records, read_records};
pub use targets::{load_targets, parse_targets};
