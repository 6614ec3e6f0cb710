//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;


pub use cli::{AnalyzeArgs, Command, MonitorArgs, RatesArgs, TotalsArgs, TrimArgs};
pub use types::{OutputFormat, PositiveU64, TrimMode};
