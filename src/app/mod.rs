mod monitor;
mod series;
pub(crate) mod summary;


pub(crate) use monitor::run_monitor;
pub(crate) use series::{SeriesRequest, run_series};
