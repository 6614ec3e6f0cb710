use std::path::Path;

use tracing::info;

use crate::error::AppResult;
use crate::input::load_records;
use crate::monitor::{MonitorReport, analyze_monitor};

pub(crate) fn run_monitor(results: &Path) -> AppResult<MonitorReport> {
    let records = load_records(results)?;
    info!(records = records.len(), results = %results.display(), "Loaded monitor log");
    let report = analyze_monitor(&records)?;
    Ok(report)
}
