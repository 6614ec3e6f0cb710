use crate::app::{self, run_monitor, run_series};
use crate::error::AppResult;

use super::types::RunPlan;

pub(crate) fn execute_plan(plan: &RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Series { request, format } => {
            let reports = run_series(request)?;
            app::summary::print_series(&request.settings, &reports, *format)
        }
        RunPlan::Monitor { results, format } => {
            let report = run_monitor(results)?;
            app::summary::print_monitor(&report, *format)
        }
    }
}
