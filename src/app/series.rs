use std::path::PathBuf;

use tracing::info;

use crate::analysis::{PipelineSettings, SeriesReport, run_pipeline};
use crate::error::AppResult;
use crate::input::{KeyedSample, load_records, load_targets};
use crate::metrics::ToleranceTable;

/// Everything a `totals` or `rates` run needs.
pub(crate) struct SeriesRequest {
    pub(crate) measure_config: PathBuf,
    pub(crate) results: PathBuf,
    pub(crate) settings: PipelineSettings,
    pub(crate) tolerances: ToleranceTable,
}

pub(crate) fn run_series(request: &SeriesRequest) -> AppResult<Vec<SeriesReport>> {
    let targets = load_targets(&request.measure_config)?;
    let records = load_records(&request.results)?;
    info!(
        targets = targets.len(),
        records = records.len(),
        results = %request.results.display(),
        "Loaded results"
    );

    let samples = records
        .iter()
        .enumerate()
        .map(|(idx, record)| record.to_keyed_sample(idx.saturating_add(1)))
        .collect::<Result<Vec<KeyedSample>, _>>()?;

    let reports = run_pipeline(&targets, samples, &request.tolerances, &request.settings)?;
    Ok(reports)
}
