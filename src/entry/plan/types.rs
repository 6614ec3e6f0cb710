use std::path::PathBuf;

use crate::app::SeriesRequest;
use crate::args::OutputFormat;

pub(in crate::entry) enum RunPlan {
    Series {
        request: SeriesRequest,
        format: OutputFormat,
    },
    Monitor {
        results: PathBuf,
        format: OutputFormat,
    },
}
