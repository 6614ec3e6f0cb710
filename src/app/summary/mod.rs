mod lines;

use serde::Serialize;

use crate::analysis::{EdgeTrim, PipelineSettings, SeriesReport, Variant};
use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::monitor::MonitorReport;

pub(crate) use lines::{monitor_lines, series_lines};

/// JSON document written for `totals` and `rates`.
#[derive(Debug, Serialize)]
pub(crate) struct SeriesDocument<'report> {
    pub(crate) variant: Variant,
    pub(crate) sample_rate_us: u64,
    pub(crate) trim: EdgeTrim,
    pub(crate) series: &'report [SeriesReport],
}

impl<'report> SeriesDocument<'report> {
    pub(crate) fn new(settings: &PipelineSettings, series: &'report [SeriesReport]) -> Self {
        Self {
            variant: settings.variant,
            sample_rate_us: settings.sample_rate_us.get(),
            trim: settings.edge_trim(),
            series,
        }
    }
}

pub(crate) fn print_series(
    settings: &PipelineSettings,
    reports: &[SeriesReport],
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Text => print_lines(&series_lines(reports)),
        OutputFormat::Json => {
            let document = SeriesDocument::new(settings, reports);
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }
    Ok(())
}

pub(crate) fn print_monitor(report: &MonitorReport, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => print_lines(&monitor_lines(report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
