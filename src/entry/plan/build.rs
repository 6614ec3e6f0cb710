use clap::ArgMatches;
use tracing::debug;

use crate::analysis::{PipelineSettings, Variant};
use crate::app::SeriesRequest;
use crate::args::{AnalyzeArgs, Command};
use crate::config::types::ConfigFile;
use crate::error::AppResult;

use super::types::RunPlan;

pub(crate) fn load_and_apply_config(
    mut args: AnalyzeArgs,
    matches: &ArgMatches,
) -> AppResult<(AnalyzeArgs, Option<ConfigFile>)> {
    let loaded_config = crate::config::load_config(args.config.as_deref())?;
    if let Some(config) = loaded_config.as_ref() {
        crate::config::apply_config(&mut args, matches, config)?;
    }
    Ok((args, loaded_config))
}

pub(crate) fn build_plan(args: AnalyzeArgs, config: Option<&ConfigFile>) -> AppResult<RunPlan> {
    let format = args.output_format;
    let (variant, measure_config, results, sample_rate_us, trim) = match args.command {
        Command::Monitor(monitor) => {
            return Ok(RunPlan::Monitor {
                results: monitor.results,
                format,
            });
        }
        Command::Totals(totals) => (
            Variant::Totals,
            totals.measure_config,
            totals.results,
            totals.sample_rate_us,
            totals.trim,
        ),
        Command::Rates(rates) => (
            Variant::Rates,
            rates.measure_config,
            rates.results,
            rates.sample_rate_us,
            rates.trim,
        ),
    };

    let tolerances = crate::config::tolerance_table(config)?;
    for (metric, tolerance) in tolerances.iter() {
        debug!(%metric, tolerance, "Tolerance");
    }

    let settings = PipelineSettings {
        variant,
        sample_rate_us,
        trim: trim.policy(variant),
    };
    Ok(RunPlan::Series {
        request: SeriesRequest {
            measure_config,
            results,
            settings,
            tolerances,
        },
        format,
    })
}
