use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{AnalyzeArgs, TrimArgs};
use crate::error::{AppError, AppResult, ConfigError};
use crate::metrics::ToleranceTable;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the
/// command line or through the environment win.
///
/// # Errors
///
/// Returns an error when the trim settings in the config are contradictory.
pub fn apply_config(
    args: &mut AnalyzeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    let config_trim = config_trim(config)?;

    if !set_by_user(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    if !set_by_user(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if let Some(trim) = args.command.trim_args_mut()
        && !trim.is_set()
    {
        *trim = config_trim;
    }

    Ok(())
}

/// Builds the tolerance table from the defaults and the config overrides.
///
/// # Errors
///
/// Returns an error when an override is negative or not finite.
pub fn tolerance_table(config: Option<&ConfigFile>) -> AppResult<ToleranceTable> {
    let Some(overrides) = config.and_then(|config| config.tolerances.as_ref()) else {
        return Ok(ToleranceTable::default());
    };
    ToleranceTable::with_overrides(overrides).map_err(|(metric, source)| {
        AppError::config(ConfigError::InvalidTolerance {
            metric: metric.as_str().to_owned(),
            source,
        })
    })
}

fn config_trim(config: &ConfigFile) -> AppResult<TrimArgs> {
    if config.trim.is_some() && (config.trim_front.is_some() || config.trim_back.is_some()) {
        return Err(AppError::config(ConfigError::Conflict {
            left: "trim",
            right: "trim_front/trim_back",
        }));
    }
    if config.trim_front.is_some() != config.trim_back.is_some() {
        return Err(AppError::config(ConfigError::IncompleteTrimCounts));
    }
    Ok(TrimArgs {
        trim: config.trim,
        trim_front: config.trim_front,
        trim_back: config.trim_back,
    })
}

fn set_by_user(matches: &ArgMatches, name: &str) -> bool {
    let explicit = |matches: &ArgMatches| {
        matches!(
            matches.value_source(name),
            Some(ValueSource::CommandLine | ValueSource::EnvVariable)
        )
    };
    explicit(matches)
        || matches
            .subcommand()
            .is_some_and(|(_, sub_matches)| explicit(sub_matches))
}
