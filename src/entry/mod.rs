mod plan;

use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::AnalyzeArgs;
use crate::error::AppResult;
use plan::{build_plan, execute_plan, load_and_apply_config};

pub(crate) fn run() -> AppResult<()> {
    let Some((args, matches)) = parse_args()? else {
        return Ok(());
    };

    let (args, config) = load_and_apply_config(args, &matches)?;
    crate::system::logger::init_logging(args.verbose, args.no_color);

    let plan = build_plan(args, config.as_ref())?;
    execute_plan(&plan)
}

fn parse_args() -> AppResult<Option<(AnalyzeArgs, ArgMatches)>> {
    let matches = match AnalyzeArgs::command().try_get_matches_from(std::env::args_os()) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let args = AnalyzeArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}
