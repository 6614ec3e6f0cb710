use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::analysis::{TrimPolicy, Variant};

use super::parsers::{parse_bool_env, parse_positive_u64};
use super::types::{OutputFormat, PositiveU64, TrimMode};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Offline analysis of statmon interface counter logs - baseline detection, edge trimming, per-interface totals, averages and rates."
)]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (sets log level to debug unless overridden by STATMON_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env, global = true)]
    pub no_color: bool,

    /// Path to config file (TOML/JSON). Defaults to ./statmon-analyze.toml or ./statmon-analyze.json if present.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Report format written to stdout
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "text",
        ignore_case = true,
        global = true
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Per-interval delta totals and averages for every tracked counter
    Totals(TotalsArgs),
    /// Elapsed-time normalized rates for every tracked counter
    Rates(RatesArgs),
    /// Sampling-frequency statistics of the monitor loop
    Monitor(MonitorArgs),
}

#[derive(Debug, Args, Clone)]
pub struct TotalsArgs {
    /// Measurement config: one '<interface> <metric>' pair per line
    pub measure_config: PathBuf,

    /// Results CSV written by statmon
    pub results: PathBuf,

    /// Interval the monitor sampled at, in microseconds
    #[arg(value_parser = parse_positive_u64)]
    pub sample_rate_us: PositiveU64,

    #[command(flatten)]
    pub trim: TrimArgs,
}

#[derive(Debug, Args, Clone)]
pub struct RatesArgs {
    /// Interval the monitor sampled at, in microseconds
    #[arg(value_parser = parse_positive_u64)]
    pub sample_rate_us: PositiveU64,

    /// Measurement config: one '<interface> <metric>' pair per line
    pub measure_config: PathBuf,

    /// Results CSV written by statmon
    pub results: PathBuf,

    #[command(flatten)]
    pub trim: TrimArgs,
}

#[derive(Debug, Args, Clone)]
pub struct MonitorArgs {
    /// Results CSV written by statmon
    pub results: PathBuf,
}

#[derive(Debug, Args, Clone, Default, PartialEq, Eq)]
pub struct TrimArgs {
    /// Edge trimming policy (defaults: symmetric for totals, leading for rates)
    #[arg(long = "trim", value_enum, conflicts_with_all = ["trim_front", "trim_back"])]
    pub trim: Option<TrimMode>,

    /// Samples to drop from the start of every series (custom policy, needs --trim-back)
    #[arg(long = "trim-front", requires = "trim_back")]
    pub trim_front: Option<usize>,

    /// Samples to drop from the end of every series (custom policy, needs --trim-front)
    #[arg(long = "trim-back", requires = "trim_front")]
    pub trim_back: Option<usize>,
}

impl TrimArgs {
    /// Resolves the selected policy, falling back to the variant's default.
    #[must_use]
    pub const fn policy(&self, variant: Variant) -> TrimPolicy {
        match (self.trim, self.trim_front, self.trim_back) {
            (Some(TrimMode::Symmetric), _, _) => TrimPolicy::Symmetric,
            (Some(TrimMode::Leading), _, _) => TrimPolicy::Leading,
            (None, Some(front), Some(back)) => TrimPolicy::Custom { front, back },
            (None, Some(_), None) | (None, None, Some(_)) | (None, None, None) => {
                variant.default_trim()
            }
        }
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.trim.is_some() || self.trim_front.is_some() || self.trim_back.is_some()
    }
}

impl Command {
    /// Trim arguments of the series subcommands.
    pub fn trim_args_mut(&mut self) -> Option<&mut TrimArgs> {
        match self {
            Command::Totals(args) => Some(&mut args.trim),
            Command::Rates(args) => Some(&mut args.trim),
            Command::Monitor(_) => None,
        }
    }
}
