use serde::Deserialize;
use std::collections::BTreeMap;

use crate::args::{OutputFormat, TrimMode};
use crate::metrics::MetricName;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub output_format: Option<OutputFormat>,
    pub no_color: Option<bool>,
    pub trim: Option<TrimMode>,
    pub trim_front: Option<usize>,
    pub trim_back: Option<usize>,
    /// Per-metric noise tolerance overrides, keyed by counter name.
    pub tolerances: Option<BTreeMap<MetricName, f64>>,
}
