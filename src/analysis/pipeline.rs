use serde::Serialize;
use tracing::{debug, info};

use crate::args::PositiveU64;
use crate::error::InputError;
use crate::input::KeyedSample;
use crate::metrics::{MetricKey, MetricSeries, ToleranceTable};

use super::baseline::SeriesIngest;
use super::normalize::{rebase_times, to_deltas};
use super::summary::{CountSummary, RateSummary, summarize_counts, summarize_rate};
use super::trim::{
    EdgeTrim, TrimPolicy, remove_edges, samples_per_second, trim_quiet_deltas, trim_tail,
};

/// Which statistics to derive from each series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Per-interval deltas reduced to total and mean.
    Totals,
    /// Cumulative range over elapsed time.
    Rates,
}

impl Variant {
    #[must_use]
    pub const fn default_trim(self) -> TrimPolicy {
        match self {
            Variant::Totals => TrimPolicy::Symmetric,
            Variant::Rates => TrimPolicy::Leading,
        }
    }
}

/// Pipeline stage after which a series can run out of samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Ingest,
    TailTrim,
    EdgeTrim,
    DeltaTrim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub variant: Variant,
    pub sample_rate_us: PositiveU64,
    pub trim: TrimPolicy,
}

impl PipelineSettings {
    #[must_use]
    pub fn edge_trim(&self) -> EdgeTrim {
        self.trim.resolve(samples_per_second(self.sample_rate_us))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeriesOutcome {
    NoSamples { after: Stage },
    Totals(CountSummary),
    Rates(RateSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesReport {
    pub key: MetricKey,
    pub title: &'static str,
    pub outcome: SeriesOutcome,
}

/// Runs every stage after ingestion on one series.
///
/// The cumulative series is tail-trimmed with [`trim_tail`], which compares
/// neighbouring values. Once converted to deltas each value already is an
/// interval's increase, so the delta series uses [`trim_quiet_deltas`] and
/// compares each delta with the tolerance directly. Applying `trim_tail` to
/// deltas would drop steady traffic.
#[must_use]
pub fn process_series(
    mut series: MetricSeries,
    tolerance: f64,
    variant: Variant,
    edge: EdgeTrim,
) -> SeriesOutcome {
    if series.is_empty() {
        return SeriesOutcome::NoSamples {
            after: Stage::Ingest,
        };
    }

    let dropped = trim_tail(&mut series, tolerance);
    debug!(dropped, remaining = series.len(), "Trimmed quiet tail");
    if series.is_empty() {
        return SeriesOutcome::NoSamples {
            after: Stage::TailTrim,
        };
    }

    remove_edges(&mut series, edge);
    if series.is_empty() {
        return SeriesOutcome::NoSamples {
            after: Stage::EdgeTrim,
        };
    }

    match variant {
        Variant::Totals => {
            to_deltas(&mut series);
            let dropped = trim_quiet_deltas(&mut series, tolerance);
            debug!(dropped, remaining = series.len(), "Trimmed quiet delta tail");
            rebase_times(&mut series);
            summarize_counts(&series).map_or(
                SeriesOutcome::NoSamples {
                    after: Stage::DeltaTrim,
                },
                SeriesOutcome::Totals,
            )
        }
        Variant::Rates => summarize_rate(&series).map_or(
            SeriesOutcome::NoSamples {
                after: Stage::EdgeTrim,
            },
            SeriesOutcome::Rates,
        ),
    }
}

/// Ingests `samples` for the configured `targets` and reports every target in
/// configuration order.
///
/// # Errors
///
/// Returns an error when a sample belongs to a key that is not in `targets`.
pub fn run_pipeline<I>(
    targets: &[MetricKey],
    samples: I,
    tolerances: &ToleranceTable,
    settings: &PipelineSettings,
) -> Result<Vec<SeriesReport>, InputError>
where
    I: IntoIterator<Item = KeyedSample>,
{
    let mut ingest = SeriesIngest::new(targets, tolerances);
    let mut ingested: usize = 0;
    for (idx, keyed) in samples.into_iter().enumerate() {
        ingest.observe(&keyed.key, keyed.sample, idx.saturating_add(1))?;
        ingested = ingested.saturating_add(1);
    }

    let edge = settings.edge_trim();
    info!(
        samples = ingested,
        targets = targets.len(),
        variant = ?settings.variant,
        trim_front = edge.front,
        trim_back = edge.back,
        "Analyzing series"
    );

    let reports = ingest
        .finish()
        .into_iter()
        .map(|(key, series)| {
            let tolerance = tolerances.get(key.metric);
            let span = tracing::debug_span!("series", %key);
            let outcome = span.in_scope(|| process_series(series, tolerance, settings.variant, edge));
            if let SeriesOutcome::NoSamples { after } = &outcome {
                debug!(%key, ?after, "No samples left");
            }
            SeriesReport {
                title: key.metric.title(),
                key,
                outcome,
            }
        })
        .collect();
    Ok(reports)
}
