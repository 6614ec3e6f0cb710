use super::*;
use crate::args::PositiveU64;
use crate::error::InputError;
use crate::input::KeyedSample;
use crate::metrics::{MetricKey, MetricName, MetricSeries, Sample, ToleranceTable};
use std::collections::BTreeMap;

const EPSILON: f64 = 1e-9;

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < EPSILON
}

fn rate_us(value: u64) -> Result<PositiveU64, String> {
    PositiveU64::try_from(value).map_err(|err| err.to_string())
}

fn tolerances_with(metric: MetricName, tolerance: f64) -> Result<ToleranceTable, String> {
    let mut overrides = BTreeMap::new();
    overrides.insert(metric, tolerance);
    ToleranceTable::with_overrides(&overrides).map_err(|(name, err)| format!("{}: {}", name, err))
}

fn series(times: &[f64], values: &[f64]) -> MetricSeries {
    let samples: Vec<Sample> = times
        .iter()
        .zip(values)
        .map(|(time, value)| Sample::new(*time, *value))
        .collect();
    MetricSeries::from_samples(&samples)
}

/// Quiet for three samples, then +100 every half second for twelve samples,
/// then quiet again. Times are in nanoseconds.
fn ramp_samples(key: &MetricKey) -> Vec<KeyedSample> {
    let values = [
        0.0, 10.0, 20.0, 120.0, 220.0, 320.0, 420.0, 520.0, 620.0, 720.0, 820.0, 920.0, 1020.0,
        1120.0, 1220.0, 1220.0, 1225.0,
    ];
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| KeyedSample {
            key: key.clone(),
            sample: Sample::new(idx as f64 * 500_000_000.0, *value),
        })
        .collect()
}

#[test]
fn baseline_absorbs_noise_until_first_jump() -> Result<(), String> {
    let key = MetricKey::new("eth0", MetricName::RxPackets);
    let table = tolerances_with(MetricName::RxPackets, 2.0)?;
    let mut ingest = SeriesIngest::new(std::slice::from_ref(&key), &table);

    let mut observations = Vec::new();
    for (time, value) in [(0.0, 5.0), (1.0, 6.0), (2.0, 4.0), (3.0, 50.0)] {
        observations.push(
            ingest
                .observe(&key, Sample::new(time, value), 1)
                .map_err(|err| err.to_string())?,
        );
    }
    if observations
        != [
            Observation::Baseline,
            Observation::Baseline,
            Observation::Baseline,
            Observation::Recorded,
        ]
    {
        return Err(format!("Unexpected observations: {:?}", observations));
    }

    let finished = ingest.finish();
    let Some((_, recorded)) = finished.first() else {
        return Err("Missing series".to_owned());
    };
    if recorded.times() != [2.0, 3.0] || recorded.values() != [4.0, 50.0] {
        return Err(format!("Unexpected series: {:?}", recorded));
    }
    Ok(())
}

#[test]
fn quiet_sample_after_start_moves_baseline() -> Result<(), String> {
    let key = MetricKey::new("eth0", MetricName::RxPackets);
    let table = tolerances_with(MetricName::RxPackets, 2.0)?;
    let mut ingest = SeriesIngest::new(std::slice::from_ref(&key), &table);

    let inputs = [(0.0, 5.0), (1.0, 50.0), (2.0, 6.0), (3.0, 80.0)];
    let mut observations = Vec::new();
    for (time, value) in inputs {
        observations.push(
            ingest
                .observe(&key, Sample::new(time, value), 1)
                .map_err(|err| err.to_string())?,
        );
    }
    if observations.get(2) != Some(&Observation::Skipped) {
        return Err(format!("Unexpected observations: {:?}", observations));
    }
    let finished = ingest.finish();
    let Some((_, recorded)) = finished.first() else {
        return Err("Missing series".to_owned());
    };
    if recorded.values() != [5.0, 50.0, 80.0] {
        return Err(format!("Unexpected series: {:?}", recorded));
    }
    Ok(())
}

#[test]
fn samples_near_a_dropped_counter_are_absorbed() -> Result<(), String> {
    let key = MetricKey::new("eth0", MetricName::RxPackets);
    let table = tolerances_with(MetricName::RxPackets, 50.0)?;
    let mut ingest = SeriesIngest::new(std::slice::from_ref(&key), &table);

    let inputs = [(0.0, 0.0), (1.0, 100.0), (2.0, 30.0), (3.0, 60.0), (4.0, 90.0)];
    let mut observations = Vec::new();
    for (time, value) in inputs {
        observations.push(
            ingest
                .observe(&key, Sample::new(time, value), 1)
                .map_err(|err| err.to_string())?,
        );
    }
    let expected = [
        Observation::Baseline,
        Observation::Recorded,
        Observation::Skipped,
        Observation::Skipped,
        Observation::Skipped,
    ];
    if observations != expected {
        return Err(format!("Unexpected observations: {:?}", observations));
    }
    let finished = ingest.finish();
    let Some((_, recorded)) = finished.first() else {
        return Err("Missing series".to_owned());
    };
    if recorded.values() != [0.0, 100.0] || recorded.times() != [0.0, 1.0] {
        return Err(format!("Unexpected series: {:?}", recorded));
    }
    Ok(())
}

#[test]
fn untracked_key_is_an_error() -> Result<(), String> {
    let tracked = MetricKey::new("eth0", MetricName::RxPackets);
    let stray = MetricKey::new("eth9", MetricName::RxPackets);
    let table = ToleranceTable::default();
    let mut ingest = SeriesIngest::new(std::slice::from_ref(&tracked), &table);
    match ingest.observe(&stray, Sample::new(0.0, 1.0), 7) {
        Err(InputError::UntrackedKey { row: 7, interface, .. }) if interface == "eth9" => Ok(()),
        other => Err(format!("Unexpected result: {:?}", other)),
    }
}

#[test]
fn trim_tail_drops_quiet_samples() -> Result<(), String> {
    let mut trimmed = series(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 100.0, 200.0, 210.0, 210.0]);
    let dropped = trim_tail(&mut trimmed, 50.0);
    if dropped != 2 || trimmed.values() != [0.0, 100.0, 200.0] {
        return Err(format!("Unexpected trim: {} {:?}", dropped, trimmed));
    }
    Ok(())
}

#[test]
fn trim_tail_is_idempotent() -> Result<(), String> {
    let mut once = series(
        &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        &[0.0, 60.0, 200.0, 260.0, 300.0, 301.0],
    );
    trim_tail(&mut once, 50.0);
    let mut twice = once.clone();
    let dropped = trim_tail(&mut twice, 50.0);
    if dropped != 0 || once != twice {
        return Err(format!("Second trim changed the series: {:?}", twice));
    }
    Ok(())
}

#[test]
fn trim_tail_clears_series_without_activity() -> Result<(), String> {
    let mut quiet = series(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]);
    trim_tail(&mut quiet, 50.0);
    if !quiet.is_empty() {
        return Err(format!("Expected empty series, got {:?}", quiet));
    }
    let mut empty = MetricSeries::new();
    if trim_tail(&mut empty, 0.0) != 0 {
        return Err("Trimming an empty series removed samples".to_owned());
    }
    Ok(())
}

#[test]
fn trim_quiet_deltas_drops_trailing_noise() -> Result<(), String> {
    let mut deltas = series(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 100.0, 100.0, 3.0, 0.0]);
    let dropped = trim_quiet_deltas(&mut deltas, 50.0);
    if dropped != 2 || deltas.values() != [0.0, 100.0, 100.0] {
        return Err(format!("Unexpected trim: {} {:?}", dropped, deltas));
    }
    let mut idle = series(&[0.0, 1.0], &[0.0, 1.0]);
    trim_quiet_deltas(&mut idle, 50.0);
    if !idle.is_empty() {
        return Err("Idle delta series should be cleared".to_owned());
    }
    Ok(())
}

#[test]
fn deltas_sum_to_total_increase() -> Result<(), String> {
    let values = [3.0, 10.0, 10.0, 25.0, 26.0, 90.0];
    let mut converted = series(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &values);
    to_deltas(&mut converted);

    if converted.values() != [0.0, 7.0, 0.0, 15.0, 1.0, 64.0] {
        return Err(format!("Unexpected deltas: {:?}", converted.values()));
    }
    let tail_sum: f64 = converted.values().iter().skip(1).sum();
    if !close(tail_sum, 90.0 - 3.0) {
        return Err(format!("Deltas sum to {}", tail_sum));
    }
    Ok(())
}

#[test]
fn rebase_starts_at_zero() -> Result<(), String> {
    let mut shifted = series(&[500.0, 750.0, 1000.0], &[1.0, 2.0, 3.0]);
    rebase_times(&mut shifted);
    if shifted.times() != [0.0, 250.0, 500.0] {
        return Err(format!("Unexpected times: {:?}", shifted.times()));
    }
    Ok(())
}

#[test]
fn samples_per_second_rounds_half_to_even() -> Result<(), String> {
    let checks = [
        (100_000, 10),
        (250_000, 4),
        (300_000, 3),
        (400_000, 2),
        (1_000_000, 1),
        (2_000_000, 0),
    ];
    for (rate, expected) in checks {
        let got = samples_per_second(rate_us(rate)?);
        if got != expected {
            return Err(format!("{}us: expected {}, got {}", rate, expected, got));
        }
    }
    Ok(())
}

#[test]
fn trim_policies_resolve_to_edge_counts() -> Result<(), String> {
    let checks = [
        (TrimPolicy::Symmetric, EdgeTrim { front: 5, back: 5 }),
        (TrimPolicy::Leading, EdgeTrim { front: 5, back: 1 }),
        (
            TrimPolicy::Custom { front: 2, back: 7 },
            EdgeTrim { front: 2, back: 7 },
        ),
    ];
    for (policy, expected) in checks {
        let got = policy.resolve(4);
        if got != expected {
            return Err(format!("{:?} resolved to {:?}", policy, got));
        }
    }
    Ok(())
}

#[test]
fn remove_edges_clears_when_nothing_remains() -> Result<(), String> {
    let mut kept = series(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0, 5.0]);
    remove_edges(&mut kept, EdgeTrim { front: 1, back: 2 });
    if kept.values() != [2.0, 3.0] {
        return Err(format!("Unexpected values: {:?}", kept.values()));
    }

    let mut exhausted = series(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]);
    remove_edges(&mut exhausted, EdgeTrim { front: 2, back: 1 });
    if !exhausted.is_empty() {
        return Err("Expected empty series".to_owned());
    }
    Ok(())
}

#[test]
fn rate_over_two_seconds() -> Result<(), String> {
    let cumulative = series(
        &[0.0, 1_000_000_000.0, 2_000_000_000.0],
        &[100.0, 300.0, 600.0],
    );
    let Some(summary) = summarize_rate(&cumulative) else {
        return Err("Expected a summary".to_owned());
    };
    let Some(rate) = summary.rate else {
        return Err("Expected a rate".to_owned());
    };
    if !close(summary.sampled_secs, 2.0) || !close(summary.total, 500.0) || !close(rate, 250.0) {
        return Err(format!("Unexpected summary: {:?}", summary));
    }
    if summary.samples != 3 {
        return Err("Unexpected sample count".to_owned());
    }
    Ok(())
}

#[test]
fn rate_is_absent_for_a_single_instant() -> Result<(), String> {
    let single = series(&[5.0], &[10.0]);
    match summarize_rate(&single) {
        Some(RateSummary { rate: None, .. }) => {}
        other => return Err(format!("Unexpected summary: {:?}", other)),
    }
    if summarize_rate(&MetricSeries::new()).is_some() {
        return Err("Empty series should have no summary".to_owned());
    }
    Ok(())
}

#[test]
fn count_summary_includes_leading_zero() -> Result<(), String> {
    let deltas = series(&[0.0, 1e9, 2e9, 3e9], &[0.0, 10.0, 20.0, 30.0]);
    let Some(summary) = summarize_counts(&deltas) else {
        return Err("Expected a summary".to_owned());
    };
    if !close(summary.total, 60.0) || !close(summary.mean, 15.0) || !close(summary.sampled_secs, 3.0)
    {
        return Err(format!("Unexpected summary: {:?}", summary));
    }
    Ok(())
}

#[test]
fn configured_key_without_results_reports_no_samples() -> Result<(), String> {
    let silent = MetricKey::new("eth1", MetricName::TxPackets);
    let settings = PipelineSettings {
        variant: Variant::Rates,
        sample_rate_us: rate_us(100_000)?,
        trim: TrimPolicy::Leading,
    };
    let reports = run_pipeline(
        std::slice::from_ref(&silent),
        Vec::new(),
        &ToleranceTable::default(),
        &settings,
    )
    .map_err(|err| err.to_string())?;
    match reports.as_slice() {
        [
            SeriesReport {
                key,
                outcome: SeriesOutcome::NoSamples { after: Stage::Ingest },
                ..
            },
        ] if *key == silent => Ok(()),
        other => Err(format!("Unexpected reports: {:?}", other)),
    }
}

#[test]
fn totals_pipeline_on_ramp() -> Result<(), String> {
    let key = MetricKey::new("eth0", MetricName::RxPackets);
    let settings = PipelineSettings {
        variant: Variant::Totals,
        sample_rate_us: rate_us(500_000)?,
        trim: Variant::Totals.default_trim(),
    };
    let reports = run_pipeline(
        std::slice::from_ref(&key),
        ramp_samples(&key),
        &ToleranceTable::default(),
        &settings,
    )
    .map_err(|err| err.to_string())?;
    let Some(SeriesReport {
        title,
        outcome: SeriesOutcome::Totals(summary),
        ..
    }) = reports.first()
    else {
        return Err(format!("Unexpected reports: {:?}", reports));
    };
    if *title != "RX Packets" || summary.samples != 7 {
        return Err(format!("Unexpected summary: {:?}", summary));
    }
    if !close(summary.total, 600.0) || !close(summary.mean, 600.0 / 7.0) {
        return Err(format!("Unexpected totals: {:?}", summary));
    }
    if !close(summary.sampled_secs, 3.0) {
        return Err(format!("Unexpected duration: {:?}", summary));
    }
    Ok(())
}

#[test]
fn rates_pipeline_on_ramp() -> Result<(), String> {
    let key = MetricKey::new("eth0", MetricName::RxPackets);
    let settings = PipelineSettings {
        variant: Variant::Rates,
        sample_rate_us: rate_us(500_000)?,
        trim: Variant::Rates.default_trim(),
    };
    let reports = run_pipeline(
        std::slice::from_ref(&key),
        ramp_samples(&key),
        &ToleranceTable::default(),
        &settings,
    )
    .map_err(|err| err.to_string())?;
    let Some(SeriesReport {
        outcome: SeriesOutcome::Rates(summary),
        ..
    }) = reports.first()
    else {
        return Err(format!("Unexpected reports: {:?}", reports));
    };
    if summary.samples != 9 || !close(summary.total, 800.0) || !close(summary.sampled_secs, 4.0) {
        return Err(format!("Unexpected summary: {:?}", summary));
    }
    match summary.rate {
        Some(rate) if close(rate, 200.0) => Ok(()),
        other => Err(format!("Unexpected rate: {:?}", other)),
    }
}

#[test]
fn aggressive_edge_trim_reports_no_samples() -> Result<(), String> {
    let key = MetricKey::new("eth0", MetricName::RxPackets);
    let outcome = process_series(
        series(&[0.0, 1.0, 2.0], &[0.0, 100.0, 200.0]),
        50.0,
        Variant::Totals,
        EdgeTrim { front: 2, back: 2 },
    );
    match outcome {
        SeriesOutcome::NoSamples {
            after: Stage::EdgeTrim,
        } => Ok(()),
        other => Err(format!("Unexpected outcome for {}: {:?}", key, other)),
    }
}
