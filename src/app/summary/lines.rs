use crate::analysis::{SeriesOutcome, SeriesReport};
use crate::monitor::{BucketStats, MonitorReport};

/// Frames each monitor statistics block.
const BANNER: &str = "********************";

pub(crate) fn series_lines(reports: &[SeriesReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for report in reports {
        match &report.outcome {
            SeriesOutcome::NoSamples { .. } => {
                lines.push(format!("{}: no samples", report.key));
            }
            SeriesOutcome::Totals(summary) => {
                lines.push(format!("{} {}", report.key.interface, report.title));
                lines.push(format!("Sampled Seconds: {:.3}", summary.sampled_secs));
                lines.push(format!("Samples: {}", summary.samples));
                lines.push(format!("{} Total: {:.2}", report.title, summary.total));
                lines.push(format!("{} Average: {:.2}", report.title, summary.mean));
            }
            SeriesOutcome::Rates(summary) => {
                lines.push(format!("{} {}", report.key.interface, report.title));
                lines.push(format!("Sampled Seconds: {:.3}", summary.sampled_secs));
                lines.push(format!("Samples: {}", summary.samples));
                lines.push(format!("{} Total: {:.2}", report.title, summary.total));
                lines.push(format!(
                    "{} Rate: {}",
                    report.title,
                    format_rate(summary.rate)
                ));
            }
        }
        lines.push(String::new());
    }
    lines
}

pub(crate) fn monitor_lines(report: &MonitorReport) -> Vec<String> {
    let mut lines = vec![format!("Records: {}", report.records), String::new()];
    push_bucket_block(&mut lines, "iteration counts", report.iterations.as_ref());
    push_unexpected(&mut lines, report.unexpected_iterations);
    lines.push(String::new());
    push_bucket_block(&mut lines, "time counts", report.times.as_ref());
    push_unexpected(&mut lines, report.unexpected_times);
    if report.observed_times {
        lines.push("time slots taken from observed timestamps".to_owned());
    }
    lines
}

fn push_unexpected(lines: &mut Vec<String>, count: usize) {
    if count > 0 {
        lines.push(format!("labels added outside the generated range: {}", count));
    }
}

fn push_bucket_block(lines: &mut Vec<String>, title: &str, stats: Option<&BucketStats>) {
    lines.push(format!("{} {} {}", BANNER, title, BANNER));
    let Some(stats) = stats else {
        lines.push("no complete sample intervals".to_owned());
        return;
    };
    lines.push(format!("mean numbers: {:.3}", stats.mean));
    lines.push(format!("standard deviation: {:.3}", stats.std_dev));
    lines.push(format!("number of sample intervals: {}", stats.intervals));
    lines.push(format!("total number of samples: {}", stats.total));
    lines.push(format!(
        "highest number of samples in sample interval: {}",
        stats.max
    ));
    lines.push(format!(
        "lowest number of samples in sample interval: {}",
        stats.min
    ));
    lines.push(format!(
        "there were {} values with zero samples",
        stats.unsampled.len()
    ));
    if !stats.unsampled.is_empty() {
        lines.push(format!("unsampled: {}", stats.unsampled.join(", ")));
    }
    lines.push(format!("minimum: {}", stats.min_label));
    lines.push(format!("maximum: {}", stats.max_label));
}

fn format_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "n/a".to_owned(), |rate| format!("{:.2}/s", rate))
}
