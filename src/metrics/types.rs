use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Interface counters recorded by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    RxPackets,
    TxPackets,
    RxBytes,
    TxBytes,
    RxDropped,
    TxDropped,
    RxFifoErrors,
    TxFifoErrors,
}

impl MetricName {
    pub const ALL: [MetricName; 8] = [
        MetricName::RxPackets,
        MetricName::TxPackets,
        MetricName::RxBytes,
        MetricName::TxBytes,
        MetricName::RxDropped,
        MetricName::TxDropped,
        MetricName::RxFifoErrors,
        MetricName::TxFifoErrors,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MetricName::RxPackets => "rx_packets",
            MetricName::TxPackets => "tx_packets",
            MetricName::RxBytes => "rx_bytes",
            MetricName::TxBytes => "tx_bytes",
            MetricName::RxDropped => "rx_dropped",
            MetricName::TxDropped => "tx_dropped",
            MetricName::RxFifoErrors => "rx_fifo_errors",
            MetricName::TxFifoErrors => "tx_fifo_errors",
        }
    }

    /// Human-readable label used in reports.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            MetricName::RxPackets => "RX Packets",
            MetricName::TxPackets => "TX Packets",
            MetricName::RxBytes => "RX Bytes",
            MetricName::TxBytes => "TX Bytes",
            MetricName::RxDropped => "RX Dropped",
            MetricName::TxDropped => "TX Dropped",
            MetricName::RxFifoErrors => "RX FIFO Errors",
            MetricName::TxFifoErrors => "TX FIFO Errors",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            MetricName::RxPackets => 0,
            MetricName::TxPackets => 1,
            MetricName::RxBytes => 2,
            MetricName::TxBytes => 3,
            MetricName::RxDropped => 4,
            MetricName::TxDropped => 5,
            MetricName::RxFifoErrors => 6,
            MetricName::TxFifoErrors => 7,
        }
    }
}

impl std::str::FromStr for MetricName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        MetricName::ALL
            .into_iter()
            .find(|metric| metric.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownMetric {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of one tracked series: an interface paired with one of its counters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MetricKey {
    pub interface: String,
    pub metric: MetricName,
}

impl MetricKey {
    #[must_use]
    pub fn new(interface: impl Into<String>, metric: MetricName) -> Self {
        Self {
            interface: interface.into(),
            metric,
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.interface, self.metric)
    }
}

/// A single counter reading. Times are nanoseconds since the monitor started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time_ns: f64,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub const fn new(time_ns: f64, value: f64) -> Self {
        Self { time_ns, value }
    }
}

/// Parallel time/value sequences for one [`MetricKey`].
///
/// Both sequences only ever grow together through [`MetricSeries::push`] and
/// shrink together through [`MetricSeries::retain_range`], so they always have
/// the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl MetricSeries {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            times: Vec::new(),
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut series = Self::new();
        for sample in samples {
            series.push(*sample);
        }
        series
    }

    pub fn push(&mut self, sample: Sample) {
        self.times.push(sample.time_ns);
        self.values.push(sample.value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn times_mut(&mut self) -> &mut [f64] {
        &mut self.times
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    #[must_use]
    pub fn first(&self) -> Option<Sample> {
        Some(Sample::new(*self.times.first()?, *self.values.first()?))
    }

    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        Some(Sample::new(*self.times.last()?, *self.values.last()?))
    }

    /// Keeps only the samples inside `range`; an out-of-bounds or inverted
    /// range clears the series.
    pub fn retain_range(&mut self, range: Range<usize>) {
        let kept_times = self.times.get(range.clone()).map(<[f64]>::to_vec);
        let kept_values = self.values.get(range).map(<[f64]>::to_vec);
        match (kept_times, kept_values) {
            (Some(times), Some(values)) => {
                self.times = times;
                self.values = values;
            }
            (None, _) | (_, None) => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.times.clear();
        self.values.clear();
    }
}
