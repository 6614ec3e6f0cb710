use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::InputError;
use crate::metrics::{MetricKey, MetricName, Sample};

/// One row of the monitor's results CSV: `i,time,iface,metric,value`.
///
/// Fields stay as written. The monitor variant buckets on the exact iteration
/// and time text and never looks at the value, so a blank or non-numeric value
/// only fails once [`ResultRecord::to_keyed_sample`] parses it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultRecord {
    pub iteration: String,
    pub time: String,
    pub interface: String,
    pub metric: String,
    pub value: String,
}

/// A result row resolved to its series key.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedSample {
    pub key: MetricKey,
    pub sample: Sample,
}

impl ResultRecord {
    /// Resolves the row's metric, time and value.
    ///
    /// `row` is the 1-based data row number used in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error when the metric is unknown or the time or value is not
    /// a number.
    pub fn to_keyed_sample(&self, row: usize) -> Result<KeyedSample, InputError> {
        let metric = self
            .metric
            .parse::<MetricName>()
            .map_err(|err| InputError::InvalidRecordMetric { row, source: err })?;
        let time_ns = self
            .time
            .parse::<f64>()
            .map_err(|err| InputError::InvalidTime {
                row,
                value: self.time.clone(),
                source: err,
            })?;
        let value = self
            .value
            .parse::<f64>()
            .map_err(|err| InputError::InvalidValue {
                row,
                value: self.value.clone(),
                source: err,
            })?;
        Ok(KeyedSample {
            key: MetricKey::new(self.interface.as_str(), metric),
            sample: Sample::new(time_ns, value),
        })
    }
}

/// Reads result rows, discarding the header line.
///
/// # Errors
///
/// Returns an error on rows with the wrong field count.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ResultRecord>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize::<(String, String, String, String, String)>() {
        let (iteration, time, interface, metric, value) =
            row.map_err(|err| InputError::Csv { source: err })?;
        records.push(ResultRecord {
            iteration,
            time,
            interface,
            metric,
            value,
        });
    }
    Ok(records)
}

/// Reads the results CSV at `path` into memory.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or a row is malformed.
pub fn load_records(path: &Path) -> Result<Vec<ResultRecord>, InputError> {
    let file = std::fs::File::open(path).map_err(|err| InputError::Io {
        context: "open results",
        path: path.to_path_buf(),
        source: err,
    })?;
    let records = read_records(std::io::BufReader::new(file))?;
    debug!(path = %path.display(), records = records.len(), "Loaded results");
    Ok(records)
}
