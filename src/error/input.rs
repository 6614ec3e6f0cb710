use std::path::PathBuf;

use thiserror::Error;

use super::ValidationError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error during {context} '{path}': {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read results CSV: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
    #[error("Measurement config line {line}: expected '<interface> <metric>', got '{content}'.")]
    MalformedTarget { line: usize, content: String },
    #[error("Measurement config line {line}: {source}")]
    InvalidTargetMetric {
        line: usize,
        #[source]
        source: ValidationError,
    },
    #[error("Results row {row}: {source}")]
    InvalidRecordMetric {
        row: usize,
        #[source]
        source: ValidationError,
    },
    #[error("Results row {row}: invalid time '{value}': {source}")]
    InvalidTime {
        row: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Results row {row}: invalid value '{value}': {source}")]
    InvalidValue {
        row: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Results row {row}: '{interface} {metric}' is not in the measurement config.")]
    UntrackedKey {
        row: usize,
        interface: String,
        metric: String,
    },
    #[error("Results file contains no records.")]
    NoRecords,
    #[error("Invalid slot label '{value}'.")]
    InvalidSlotLabel { value: String },
    #[error("Slot range {first}..={last} spans {count} labels (limit {limit}).")]
    SlotRangeTooLarge {
        first: String,
        last: String,
        count: u64,
        limit: u64,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
