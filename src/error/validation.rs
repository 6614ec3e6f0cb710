use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error(
        "Unknown metric '{value}'. Use rx_packets, tx_packets, rx_bytes, tx_bytes, rx_dropped, \
tx_dropped, rx_fifo_errors, or tx_fifo_errors."
    )]
    UnknownMetric { value: String },
    #[error("Tolerance must be a finite, non-negative number (got {value}).")]
    InvalidTolerance { value: f64 },
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
