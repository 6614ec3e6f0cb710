use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::{InputError, ValidationError};
use crate::metrics::{MetricKey, MetricName};

/// Parses `<interface> <metric>` pairs, one per line, in file order.
///
/// Blank lines are ignored and repeated pairs are kept once.
///
/// # Errors
///
/// Returns an error when a line does not hold exactly two fields or names an
/// unknown metric.
pub fn parse_targets(content: &str) -> Result<Vec<MetricKey>, InputError> {
    let mut targets = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx.saturating_add(1);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut fields = trimmed.split_whitespace();
        let (Some(interface), Some(metric), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(InputError::MalformedTarget {
                line,
                content: trimmed.to_owned(),
            });
        };
        let metric = metric
            .parse::<MetricName>()
            .map_err(|err: ValidationError| InputError::InvalidTargetMetric { line, source: err })?;
        let key = MetricKey::new(interface, metric);
        if seen.insert(key.clone()) {
            targets.push(key);
        } else {
            debug!(%key, line, "Duplicate measurement target ignored");
        }
    }

    Ok(targets)
}

/// Reads and parses a measurement config file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or fails to parse.
pub fn load_targets(path: &Path) -> Result<Vec<MetricKey>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|err| InputError::Io {
        context: "read measurement config",
        path: path.to_path_buf(),
        source: err,
    })?;
    let targets = parse_targets(&content)?;
    debug!(path = %path.display(), targets = targets.len(), "Loaded measurement config");
    Ok(targets)
}
