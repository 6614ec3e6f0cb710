use crate::error::InputError;

/// Upper bound on generated slot labels. A time column written in whole
/// nanoseconds would otherwise ask for one label per nanosecond.
pub const MAX_SLOT_LABELS: u64 = 10_000_000;

fn invalid(label: &str) -> InputError {
    InputError::InvalidSlotLabel {
        value: label.to_owned(),
    }
}

fn precision_of(label: &str) -> usize {
    label
        .trim()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

fn scale_for(precision: usize, label: &str) -> Result<u64, InputError> {
    let exponent = u32::try_from(precision).map_err(|_overflow| invalid(label))?;
    10_u64.checked_pow(exponent).ok_or_else(|| invalid(label))
}

/// Parses a non-negative decimal into an integer count of `10^-precision`
/// units, truncating extra fraction digits.
fn parse_scaled(label: &str, precision: usize, scale: u64) -> Result<u64, InputError> {
    let trimmed = label.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid(label));
    }

    let whole_value = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().map_err(|_overflow| invalid(label))?
    };
    let mut digits: String = fraction.chars().take(precision).collect();
    while digits.len() < precision {
        digits.push('0');
    }
    let fraction_value = if digits.is_empty() {
        0
    } else {
        digits.parse::<u64>().map_err(|_overflow| invalid(label))?
    };

    whole_value
        .checked_mul(scale)
        .and_then(|value| value.checked_add(fraction_value))
        .ok_or_else(|| invalid(label))
}

fn format_scaled(value: u64, precision: usize, scale: u64) -> String {
    if precision == 0 {
        return value.to_string();
    }
    let whole = value.checked_div(scale).unwrap_or(0);
    let fraction = value.checked_rem(scale).unwrap_or(0);
    format!("{}.{:0width$}", whole, fraction, width = precision)
}

fn checked_span(first: &str, last: &str, start: u64, stop: u64) -> Result<(), InputError> {
    let count = stop.saturating_sub(start).saturating_add(1);
    if count > MAX_SLOT_LABELS {
        return Err(InputError::SlotRangeTooLarge {
            first: first.to_owned(),
            last: last.to_owned(),
            count,
            limit: MAX_SLOT_LABELS,
        });
    }
    Ok(())
}

/// Every time label from `first` to `last`, stepping by one unit of the
/// precision `first` is written with (`"1.25"` steps by 0.01).
///
/// # Errors
///
/// Returns an error when either label is not a non-negative decimal or the
/// range exceeds [`MAX_SLOT_LABELS`].
pub fn time_labels(first: &str, last: &str) -> Result<Vec<String>, InputError> {
    let precision = precision_of(first);
    let scale = scale_for(precision, first)?;
    let start = parse_scaled(first, precision, scale)?;
    let stop = parse_scaled(last, precision, scale)?;
    if stop < start {
        return Ok(Vec::new());
    }
    checked_span(first, last, start, stop)?;
    Ok((start..=stop)
        .map(|value| format_scaled(value, precision, scale))
        .collect())
}

/// Every iteration number from `first` to `last`.
///
/// # Errors
///
/// Returns an error when either label is not an unsigned integer or the range
/// exceeds [`MAX_SLOT_LABELS`].
pub fn iteration_labels(first: &str, last: &str) -> Result<Vec<String>, InputError> {
    let start = first.trim().parse::<u64>().map_err(|_parse| invalid(first))?;
    let stop = last.trim().parse::<u64>().map_err(|_parse| invalid(last))?;
    if stop < start {
        return Ok(Vec::new());
    }
    checked_span(first, last, start, stop)?;
    Ok((start..=stop).map(|value| value.to_string()).collect())
}
