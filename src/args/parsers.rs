use std::time::Duration;

use crate::error::{AppError, AppResult, ValidationError};

use super::defaults::MAX_REQUEST_COUNT;

pub(crate) fn parse_request_count(s: &str) -> AppResult<usize> {
    let count = s.trim().parse::<usize>().map_err(|err| {
        AppError::validation(ValidationError::InvalidRequestCount {
            value: s.to_owned(),
            source: err,
        })
    })?;
    Ok(check_request_count(count)?)
}

pub(crate) const fn check_request_count(count: usize) -> Result<usize, ValidationError> {
    if count > MAX_REQUEST_COUNT {
        return Err(ValidationError::RequestCountTooLarge {
            count,
            max: MAX_REQUEST_COUNT,
        });
    }
    Ok(count)
}

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    parse_duration(s).map_err(AppError::from)
}

/// Parses `<number><unit>` where unit is one of `ms`, `s`, `m`, `h` (seconds if omitted).
pub(crate) fn parse_duration(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }

    let digits_len = value.chars().take_while(char::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number.checked_mul(60).ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or(ValidationError::DurationOverflow)?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            });
        }
    };

    if duration.is_zero() {
        return Err(ValidationError::DurationZero);
    }

    Ok(duration)
}
