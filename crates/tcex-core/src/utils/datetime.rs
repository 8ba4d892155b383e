//! Tolerant date parsing for date-typed filters.
//!
//! Accepts the shapes people actually type on the command line or pull
//! from other systems: RFC 3339/2822 timestamps, a handful of naive
//! date/time layouts (read as UTC), epoch seconds or milliseconds, the
//! words `now`/`today`/`yesterday`/`tomorrow`, and simple relative
//! expressions such as `3 days ago` or `in 2 hours`.

use chrono::{DateTime, Duration, Months, NaiveDate, NaiveDateTime, Utc};

use crate::error::AppError;
use crate::result::AppResult;

/// Canonical timestamp layout expected by the platform's TQL parser.
pub const TC_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y"];

/// Values above this are read as epoch milliseconds rather than seconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Parse a date-like input relative to the current time.
pub fn any_to_datetime(input: &str) -> AppResult<DateTime<Utc>> {
    any_to_datetime_at(input, Utc::now())
}

/// Parse a date-like input relative to `now`.
pub fn any_to_datetime_at(input: &str, now: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
    let value = input.trim();
    if value.is_empty() {
        return Err(AppError::validation("Empty value is not a date"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(naive.and_utc());
        }
    }
    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return midnight(date);
        }
    }
    if let Ok(epoch) = value.parse::<i64>() {
        return from_epoch(epoch);
    }

    let lowered = value.to_lowercase();
    match lowered.as_str() {
        "now" => return Ok(now),
        "today" => return midnight(now.date_naive()),
        "yesterday" => return midnight(now.date_naive()).map(|d| d - Duration::days(1)),
        "tomorrow" => return midnight(now.date_naive()).map(|d| d + Duration::days(1)),
        _ => {}
    }

    relative(&lowered, now)
        .ok_or_else(|| AppError::validation(format!("Could not parse '{input}' as a date")))
}

/// Format a timestamp in the platform's canonical layout.
pub fn format_tc(dt: &DateTime<Utc>) -> String {
    dt.format(TC_DATETIME_FORMAT).to_string()
}

/// Convert epoch seconds (or milliseconds) into a timestamp.
pub fn from_epoch(epoch: i64) -> AppResult<DateTime<Utc>> {
    let parsed = if epoch.abs() >= EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(epoch)
    } else {
        DateTime::from_timestamp(epoch, 0)
    };
    parsed.ok_or_else(|| AppError::validation(format!("Epoch value {epoch} is out of range")))
}

fn midnight(date: NaiveDate) -> AppResult<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::internal("Midnight is not representable"))
}

/// `N <unit> ago` or `in N <unit>`.
fn relative(value: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let (amount, unit, future) = match parts.as_slice() {
        [amount, unit, "ago"] => (*amount, *unit, false),
        ["in", amount, unit] => (*amount, *unit, true),
        _ => return None,
    };
    let amount: i64 = amount.parse().ok()?;
    if amount < 0 {
        return None;
    }
    let unit = unit.trim_end_matches('s');

    let months = match unit {
        "month" => Some(amount),
        "year" | "yr" => Some(amount.checked_mul(12)?),
        _ => None,
    };
    if let Some(months) = months {
        let months = Months::new(u32::try_from(months).ok()?);
        return if future {
            now.checked_add_months(months)
        } else {
            now.checked_sub_months(months)
        };
    }

    let delta = match unit {
        "second" | "sec" => Duration::try_seconds(amount)?,
        "minute" | "min" => Duration::try_minutes(amount)?,
        "hour" | "hr" => Duration::try_hours(amount)?,
        "day" => Duration::try_days(amount)?,
        "week" | "wk" => Duration::try_weeks(amount)?,
        _ => return None,
    };
    if future {
        now.checked_add_signed(delta)
    } else {
        now.checked_sub_signed(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap()
    }

    fn parse(input: &str) -> String {
        format_tc(&any_to_datetime_at(input, fixed_now()).unwrap())
    }

    #[test]
    fn test_absolute_formats() {
        assert_eq!(parse("2024-01-02T03:04:05Z"), "2024-01-02T03:04:05");
        assert_eq!(parse("2024-01-02T05:04:05+02:00"), "2024-01-02T03:04:05");
        assert_eq!(parse("2024-01-02 03:04:05"), "2024-01-02T03:04:05");
        assert_eq!(parse("2024-01-02"), "2024-01-02T00:00:00");
        assert_eq!(parse("01/02/2024"), "2024-01-02T00:00:00");
    }

    #[test]
    fn test_epoch_values() {
        assert_eq!(parse("1704164645"), "2024-01-02T03:04:05");
        assert_eq!(parse("1704164645000"), "2024-01-02T03:04:05");
    }

    #[test]
    fn test_keywords_and_relative() {
        assert_eq!(parse("now"), "2024-03-15T12:30:00");
        assert_eq!(parse("Today"), "2024-03-15T00:00:00");
        assert_eq!(parse("yesterday"), "2024-03-14T00:00:00");
        assert_eq!(parse("3 days ago"), "2024-03-12T12:30:00");
        assert_eq!(parse("in 2 hours"), "2024-03-15T14:30:00");
        assert_eq!(parse("1 month ago"), "2024-02-15T12:30:00");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = any_to_datetime_at("not a date", fixed_now()).unwrap_err();
        assert!(err.is_validation());
        assert!(any_to_datetime_at("", fixed_now()).is_err());
        assert!(any_to_datetime_at("3 fortnights ago", fixed_now()).is_err());
    }
}
