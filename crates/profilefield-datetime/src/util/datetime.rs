//! Date component handling for submitted datetime values.
//!
//! Converts between the forms a submitted value can take and absolute
//! instants (`DateTime<Utc>`):
//! - Unix seconds, as stored by the host
//! - `YYYY-MM-DD` / `YYYY-MM-DD-HH-MM-SS` strings, as produced by imports
//! - Broken-down [`DateParts`]
//!
//! Also provides the calendar-aware period addition used by the
//! minimum-date rule.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};
use thiserror::Error;

use crate::model::DateUnit;

/// Error type for date string and component failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DateParseError {
    pub message: String,
}

impl DateParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A submitted date broken into components (reference calendar).
///
/// `time` is `(hour, minute, second)` when the submission carried a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub time: Option<(u32, u32, u32)>,
}

impl DateParts {
    /// Creates date-only components.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            time: None,
        }
    }

    /// Adds a time of day.
    pub fn with_time(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.time = Some((hour, minute, second));
        self
    }

    /// Returns a copy with the year replaced.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Decomposes an instant into UTC components, including the time.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self::date(instant.year(), instant.month(), instant.day()).with_time(
            instant.hour(),
            instant.minute(),
            instant.second(),
        )
    }

    /// Decomposes Unix seconds. Returns `None` outside chrono's range.
    pub fn from_timestamp(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self::from_instant)
    }
}

/// Parses `YYYY-MM-DD` or `YYYY-MM-DD-HH-MM-SS`.
///
/// Only the shape and digits are checked here; ranges are checked by
/// [`make_timestamp`].
pub fn parse_date_parts(date_str: &str) -> Result<DateParts, DateParseError> {
    let fields: Vec<&str> = date_str.split('-').collect();
    if fields.len() != 3 && fields.len() != 6 {
        return Err(DateParseError::new(format!("Invalid date string: {}", date_str)));
    }

    let year: i32 = fields[0]
        .parse()
        .map_err(|_| DateParseError::new(format!("Invalid year in date: {}", date_str)))?;

    let mut numbers = [0u32; 5];
    for (slot, field) in numbers.iter_mut().zip(&fields[1..]) {
        *slot = field
            .parse()
            .map_err(|_| DateParseError::new(format!("Invalid component in date: {}", date_str)))?;
    }

    let parts = DateParts::date(year, numbers[0], numbers[1]);
    if fields.len() == 6 {
        Ok(parts.with_time(numbers[2], numbers[3], numbers[4]))
    } else {
        Ok(parts)
    }
}

/// Builds a UTC instant from components.
///
/// When `include_time` is false, or the parts carry no time, the instant is
/// at midnight. A day past the end of the month rolls over into the next
/// month (31 April is 1 May), the same as the host's timestamp construction.
pub fn make_timestamp(parts: &DateParts, include_time: bool) -> Result<DateTime<Utc>, DateParseError> {
    if parts.month < 1 || parts.month > 12 {
        return Err(DateParseError::new(format!("Invalid month: {}", parts.month)));
    }
    if parts.day < 1 || parts.day > 31 {
        return Err(DateParseError::new(format!("Invalid day: {}", parts.day)));
    }

    let (hour, minute, second) = match parts.time {
        Some(time) if include_time => time,
        _ => (0, 0, 0),
    };
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        DateParseError::new(format!("Invalid time: {:02}:{:02}:{:02}", hour, minute, second))
    })?;

    let date = NaiveDate::from_ymd_opt(parts.year, parts.month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(parts.day - 1))))
        .ok_or_else(|| DateParseError::new(format!("Year out of range: {}", parts.year)))?;

    Ok(date.and_time(time).and_utc())
}

/// Adds `quantity` units to an instant.
///
/// Minutes, hours and days are fixed-length. Months and years follow the
/// calendar, clamping the day to the end of the target month
/// (29 Feb 2004 + 1 year = 28 Feb 2005). Returns `None` on overflow.
pub fn add_period(instant: DateTime<Utc>, quantity: u32, unit: DateUnit) -> Option<DateTime<Utc>> {
    let quantity_i64 = i64::from(quantity);
    match unit {
        DateUnit::Minutes => instant.checked_add_signed(TimeDelta::try_minutes(quantity_i64)?),
        DateUnit::Hours => instant.checked_add_signed(TimeDelta::try_hours(quantity_i64)?),
        DateUnit::Days => instant.checked_add_signed(TimeDelta::try_days(quantity_i64)?),
        DateUnit::Months => instant.checked_add_months(Months::new(quantity)),
        DateUnit::Years => instant.checked_add_months(Months::new(quantity.checked_mul(12)?)),
    }
}

/// Subtracts `quantity` units from an instant, with the same rules as
/// [`add_period`].
pub fn sub_period(instant: DateTime<Utc>, quantity: u32, unit: DateUnit) -> Option<DateTime<Utc>> {
    let quantity_i64 = i64::from(quantity);
    match unit {
        DateUnit::Minutes => instant.checked_sub_signed(TimeDelta::try_minutes(quantity_i64)?),
        DateUnit::Hours => instant.checked_sub_signed(TimeDelta::try_hours(quantity_i64)?),
        DateUnit::Days => instant.checked_sub_signed(TimeDelta::try_days(quantity_i64)?),
        DateUnit::Months => instant.checked_sub_months(Months::new(quantity)),
        DateUnit::Years => instant.checked_sub_months(Months::new(quantity.checked_mul(12)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_parse_date_parts() {
        assert_eq!(parse_date_parts("2024-03-15").unwrap(), DateParts::date(2024, 3, 15));
        assert_eq!(
            parse_date_parts("2024-03-15-14-30-05").unwrap(),
            DateParts::date(2024, 3, 15).with_time(14, 30, 5)
        );
        // Leading zeros are accepted
        assert_eq!(parse_date_parts("1999-01-02").unwrap(), DateParts::date(1999, 1, 2));
    }

    #[test]
    fn test_parse_date_parts_invalid() {
        assert!(parse_date_parts("").is_err());
        assert!(parse_date_parts("2024-03").is_err());
        assert!(parse_date_parts("2024-03-15-14").is_err());
        assert!(parse_date_parts("abcd-03-15").is_err());
        assert!(parse_date_parts("2024-xx-15").is_err());
        assert!(parse_date_parts("2024/03/15").is_err());
    }

    #[test]
    fn test_make_timestamp_date_only() {
        let parts = DateParts::date(2024, 3, 15).with_time(14, 30, 0);
        assert_eq!(make_timestamp(&parts, false).unwrap(), utc(2024, 3, 15, 0, 0, 0));
        assert_eq!(make_timestamp(&parts, true).unwrap(), utc(2024, 3, 15, 14, 30, 0));
        // include_time without a time falls back to midnight
        let parts = DateParts::date(2024, 3, 15);
        assert_eq!(make_timestamp(&parts, true).unwrap(), utc(2024, 3, 15, 0, 0, 0));
    }

    #[test]
    fn test_make_timestamp_day_overflow_rolls_over() {
        assert_eq!(
            make_timestamp(&DateParts::date(2023, 2, 29), false).unwrap(),
            utc(2023, 3, 1, 0, 0, 0)
        );
        assert_eq!(
            make_timestamp(&DateParts::date(2024, 4, 31), false).unwrap(),
            utc(2024, 5, 1, 0, 0, 0)
        );
        assert_eq!(
            make_timestamp(&DateParts::date(2024, 2, 29), false).unwrap(),
            utc(2024, 2, 29, 0, 0, 0)
        );
    }

    #[test]
    fn test_make_timestamp_invalid() {
        assert!(make_timestamp(&DateParts::date(2024, 0, 1), false).is_err());
        assert!(make_timestamp(&DateParts::date(2024, 13, 1), false).is_err());
        assert!(make_timestamp(&DateParts::date(2024, 1, 0), false).is_err());
        assert!(make_timestamp(&DateParts::date(2024, 1, 32), false).is_err());
        assert!(make_timestamp(&DateParts::date(2024, 1, 1).with_time(24, 0, 0), true).is_err());
        assert!(make_timestamp(&DateParts::date(2024, 1, 1).with_time(12, 60, 0), true).is_err());
        // Invalid time is irrelevant when time isn't included
        assert!(make_timestamp(&DateParts::date(2024, 1, 1).with_time(24, 0, 0), false).is_ok());
    }

    #[test]
    fn test_from_timestamp() {
        assert_eq!(
            DateParts::from_timestamp(0).unwrap(),
            DateParts::date(1970, 1, 1).with_time(0, 0, 0)
        );
        assert_eq!(
            DateParts::from_timestamp(1_710_513_000).unwrap(),
            DateParts::date(2024, 3, 15).with_time(14, 30, 0)
        );
        assert_eq!(
            DateParts::from_timestamp(-1).unwrap(),
            DateParts::date(1969, 12, 31).with_time(23, 59, 59)
        );
    }

    #[test]
    fn test_add_period_fixed_units() {
        let start = utc(2024, 3, 15, 12, 0, 0);
        assert_eq!(add_period(start, 90, DateUnit::Minutes).unwrap(), utc(2024, 3, 15, 13, 30, 0));
        assert_eq!(add_period(start, 36, DateUnit::Hours).unwrap(), utc(2024, 3, 17, 0, 0, 0));
        assert_eq!(add_period(start, 20, DateUnit::Days).unwrap(), utc(2024, 4, 4, 12, 0, 0));
    }

    #[test]
    fn test_add_period_calendar_units() {
        let start = utc(2024, 1, 31, 0, 0, 0);
        assert_eq!(add_period(start, 1, DateUnit::Months).unwrap(), utc(2024, 2, 29, 0, 0, 0));
        assert_eq!(add_period(start, 13, DateUnit::Months).unwrap(), utc(2025, 2, 28, 0, 0, 0));

        let leap_day = utc(2004, 2, 29, 8, 0, 0);
        assert_eq!(add_period(leap_day, 1, DateUnit::Years).unwrap(), utc(2005, 2, 28, 8, 0, 0));
        assert_eq!(add_period(leap_day, 4, DateUnit::Years).unwrap(), utc(2008, 2, 29, 8, 0, 0));
        assert_eq!(add_period(leap_day, 18, DateUnit::Years).unwrap(), utc(2022, 2, 28, 8, 0, 0));
    }

    #[test]
    fn test_sub_period() {
        let now = utc(2026, 10, 18, 9, 0, 0);
        assert_eq!(sub_period(now, 18, DateUnit::Years).unwrap(), utc(2008, 10, 18, 9, 0, 0));
        assert_eq!(sub_period(now, 2, DateUnit::Days).unwrap(), utc(2026, 10, 16, 9, 0, 0));
    }

    #[test]
    fn test_add_period_overflow() {
        let start = utc(2024, 1, 1, 0, 0, 0);
        assert_eq!(add_period(start, u32::MAX, DateUnit::Years), None);
        assert_eq!(add_period(start, u32::MAX, DateUnit::Months), None);
    }
}
