use chrono::{DateTime, Duration, FixedOffset, Months, NaiveDate, TimeZone, Timelike, Utc};
use once_cell::sync::Lazy;
use thiserror::Error;

/// Calendar-date parameters are always interpreted at the restaurant's
/// regional offset, +05:30. The no-parameter default uses the same offset,
/// not the server clock.
static LOCAL_OFFSET: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("offset in range"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
    #[error("invalid period '{0}', expected day, week or month")]
    InvalidPeriod(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

impl std::str::FromStr for Period {
    type Err = WindowError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            other => Err(WindowError::InvalidPeriod(other.to_string())),
        }
    }
}

/// A resolved filter range over `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// The explicit from/to form keeps the historical end-inclusive filter
    /// (`end` is the last second of the `to` day); every other form is
    /// end-exclusive.
    pub end_inclusive: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, WindowError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| WindowError::InvalidDate(s.to_string()))
}

fn local_instant(date: NaiveDate, h: u32, m: u32, s: u32) -> DateTime<Utc> {
    let naive = date
        .and_hms_opt(h, m, s)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN));
    LOCAL_OFFSET
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        // A fixed offset never yields an ambiguous local time.
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

/// Explicit range: `from` 00:00:00 through `to` 23:59:59, both ends
/// included.
pub fn from_range(from: &str, to: &str) -> Result<TimeWindow, WindowError> {
    let start = local_instant(parse_date(from)?, 0, 0, 0);
    let end = local_instant(parse_date(to)?, 23, 59, 59);
    Ok(TimeWindow {
        start,
        end,
        end_inclusive: true,
    })
}

/// A single date extended by the requested period, end-exclusive.
pub fn for_date(date: &str, period: Period) -> Result<TimeWindow, WindowError> {
    let day = parse_date(date)?;
    let end_day = match period {
        Period::Day => day + Duration::days(1),
        Period::Week => day + Duration::days(7),
        Period::Month => day
            .checked_add_months(Months::new(1))
            .unwrap_or(day + Duration::days(31)),
    };
    Ok(TimeWindow {
        start: local_instant(day, 0, 0, 0),
        end: local_instant(end_day, 0, 0, 0),
        end_inclusive: false,
    })
}

/// A whole calendar month (`YYYY-MM`), end-exclusive.
pub fn for_month(month: &str) -> Result<TimeWindow, WindowError> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
        .map_err(|_| WindowError::InvalidMonth(month.to_string()))?;
    let next = first
        .checked_add_months(Months::new(1))
        .unwrap_or(first + Duration::days(31));
    Ok(TimeWindow {
        start: local_instant(first, 0, 0, 0),
        end: local_instant(next, 0, 0, 0),
        end_inclusive: false,
    })
}

/// The current local calendar day, end-exclusive.
pub fn today() -> TimeWindow {
    let day = Utc::now().with_timezone(&*LOCAL_OFFSET).date_naive();
    TimeWindow {
        start: local_instant(day, 0, 0, 0),
        end: local_instant(day + Duration::days(1), 0, 0, 0),
        end_inclusive: false,
    }
}

/// Standard parameter resolution, in priority order: from/to range, then
/// date (+ optional period, default day), then today.
pub fn resolve(
    from: Option<&str>,
    to: Option<&str>,
    date: Option<&str>,
    period: Option<&str>,
) -> Result<TimeWindow, WindowError> {
    if let (Some(from), Some(to)) = (from, to) {
        return from_range(from, to);
    }
    if let Some(date) = date {
        let period = match period {
            Some(p) => p.parse()?,
            None => Period::Day,
        };
        return for_date(date, period);
    }
    Ok(today())
}

/// Hour of day (0-23) of an instant at the restaurant's local offset.
pub fn local_hour(ts: DateTime<Utc>) -> u32 {
    ts.with_timezone(&*LOCAL_OFFSET).hour()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_range_covers_whole_to_day() {
        let window = from_range("2024-01-10", "2024-01-12").unwrap();
        assert_eq!(window.start, utc("2024-01-09T18:30:00Z"));
        assert_eq!(window.end, utc("2024-01-12T18:29:59Z"));
        assert!(window.end_inclusive);
    }

    #[test]
    fn test_for_date_day_and_week() {
        let day = for_date("2024-03-01", Period::Day).unwrap();
        assert_eq!(day.start, utc("2024-02-29T18:30:00Z"));
        assert_eq!(day.end, utc("2024-03-01T18:30:00Z"));
        assert!(!day.end_inclusive);

        let week = for_date("2024-03-01", Period::Week).unwrap();
        assert_eq!(week.end, utc("2024-03-07T18:30:00Z"));
    }

    #[test]
    fn test_for_date_month_is_calendar_month() {
        let window = for_date("2024-03-01", Period::Month).unwrap();
        assert_eq!(window.start, utc("2024-02-29T18:30:00Z"));
        assert_eq!(window.end, utc("2024-03-31T18:30:00Z"));
    }

    #[test]
    fn test_for_month_handles_leap_february() {
        let window = for_month("2024-02").unwrap();
        assert_eq!(window.start, utc("2024-01-31T18:30:00Z"));
        assert_eq!(window.end, utc("2024-02-29T18:30:00Z"));
    }

    #[test]
    fn test_resolve_priority() {
        let range = resolve(
            Some("2024-01-10"),
            Some("2024-01-12"),
            Some("2024-06-01"),
            Some("month"),
        )
        .unwrap();
        assert!(range.end_inclusive);
        assert_eq!(range.start, utc("2024-01-09T18:30:00Z"));

        let dated = resolve(None, None, Some("2024-06-01"), None).unwrap();
        assert_eq!(dated.end, utc("2024-06-01T18:30:00Z"));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(
            from_range("2024-13-01", "2024-01-12"),
            Err(WindowError::InvalidDate("2024-13-01".to_string()))
        );
        assert_eq!(
            for_month("March"),
            Err(WindowError::InvalidMonth("March".to_string()))
        );
        assert_eq!(
            resolve(None, None, Some("2024-06-01"), Some("fortnight")),
            Err(WindowError::InvalidPeriod("fortnight".to_string()))
        );
    }

    #[test]
    fn test_local_hour_uses_fixed_offset() {
        // 04:45 UTC is 10:15 at +05:30.
        assert_eq!(local_hour(utc("2024-05-01T04:45:00Z")), 10);
        // 19:00 UTC is 00:30 the next local day.
        assert_eq!(local_hour(utc("2024-05-01T19:00:00Z")), 0);
    }
}
