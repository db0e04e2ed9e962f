//! Quick-filter and explicit-date resolution into concrete `[start, end]`
//! instant pairs. Pure functions of "now" and the selection.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::errors::{Result, VisitError};

/// Display/reference timezone offset: IST (UTC+05:30). IST observes no
/// DST, so a fixed offset is exact year-round.
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

pub fn display_zone() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap()
}

/// Named shorthand for a date range, as offered by the download UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFilter {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    All,
}

impl QuickFilter {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "today" => Ok(QuickFilter::Today),
            "yesterday" => Ok(QuickFilter::Yesterday),
            "this-week" | "week" => Ok(QuickFilter::ThisWeek),
            "this-month" | "month" => Ok(QuickFilter::ThisMonth),
            "all" => Ok(QuickFilter::All),
            other => Err(VisitError::validation(format!(
                "Unknown quick filter: '{}'",
                other
            ))),
        }
    }
}

/// An optionally bounded date range. Both bounds absent means an
/// unfiltered, full-history query. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        DateRange::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive containment check against both bounds.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if instant < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if instant > end {
                return false;
            }
        }
        true
    }
}

/// Resolve a quick filter against `now`, producing whole-day bounds in the
/// display timezone. Week start is Sunday, matching the download UI.
pub fn resolve_quick_filter(filter: QuickFilter, now: DateTime<Utc>) -> DateRange {
    let today = now.with_timezone(&display_zone()).date_naive();

    let (first, last) = match filter {
        QuickFilter::Today => (today, today),
        QuickFilter::Yesterday => {
            let y = today - Duration::days(1);
            (y, y)
        }
        QuickFilter::ThisWeek => {
            let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
            (start, start + Duration::days(6))
        }
        QuickFilter::ThisMonth => {
            let first = today.with_day(1).unwrap_or(today);
            let next_month = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            };
            let last = next_month
                .map(|d| d - Duration::days(1))
                .unwrap_or(today);
            (first, last)
        }
        QuickFilter::All => return DateRange::unbounded(),
    };

    DateRange {
        start: Some(day_start(first)),
        end: Some(day_end(last)),
    }
}

/// Widen explicit calendar dates to whole-day bounds. Either side may be
/// open; both absent yields an unbounded range.
pub fn resolve_explicit(start: Option<NaiveDate>, end: Option<NaiveDate>) -> DateRange {
    DateRange {
        start: start.map(day_start),
        end: end.map(day_end),
    }
}

/// Parse a `YYYY-MM-DD` calendar date as sent by the export query params.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        VisitError::date_parse(format!("Invalid date: '{}'. Use YYYY-MM-DD", s))
    })
}

/// First instant of the calendar day (00:00:00.000) in the display zone.
fn day_start(day: NaiveDate) -> DateTime<Utc> {
    let local = day.and_hms_opt(0, 0, 0).unwrap();
    to_utc(local)
}

/// Last instant of the calendar day (23:59:59.999) in the display zone.
fn day_end(day: NaiveDate) -> DateTime<Utc> {
    let local = day.and_hms_milli_opt(23, 59, 59, 999).unwrap();
    to_utc(local)
}

fn to_utc(local: chrono::NaiveDateTime) -> DateTime<Utc> {
    // Fixed-offset zones map local datetimes unambiguously.
    display_zone()
        .from_local_datetime(&local)
        .unwrap()
        .with_timezone(&Utc)
}
