//! Calendar-date helpers shared by the sampler, stats and renderer.
//!
//! All values are `chrono::NaiveDate`, so comparisons happen at day
//! granularity and no civil-time shift can skew a day count.

use chrono::{Datelike, NaiveDate};

use crate::error::ScheduleError;

/// A year/month/day value with no time-of-day and no timezone.
pub type CalendarDate = NaiveDate;

/// Closed range of calendar days with `start_date <= end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start_date: CalendarDate,
    end_date: CalendarDate,
}

impl Interval {
    /// Build an interval, rejecting inverted bounds.
    pub fn new(start_date: CalendarDate, end_date: CalendarDate) -> Result<Self, ScheduleError> {
        if start_date > end_date {
            return Err(ScheduleError::InvalidInterval {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    /// Days from start to end; zero for a single-day interval.
    pub fn span_days(&self) -> i64 {
        day_difference(self.end_date, self.start_date)
    }

    /// Whether `date` lies within the interval, bounds included.
    pub fn contains(&self, date: CalendarDate) -> bool {
        (self.start_date..=self.end_date).contains(&date)
    }

    /// Every day of the interval in ascending order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }
}

/// Checked constructor for a calendar date.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<CalendarDate, ScheduleError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ScheduleError::InvalidDate { year, month, day })
}

/// True iff both values denote the same calendar day.
pub fn dates_equal(a: CalendarDate, b: CalendarDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Linear membership scan; `dates` carries no ordering assumption.
pub fn date_in_set(date: CalendarDate, dates: &[CalendarDate]) -> bool {
    dates.iter().any(|d| dates_equal(date, *d))
}

/// `[Jan 1, Dec 31]` of `year`.
pub fn year_interval(year: i32) -> Result<Interval, ScheduleError> {
    let start = calendar_date(year, 1, 1)?;
    let end = calendar_date(year, 12, 31)?;
    Interval::new(start, end)
}

/// Signed number of calendar days from `b` to `a` (positive when `a` is later).
pub fn day_difference(a: CalendarDate, b: CalendarDate) -> i64 {
    a.signed_duration_since(b).num_days()
}

/// 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_yo_opt(year, 366).is_some() {
        366
    } else {
        365
    }
}
