//! Per-day classification of a year against a schedule.

use crate::dates::{CalendarDate, date_in_set, dates_equal, year_interval};
use crate::error::ScheduleError;
use crate::schedule::Schedule;

/// Classification of a day by (scheduled × acceptable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCategory {
    /// Scheduled on an acceptable day (green)
    ScheduledAcceptable,
    /// Free acceptable day (blue)
    UnscheduledAcceptable,
    /// Scheduled on an unacceptable day (yellow)
    ScheduledUnacceptable,
    /// Free unacceptable day (red)
    UnscheduledUnacceptable,
}

impl DayCategory {
    pub fn classify(is_scheduled: bool, is_acceptable: bool) -> Self {
        match (is_scheduled, is_acceptable) {
            (true, true) => DayCategory::ScheduledAcceptable,
            (false, true) => DayCategory::UnscheduledAcceptable,
            (true, false) => DayCategory::ScheduledUnacceptable,
            (false, false) => DayCategory::UnscheduledUnacceptable,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(
            self,
            DayCategory::ScheduledAcceptable | DayCategory::ScheduledUnacceptable
        )
    }

    pub fn is_acceptable(&self) -> bool {
        matches!(
            self,
            DayCategory::ScheduledAcceptable | DayCategory::UnscheduledAcceptable
        )
    }
}

/// One rendered day: its category plus presentational interval markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    pub category: DayCategory,
    /// Day equals the schedule's start date
    pub opens_interval: bool,
    /// Day equals the schedule's end date
    pub closes_interval: bool,
}

/// Classify every day of `year`, Jan 1 through Dec 31, in calendar order.
///
/// The returned iterator is lazy and yields 365 or 366 cells. A one-day
/// schedule marks the same cell as both opening and closing.
pub fn render<'a, F>(
    year: i32,
    schedule: &'a Schedule,
    is_acceptable: F,
) -> Result<impl Iterator<Item = DayCell> + 'a, ScheduleError>
where
    F: Fn(CalendarDate) -> bool + 'a,
{
    let days = year_interval(year)?.days();
    let start = schedule.start_date();
    let end = schedule.end_date();

    Ok(days.map(move |date| DayCell {
        date,
        category: DayCategory::classify(
            date_in_set(date, schedule.scheduled_dates()),
            is_acceptable(date),
        ),
        opens_interval: dates_equal(date, start),
        closes_interval: dates_equal(date, end),
    }))
}
