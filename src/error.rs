use chrono::NaiveDate;
use thiserror::Error;

/// Contract violations raised by the scheduling core.
///
/// Every variant describes a caller bug rather than a transient condition,
/// so nothing in the crate retries on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },
    #[error("Invalid date: {year:04}-{month:02}-{day:02} is not a calendar day")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Scheduled date {date} lies outside [{start}, {end}]")]
    DateOutsideInterval {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[error("Schedule must contain at least one scheduled date")]
    EmptySchedule,
}
