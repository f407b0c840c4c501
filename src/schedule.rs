use rand::Rng;

use crate::dates::{CalendarDate, Interval, year_interval};
use crate::error::ScheduleError;
use crate::sampler::{random_date, random_sub_interval};

/// An active interval plus the days scheduled inside it.
///
/// `scheduled_dates` is never empty and may hold duplicates; its order
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    interval: Interval,
    scheduled_dates: Vec<CalendarDate>,
}

impl Schedule {
    /// Build a schedule by hand, checking that every date lies in the interval.
    pub fn new(
        start_date: CalendarDate,
        end_date: CalendarDate,
        scheduled_dates: Vec<CalendarDate>,
    ) -> Result<Self, ScheduleError> {
        let interval = Interval::new(start_date, end_date)?;
        if scheduled_dates.is_empty() {
            return Err(ScheduleError::EmptySchedule);
        }
        if let Some(&date) = scheduled_dates.iter().find(|d| !interval.contains(**d)) {
            return Err(ScheduleError::DateOutsideInterval {
                date,
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            interval,
            scheduled_dates,
        })
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn start_date(&self) -> CalendarDate {
        self.interval.start_date()
    }

    pub fn end_date(&self) -> CalendarDate {
        self.interval.end_date()
    }

    pub fn scheduled_dates(&self) -> &[CalendarDate] {
        &self.scheduled_dates
    }

    /// Number of draws, duplicates included.
    pub fn len(&self) -> usize {
        self.scheduled_dates.len()
    }

    /// Always false for schedules built through [`Schedule::new`] or [`generate`].
    pub fn is_empty(&self) -> bool {
        self.scheduled_dates.is_empty()
    }
}

/// Generate a random schedule for `year`.
///
/// Picks a random sub-interval of the year, then draws between 1 and
/// `span_days` dates (exactly one for a single-day interval) from it.
pub fn generate(rng: &mut impl Rng, year: i32) -> Result<Schedule, ScheduleError> {
    let bounds = year_interval(year)?;
    let interval = random_sub_interval(rng, bounds.start_date(), bounds.end_date())?;

    let span_days = interval.span_days();
    let fraction: f64 = rng.random();
    let count = (fraction * span_days as f64).floor() as usize + 1;

    let mut scheduled_dates = Vec::with_capacity(count);
    for _ in 0..count {
        scheduled_dates.push(random_date(rng, interval.start_date(), interval.end_date())?);
    }

    Ok(Schedule {
        interval,
        scheduled_dates,
    })
}
