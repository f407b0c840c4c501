//! Random dates and sub-intervals drawn from an injected RNG.

use chrono::Duration;
use rand::Rng;

use crate::dates::{CalendarDate, Interval, day_difference};
use crate::error::ScheduleError;

const MS_PER_DAY: i64 = 86_400_000;

/// Draw a calendar day uniformly from `[start, end]`.
///
/// A uniform fraction in `[0, 1)` is scaled over the millisecond span
/// covered by the bounded days and truncated back to a day, so both bounds
/// are reachable. `start == end` always yields that date.
pub fn random_date(
    rng: &mut impl Rng,
    start: CalendarDate,
    end: CalendarDate,
) -> Result<CalendarDate, ScheduleError> {
    if start > end {
        return Err(ScheduleError::InvalidInterval { start, end });
    }

    let span_days = day_difference(end, start);
    let total_ms = (span_days + 1) * MS_PER_DAY;
    let fraction: f64 = rng.random();
    let offset_ms = (fraction * total_ms as f64).floor() as i64;
    // Rounding at the top of [0, 1) must not step past `end`
    let offset_days = (offset_ms / MS_PER_DAY).min(span_days);

    Ok(start + Duration::days(offset_days))
}

/// Draw `sub_start` from `[start, end]`, then `sub_end` from `[sub_start, end]`.
///
/// Sampling the end from the narrowed range keeps
/// `start <= sub_start <= sub_end <= end` without a swap or rejection loop.
pub fn random_sub_interval(
    rng: &mut impl Rng,
    start: CalendarDate,
    end: CalendarDate,
) -> Result<Interval, ScheduleError> {
    let sub_start = random_date(rng, start, end)?;
    let sub_end = random_date(rng, sub_start, end)?;
    Interval::new(sub_start, sub_end)
}
