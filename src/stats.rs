use crate::dates::day_difference;
use crate::schedule::Schedule;

/// Value the summary text prints for a gap that has no adjacent pair.
pub const UNSET_GAP: i64 = -1;

/// Gap statistics for one schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Interval span divided by the number of scheduled dates.
    ///
    /// This is a density measure, not the mean of the pairwise gaps.
    pub average_days_between_dates: f64,
    /// Smallest gap between consecutive scheduled dates; `None` with one date.
    pub min_days_between_dates: Option<i64>,
    /// Largest gap between consecutive scheduled dates; `None` with one date.
    pub max_days_between_dates: Option<i64>,
    /// Scheduled dates counted, duplicates included.
    pub scheduled_count: usize,
}

impl Stats {
    pub fn min_gap_or_sentinel(&self) -> i64 {
        self.min_days_between_dates.unwrap_or(UNSET_GAP)
    }

    pub fn max_gap_or_sentinel(&self) -> i64 {
        self.max_days_between_dates.unwrap_or(UNSET_GAP)
    }
}

/// Compute gap statistics over a sorted copy of the scheduled dates.
///
/// The schedule itself is left untouched.
pub fn compute_stats(schedule: &Schedule) -> Stats {
    let scheduled_count = schedule.len();
    let span = schedule.interval().span_days();
    let average_days_between_dates = span as f64 / scheduled_count as f64;

    let mut sorted = schedule.scheduled_dates().to_vec();
    sorted.sort();

    let gaps = sorted.windows(2).map(|pair| day_difference(pair[1], pair[0]));
    let (min, max) = gaps.fold((None, None), |(min, max): (Option<i64>, Option<i64>), gap| {
        (
            Some(min.map_or(gap, |m| m.min(gap))),
            Some(max.map_or(gap, |m| m.max(gap))),
        )
    });

    Stats {
        average_days_between_dates,
        min_days_between_dates: min,
        max_days_between_dates: max,
        scheduled_count,
    }
}
