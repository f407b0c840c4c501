use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Deserialize;

use crate::dates::CalendarDate;

/// Holiday source deciding which days are acceptable for scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HolidayCalendar {
    /// Observed US federal holidays are unacceptable
    #[default]
    UsFederal,
    /// Every day is acceptable
    None,
}

impl HolidayCalendar {
    /// Whether `date` is open for scheduling under this calendar.
    pub fn is_acceptable(&self, date: CalendarDate) -> bool {
        match self {
            HolidayCalendar::UsFederal => !is_us_federal_holiday(date),
            HolidayCalendar::None => true,
        }
    }
}

/// Check if a date is an observed US federal holiday.
///
/// Holidays falling on a Saturday are observed the Friday before, those on a
/// Sunday the Monday after; only the observed day counts.
pub fn is_us_federal_holiday(date: NaiveDate) -> bool {
    let year = date.year();

    // New Year's Day of the following year can be observed on Dec 31
    if date.month() == 12 && date.day() == 31 {
        if let Some(new_year) = NaiveDate::from_ymd_opt(year + 1, 1, 1) {
            if observed(new_year) == date {
                return true;
            }
        }
    }

    federal_holidays(year).into_iter().any(|h| observed(h) == date)
}

/// Actual (unshifted) federal holiday dates for `year`.
fn federal_holidays(year: i32) -> Vec<NaiveDate> {
    let fixed = [
        Some((1, 1)),                        // New Year's Day
        (year >= 2021).then_some((6, 19)),   // Juneteenth
        Some((7, 4)),                        // Independence Day
        Some((11, 11)),                      // Veterans Day
        Some((12, 25)),                      // Christmas Day
    ];
    let floating = [
        nth_weekday(year, 1, Weekday::Mon, 3),  // Birthday of Martin Luther King, Jr.
        nth_weekday(year, 2, Weekday::Mon, 3),  // Washington's Birthday
        last_weekday(year, 5, Weekday::Mon),    // Memorial Day
        nth_weekday(year, 9, Weekday::Mon, 1),  // Labor Day
        nth_weekday(year, 10, Weekday::Mon, 2), // Columbus Day
        nth_weekday(year, 11, Weekday::Thu, 4), // Thanksgiving Day
    ];

    fixed
        .into_iter()
        .flatten()
        .filter_map(|(m, d)| NaiveDate::from_ymd_opt(year, m, d))
        .chain(floating.into_iter().flatten())
        .collect()
}

fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

fn last_weekday(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    nth_weekday(year, month, weekday, 5).or_else(|| nth_weekday(year, month, weekday, 4))
}

fn observed(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - Duration::days(1),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
