//! Schedule Viz Library
//!
//! Random schedule generation, per-day classification and gap statistics
//! for calendar years, plus the terminal visualizer built on top of them.

pub mod config;
pub mod dates;
pub mod display;
pub mod driver;
pub mod error;
pub mod holidays;
pub mod render;
pub mod sampler;
pub mod schedule;
pub mod stats;
pub mod traits;

// Re-export commonly used types
pub use config::AppConfig;
pub use dates::{
    CalendarDate, Interval, calendar_date, date_in_set, dates_equal, day_difference, days_in_year,
    year_interval,
};
pub use display::{AnsiDecorator, Decorator, Paint, PlainDecorator};
pub use driver::{IterationReport, Visualizer};
pub use error::ScheduleError;
pub use holidays::{HolidayCalendar, is_us_federal_holiday};
pub use render::{DayCategory, DayCell, render};
pub use sampler::{random_date, random_sub_interval};
pub use schedule::{Schedule, generate};
pub use stats::{Stats, UNSET_GAP, compute_stats};
pub use traits::{MockScreen, Screen, ScreenEvent, TerminalScreen};
