//! Text encoding of rendered years, schedules and stats.

use crate::render::{DayCategory, DayCell};
use crate::schedule::Schedule;
use crate::stats::Stats;

/// Color intent attached to a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Day glyph colored by its category
    Day(DayCategory),
    /// Interval open/close markers
    Boundary,
    /// Emphasized numbers in the info line
    Highlight,
}

/// Turns a glyph plus a color intent into printable text.
pub trait Decorator: Send + Sync {
    fn decorate(&self, text: &str, paint: Paint) -> String;
}

/// ANSI SGR foreground colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDecorator;

impl AnsiDecorator {
    fn color_code(paint: Paint) -> u8 {
        match paint {
            Paint::Day(DayCategory::ScheduledAcceptable) => 32,
            Paint::Day(DayCategory::UnscheduledAcceptable) => 34,
            Paint::Day(DayCategory::ScheduledUnacceptable) => 33,
            Paint::Day(DayCategory::UnscheduledUnacceptable) => 31,
            Paint::Boundary => 95,
            Paint::Highlight => 33,
        }
    }
}

impl Decorator for AnsiDecorator {
    fn decorate(&self, text: &str, paint: Paint) -> String {
        format!("\x1b[{}m{}\x1b[39m", Self::color_code(paint), text)
    }
}

/// Leaves text untouched; for pipes and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecorator;

impl Decorator for PlainDecorator {
    fn decorate(&self, text: &str, _paint: Paint) -> String {
        text.to_string()
    }
}

/// Concatenate one decorated glyph per day, wrapping the schedule's
/// interval in `[` and `]`.
pub fn render_line<I>(cells: I, glyph: &str, decorator: &dyn Decorator) -> String
where
    I: IntoIterator<Item = DayCell>,
{
    let mut line = String::new();
    for cell in cells {
        if cell.opens_interval {
            line.push_str(&decorator.decorate("[", Paint::Boundary));
        }
        line.push_str(&decorator.decorate(glyph, Paint::Day(cell.category)));
        if cell.closes_interval {
            line.push_str(&decorator.decorate("]", Paint::Boundary));
        }
    }
    line
}

/// `Iteration i of n -- k Scheduled Days on [start, end]`.
pub fn info_line(
    iteration: usize,
    total: usize,
    schedule: &Schedule,
    decorator: &dyn Decorator,
) -> String {
    format!(
        "Iteration {} of {} -- {} Scheduled Days on [{}, {}]",
        decorator.decorate(&iteration.to_string(), Paint::Highlight),
        decorator.decorate(&total.to_string(), Paint::Highlight),
        schedule.len(),
        schedule.start_date().format("%Y-%m-%d"),
        schedule.end_date().format("%Y-%m-%d"),
    )
}

/// Multi-line stats summary; gaps without an adjacent pair print as `-1`.
pub fn stats_block(stats: &Stats) -> String {
    format!(
        "Scheduled Day Statistics:\n\t Avg. Between Dates:\t {}\n\t Min. Days Between Dates: {}\n\t Max Days Between Dates: {}",
        stats.average_days_between_dates,
        stats.min_gap_or_sentinel(),
        stats.max_gap_or_sentinel(),
    )
}

/// Everything shown for one iteration.
pub fn compose_frame(line: &str, info: &str, stats: &str) -> String {
    format!("{line}\n{info}\n\n{stats}")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::render::render;
    use crate::stats::compute_stats;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cell(category: DayCategory, opens: bool, closes: bool) -> DayCell {
        DayCell {
            date: date(2021, 1, 1),
            category,
            opens_interval: opens,
            closes_interval: closes,
        }
    }

    #[test]
    fn test_ansi_colors_per_category() {
        let d = AnsiDecorator;
        assert_eq!(
            d.decorate("|", Paint::Day(DayCategory::ScheduledAcceptable)),
            "\x1b[32m|\x1b[39m"
        );
        assert_eq!(
            d.decorate("|", Paint::Day(DayCategory::UnscheduledAcceptable)),
            "\x1b[34m|\x1b[39m"
        );
        assert_eq!(
            d.decorate("|", Paint::Day(DayCategory::ScheduledUnacceptable)),
            "\x1b[33m|\x1b[39m"
        );
        assert_eq!(
            d.decorate("|", Paint::Day(DayCategory::UnscheduledUnacceptable)),
            "\x1b[31m|\x1b[39m"
        );
        assert_eq!(d.decorate("[", Paint::Boundary), "\x1b[95m[\x1b[39m");
    }

    #[test]
    fn test_render_line_markers() {
        let cells = [
            cell(DayCategory::UnscheduledAcceptable, false, false),
            cell(DayCategory::ScheduledAcceptable, true, false),
            cell(DayCategory::UnscheduledUnacceptable, false, false),
            cell(DayCategory::ScheduledUnacceptable, false, true),
        ];
        assert_eq!(render_line(cells, "|", &PlainDecorator), "|[|||]");
    }

    #[test]
    fn test_render_line_degenerate_day_gets_both_markers() {
        let cells = [cell(DayCategory::ScheduledAcceptable, true, true)];
        assert_eq!(render_line(cells, "#", &PlainDecorator), "[#]");
    }

    #[test]
    fn test_info_and_stats_text() {
        let schedule = Schedule::new(
            date(2021, 3, 1),
            date(2021, 3, 10),
            vec![date(2021, 3, 1), date(2021, 3, 5), date(2021, 3, 10)],
        )
        .unwrap();
        let stats = compute_stats(&schedule);

        assert_eq!(
            info_line(2, 5, &schedule, &PlainDecorator),
            "Iteration 2 of 5 -- 3 Scheduled Days on [2021-03-01, 2021-03-10]"
        );
        assert_eq!(
            stats_block(&stats),
            "Scheduled Day Statistics:\n\t Avg. Between Dates:\t 3\n\t Min. Days Between Dates: 4\n\t Max Days Between Dates: 5"
        );
    }

    #[test]
    fn test_stats_block_prints_sentinel_for_single_date() {
        let schedule =
            Schedule::new(date(2021, 3, 1), date(2021, 3, 2), vec![date(2021, 3, 2)]).unwrap();
        let text = stats_block(&compute_stats(&schedule));
        assert!(text.contains("Min. Days Between Dates: -1"));
        assert!(text.contains("Max Days Between Dates: -1"));
    }

    #[test]
    fn test_full_year_line_length() {
        let schedule =
            Schedule::new(date(2020, 2, 1), date(2020, 2, 29), vec![date(2020, 2, 14)]).unwrap();
        let line = render_line(
            render(2020, &schedule, |_| true).unwrap(),
            "|",
            &PlainDecorator,
        );
        // 366 glyphs plus the two interval markers
        assert_eq!(line.chars().count(), 368);
    }

    #[test]
    fn test_compose_frame_layout() {
        assert_eq!(compose_frame("L", "I", "S"), "L\nI\n\nS");
    }
}
