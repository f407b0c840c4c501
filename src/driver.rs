//! Paced multi-year visualization.
//!
//! Each year is generated, measured and rendered on its own tick of a
//! fixed-period interval, so frames appear one after another like an
//! animation. Once the last frame is out the cursor is reset.

use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;

use crate::dates::CalendarDate;
use crate::display::{AnsiDecorator, Decorator, compose_frame, info_line, render_line, stats_block};
use crate::holidays::HolidayCalendar;
use crate::render::render;
use crate::schedule::{Schedule, generate};
use crate::stats::{Stats, compute_stats};
use crate::traits::{Screen, TerminalScreen};

type Acceptability = Box<dyn Fn(CalendarDate) -> bool + Send + Sync>;

/// What one iteration produced.
#[derive(Debug, Clone)]
pub struct IterationReport {
    pub year: i32,
    pub schedule: Schedule,
    pub stats: Stats,
}

pub struct Visualizer<R> {
    years: Vec<i32>,
    delay: Duration,
    rng: R,
    acceptability: Acceptability,
    decorator: Box<dyn Decorator>,
    screen: Box<dyn Screen>,
    glyph: String,
}

impl<R: Rng> Visualizer<R> {
    /// Visualizer with US federal holidays, ANSI colors and stdout output.
    pub fn new(years: Vec<i32>, delay: Duration, rng: R) -> Self {
        let calendar = HolidayCalendar::default();
        Self {
            years,
            delay,
            rng,
            acceptability: Box::new(move |date| calendar.is_acceptable(date)),
            decorator: Box::new(AnsiDecorator),
            screen: Box::new(TerminalScreen),
            glyph: "|".to_string(),
        }
    }

    pub fn with_acceptability<F>(mut self, is_acceptable: F) -> Self
    where
        F: Fn(CalendarDate) -> bool + Send + Sync + 'static,
    {
        self.acceptability = Box::new(is_acceptable);
        self
    }

    pub fn with_decorator(mut self, decorator: impl Decorator + 'static) -> Self {
        self.decorator = Box::new(decorator);
        self
    }

    pub fn with_screen(mut self, screen: impl Screen + 'static) -> Self {
        self.screen = Box::new(screen);
        self
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    /// Run one iteration per year, `delay` apart, then reset the cursor.
    ///
    /// The first iteration runs immediately. Any failure aborts the run.
    pub async fn run(&mut self) -> Result<Vec<IterationReport>> {
        let total = self.years.len();
        tracing::info!(
            "Visualizing {} years with {} ms between iterations",
            total,
            self.delay.as_millis()
        );

        // tokio rejects a zero period
        let period = self.delay.max(Duration::from_millis(1));
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        let mut reports = Vec::with_capacity(total);
        for index in 0..total {
            interval.tick().await;
            let year = self.years[index];
            let report = self.run_iteration(index + 1, total, year)?;
            reports.push(report);
        }

        self.screen.reset_cursor()?;
        tracing::debug!("All {} iterations displayed", total);
        Ok(reports)
    }

    fn run_iteration(
        &mut self,
        iteration: usize,
        total: usize,
        year: i32,
    ) -> Result<IterationReport> {
        self.screen.clear()?;

        let schedule = generate(&mut self.rng, year)
            .with_context(|| format!("Failed to generate schedule for {year}"))?;
        let stats = compute_stats(&schedule);
        let cells = render(year, &schedule, &*self.acceptability)
            .with_context(|| format!("Failed to render year {year}"))?;

        let decorator = self.decorator.as_ref();
        let frame = compose_frame(
            &render_line(cells, &self.glyph, decorator),
            &info_line(iteration, total, &schedule, decorator),
            &stats_block(&stats),
        );
        self.screen.write_frame(&frame)?;

        tracing::debug!(
            "Iteration {}/{}: {} dates on [{}, {}]",
            iteration,
            total,
            schedule.len(),
            schedule.start_date(),
            schedule.end_date()
        );

        Ok(IterationReport {
            year,
            schedule,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::display::PlainDecorator;
    use crate::traits::{MockScreen, ScreenEvent};

    fn visualizer(years: Vec<i32>, delay_ms: u64, screen: &MockScreen) -> Visualizer<StdRng> {
        Visualizer::new(years, Duration::from_millis(delay_ms), StdRng::seed_from_u64(2020))
            .with_decorator(PlainDecorator)
            .with_screen(screen.clone())
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_frame_per_year_then_reset() {
        let screen = MockScreen::new();
        let mut viz = visualizer(vec![2020, 2021], 1500, &screen);

        let reports = viz.run().await.unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(screen.events().first(), Some(&ScreenEvent::Clear));
        assert_eq!(screen.events().last(), Some(&ScreenEvent::ResetCursor));
        assert_eq!(screen.frame_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_iterations_are_staggered() {
        let screen = MockScreen::new();
        let mut viz = visualizer(vec![2020, 2021, 2022], 1500, &screen);

        let start = tokio::time::Instant::now();
        viz.run().await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_runs() {
        let screen = MockScreen::new();
        let mut viz = visualizer(vec![2023], 0, &screen);

        let reports = viz.run().await.unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].year, 2023);
    }

    #[tokio::test(start_paused = true)]
    async fn test_frame_contains_plain_glyph_line() {
        let screen = MockScreen::new();
        let mut viz = visualizer(vec![2021], 10, &screen)
            .with_acceptability(|_| true)
            .with_glyph(".");

        let reports = viz.run().await.unwrap();
        let frame = &screen.frames()[0];
        let line = frame.lines().next().unwrap();

        // 365 glyphs plus the open and close markers
        assert_eq!(line.chars().filter(|c| *c == '.').count(), 365);
        assert_eq!(line.matches('[').count(), 1);
        assert_eq!(line.matches(']').count(), 1);
        assert!(frame.contains(&format!("{} Scheduled Days", reports[0].schedule.len())));
        assert!(frame.contains("Iteration 1 of 1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_year_propagates() {
        let screen = MockScreen::new();
        let mut viz = visualizer(vec![2021, i32::MAX], 10, &screen);

        let result = viz.run().await;

        assert!(result.is_err());
        assert_eq!(screen.frame_count(), 1);
        assert!(!screen.events().contains(&ScreenEvent::ResetCursor));
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_seed_same_reports() {
        let a = visualizer(vec![2020, 2024], 10, &MockScreen::new())
            .run()
            .await
            .unwrap();
        let b = visualizer(vec![2020, 2024], 10, &MockScreen::new())
            .run()
            .await
            .unwrap();

        let schedules_a: Vec<_> = a.iter().map(|r| r.schedule.clone()).collect();
        let schedules_b: Vec<_> = b.iter().map(|r| r.schedule.clone()).collect();
        assert_eq!(schedules_a, schedules_b);
    }
}
