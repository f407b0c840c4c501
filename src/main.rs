use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schedule_viz::{
    AnsiDecorator, HolidayCalendar, PlainDecorator, Visualizer, config::AppConfig,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "schedule-viz")]
#[command(about = "Visualize random schedules against holiday calendars, one year at a time")]
struct Args {
    /// Additional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Years to visualize, comma separated (overrides config)
    #[arg(short, long, value_delimiter = ',')]
    years: Option<Vec<i32>>,

    /// Milliseconds between iterations (overrides config)
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// RNG seed for reproducible schedules (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Holiday calendar deciding acceptable days (overrides config)
    #[arg(long, value_enum)]
    holidays: Option<HolidayCalendar>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; frames own stdout, so logs go to stderr
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG overrides the CLI flag if set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
            .parse_lossy(format!("schedule_viz={level}"))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config =
        AppConfig::load_with_file(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(years) = args.years {
        config.display.years = years;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.display.iteration_delay_ms = delay_ms;
    }
    if let Some(seed) = args.seed {
        config.sampling.seed = Some(seed);
    }
    if args.no_color {
        config.display.color = false;
    }
    if let Some(calendar) = args.holidays {
        config.holidays.calendar = calendar;
    }
    config.validate()?;

    let rng = match config.sampling.seed {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let calendar = config.holidays.calendar;
    let visualizer = Visualizer::new(
        config.display.years.clone(),
        Duration::from_millis(config.display.iteration_delay_ms),
        rng,
    )
    .with_acceptability(move |date| calendar.is_acceptable(date))
    .with_glyph(config.display.glyph.clone());

    let mut visualizer = if config.display.color {
        visualizer.with_decorator(AnsiDecorator)
    } else {
        visualizer.with_decorator(PlainDecorator)
    };

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let reports = rt.block_on(visualizer.run())?;

    tracing::info!("Finished {} iterations", reports.len());
    Ok(())
}
