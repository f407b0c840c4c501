use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::holidays::HolidayCalendar;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub display: DisplayConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    pub holidays: HolidayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Years visualized, one iteration each, in this order
    pub years: Vec<i32>,
    /// Pause between consecutive iterations
    pub iteration_delay_ms: u64,
    /// Emit ANSI colors
    pub color: bool,
    /// Symbol drawn for every day
    pub glyph: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            years: vec![2020, 2021, 2022, 2023, 2024],
            iteration_delay_ms: 1500,
            color: true,
            glyph: "|".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SamplingConfig {
    /// Fixed RNG seed for reproducible runs; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HolidayConfig {
    pub calendar: HolidayCalendar,
}

impl AppConfig {
    /// Load layered configuration without an explicit file.
    pub fn load() -> Result<Self> {
        Self::load_with_file(None)
    }

    /// Load layered configuration, with `extra` taking precedence over
    /// the default file locations but not over the environment.
    pub fn load_with_file(extra: Option<&Path>) -> Result<Self> {
        // Load .env file (silently ignore if not present)
        let _ = dotenvy::dotenv();

        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("schedule-viz");

        let mut builder = Config::builder()
            // 1. Load default values
            // Display
            .set_default("display.years", vec![2020_i64, 2021, 2022, 2023, 2024])?
            .set_default("display.iteration_delay_ms", 1500)?
            .set_default("display.color", true)?
            .set_default("display.glyph", "|")?
            // Holidays
            .set_default("holidays.calendar", "us-federal")?

            // 2. Load from local config file (optional, lowest priority)
            .add_source(File::from(PathBuf::from("config.toml")).required(false))

            // 3. Load from user config directory (optional, overrides local)
            .add_source(File::from(config_dir.join("config.toml")).required(false));

        // 4. Explicit file from the command line (required when given)
        if let Some(path) = extra {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        // 5. Load from Environment variables (SCHEDULE_VIZ__DISPLAY__YEARS=2020,2021)
        builder = builder.add_source(
            Environment::with_prefix("SCHEDULE_VIZ")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("display.years"),
        );

        let s = builder.build().context("Failed to build configuration")?;
        let config: Self = s
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the visualizer cannot run.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.display.years.is_empty(),
            "display.years must list at least one year"
        );
        ensure!(
            !self.display.glyph.is_empty(),
            "display.glyph must not be empty"
        );
        Ok(())
    }
}
