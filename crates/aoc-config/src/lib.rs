//! # aoc-config
//!
//! Layered configuration loading for aocplot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides ([`ConfigOverrides`])
//! 2. Environment variables (`AOCPLOT_*` prefix, `__` as separator)
//! 3. Project-level `./aocplot.toml`
//! 4. User-level `~/.config/aocplot/config.toml`
//! 5. Built-in defaults
//!
//! With no files, no environment and no overrides the defaults read
//! `aoc.json` and write the charts into the current directory.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AOCPLOT_INPUT__PATH` -> `input.path`,
//! `AOCPLOT_OUTPUT__DIR` -> `output.dir`, `AOCPLOT_CHART__TITLE_PREFIX` ->
//! `chart.title_prefix`.
//!
//! # Usage
//!
//! ```no_run
//! use aoc_config::PlotConfig;
//!
//! let config = PlotConfig::load_with_dotenv().expect("config");
//! println!("reading {}", config.input.path.display());
//! ```

mod chart;
mod error;
mod input;
mod output;

pub use chart::ChartConfig;
pub use error::ConfigError;
pub use input::InputConfig;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PlotConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Values given explicitly on the command line. `None` keeps the layered value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub tables: Option<PathBuf>,
}

impl PlotConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Figment extraction failures or invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("aocplot.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables
        figment.merge(Env::prefixed("AOCPLOT_").split("__"))
    }

    /// Apply command-line overrides on top of the layered values.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] if an override produces an invalid config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(input) = overrides.input {
            self.input.path = input;
        }
        if let Some(dir) = overrides.output_dir {
            self.output.dir = dir;
        }
        if overrides.tables.is_some() {
            self.output.tables = overrides.tables;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject values that can never work.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "input.path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.output.dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.chart.title_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "chart.title_prefix".to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aocplot").join("config.toml"))
    }
}
