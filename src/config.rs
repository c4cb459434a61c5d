// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage::LocalStorage;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_path_prefix() -> String {
    "/~obaumgartner".to_string()
}
fn default_frequency() -> f64 {
    0.5
}
fn default_frame_rate() -> u32 {
    30
}
fn default_true() -> bool {
    true
}
fn default_trace_len() -> usize {
    crate::epicycle::DEFAULT_TRACE_LEN
}
fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Prefix for material links, the site's deployment path.
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,

    #[serde(default = "default_frequency")]
    pub phasor_frequency_hz: f64,
    #[serde(default = "default_true")]
    pub show_sum: bool,

    /// Animation frames per second for the phasor and epicycle views.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default = "default_trace_len")]
    pub epicycle_trace_len: usize,

    /// Preselects "Set all as obligatory" when generating weekly series.
    #[serde(default)]
    pub default_obligatory: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path_prefix: default_path_prefix(),
            phasor_frequency_hz: default_frequency(),
            show_sum: true,
            frame_rate: default_frame_rate(),
            epicycle_trace_len: default_trace_len(),
            default_obligatory: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults, which are also
    /// written out so there is a file to edit.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(c) => Ok(c),
            Err(e) if Self::is_missing_config_error(&e) => {
                let config = Self::default();
                if let Err(e) = config.save(ctx) {
                    log::warn!("Could not write default config: {:#}", e);
                }
                Ok(config)
            }
            Err(e) => Err(e),
        }
    }

    /// Detects whether an error means the config file was missing.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
    }

    /// Frequency limited to the simulator's slider range.
    pub fn clamped_frequency(&self) -> f64 {
        self.phasor_frequency_hz
            .clamp(crate::phasor::MIN_FREQUENCY_HZ, crate::phasor::MAX_FREQUENCY_HZ)
    }
}
