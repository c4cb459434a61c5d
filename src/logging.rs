// File: ./src/logging.rs
// Log file setup and panic capture. The terminal belongs to the TUI, so
// everything goes to files in the data directory.
use crate::context::AppContext;
use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

pub const PANIC_LOG_FILENAME: &str = "coursedeck_panic.log";

/// Installs the global file logger. Returns the log path.
///
/// Calling this twice is harmless: the second logger is rejected by `log`
/// and only a warning is emitted.
pub fn init(ctx: &dyn AppContext, level: log::LevelFilter) -> Result<PathBuf> {
    let path = ctx
        .get_log_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine log location"))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("coursedeck")
        .build();

    if WriteLogger::init(level, config, file).is_err() {
        log::warn!("Logger already initialized");
    }
    Ok(path)
}

/// Appends panics to `coursedeck_panic.log` before running the default hook.
pub fn install_panic_hook(ctx: &dyn AppContext) {
    let panic_path = ctx
        .get_data_dir()
        .map(|d| d.join(PANIC_LOG_FILENAME))
        .unwrap_or_else(|_| PathBuf::from(PANIC_LOG_FILENAME));

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&panic_path)
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));
}
