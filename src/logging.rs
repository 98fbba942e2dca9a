//! File logging setup
//!
//! Logging is off by default so the alternate screen stays clean. When
//! enabled it writes to a file, never to the terminal the UI is drawn on.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Install the file logger according to the configuration.
///
/// A no-op when logging is disabled. The log file's parent directory is
/// created if needed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = resolve_log_path(config)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let log_file =
        fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Debug)
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    log::info!("logging started, writing to {}", path.display());
    Ok(())
}

/// Default log file location when none is configured.
fn resolve_log_path(config: &LoggingConfig) -> Result<PathBuf> {
    if let Some(path) = &config.file {
        return Ok(path.clone());
    }

    dirs::data_local_dir()
        .map(|dir| dir.join("refdeck").join("refdeck.log"))
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
}
