//! Logging system configuration and initialization
//!
//! - Console output on stderr so documentation fragments on stdout stay clean
//! - Optional file output in a `logs/` directory next to the executable
//! - Configuration based log level with per-module filters
//! - Optional structured JSON format

#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Registry,
    filter::Directive,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

const LOG_FILE_NAME: &str = "widget-explorer.log";

// Global guard to keep the log file writer alive
lazy_static! {
    static ref LOG_GUARDS: Mutex<Vec<tracing_appender::non_blocking::WorkerGuard>> =
        Mutex::new(Vec::new());
}

/// Local wall-clock timestamps with millisecond precision
struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Get the log directory relative to the executable location
pub fn get_log_directory() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    exe_dir.join("logs")
}

/// Initialize the logging system with default configuration
pub fn init_logging() -> Result<()> {
    init_logging_with_config(&LoggingConfig::default())
}

/// Filter from RUST_LOG if set, otherwise from the configured level and module filters.
///
/// Module filters are skipped at trace level so that everything is shown.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    if !config.level.eq_ignore_ascii_case("trace") {
        let mut modules: Vec<_> = config.module_filters.iter().collect();
        modules.sort();
        for (module, level) in modules {
            let directive = format!("{}={}", module, level)
                .parse::<Directive>()
                .with_context(|| format!("Invalid log filter for {}: {}", module, level))?;
            filter = filter.add_directive(directive);
        }
    }

    Ok(filter)
}

/// Rename an existing log file with its modification timestamp
fn rotate_existing_log_file(log_dir: &Path, log_file_name: &str) -> Result<()> {
    let log_file_path = log_dir.join(log_file_name);
    if !log_file_path.exists() {
        return Ok(());
    }

    let modified = std::fs::metadata(&log_file_path)
        .and_then(|metadata| metadata.modified())
        .unwrap_or_else(|_| std::time::SystemTime::now());
    let stamp: chrono::DateTime<Local> = modified.into();

    let file_stem = log_file_name.trim_end_matches(".log");
    let rotated = log_dir.join(format!("{}.{}.log", file_stem, stamp.format("%Y%m%dT%H%M%S")));
    std::fs::rename(&log_file_path, &rotated).map_err(|e| {
        anyhow!(
            "Failed to rotate log file {} to {}: {}",
            log_file_path.display(),
            rotated.display(),
            e
        )
    })?;
    Ok(())
}

/// Initialize logging with custom configuration
///
/// # Environment Variable Override
/// ```bash
/// RUST_LOG="debug,reqwest=debug" widget-explorer doc QComboBox addItem
/// ```
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_env_filter(config)?;
    let registry = Registry::default().with(env_filter);

    let console_layer = config.console_output.then(|| {
        fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_timer(LocalTimeFormatter)
            .with_target(false)
    });

    let log_dir = get_log_directory();
    let file_writer = if config.file_output {
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| anyhow!("Failed to create log directory {:?}: {}", log_dir, e))?;
        rotate_existing_log_file(&log_dir, LOG_FILE_NAME)?;

        let (writer, guard) = non_blocking(rolling::never(&log_dir, LOG_FILE_NAME));
        LOG_GUARDS
            .lock()
            .map_err(|_| anyhow!("Log guard registry poisoned"))?
            .push(guard);
        Some(writer)
    } else {
        None
    };

    let installed = match (file_writer, config.json_format) {
        (Some(writer), true) => {
            let file_layer = fmt::Layer::new()
                .json()
                .with_writer(writer)
                .with_timer(LocalTimeFormatter)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);
            registry.with(console_layer).with(file_layer).try_init()
        }
        (Some(writer), false) => {
            let file_layer = fmt::Layer::new()
                .with_writer(writer)
                .with_timer(LocalTimeFormatter)
                .with_target(false)
                .with_ansi(false);
            registry.with(console_layer).with(file_layer).try_init()
        }
        (None, _) if console_layer.is_none() => {
            return Err(anyhow!("No logging output configured"));
        }
        (None, _) => registry.with(console_layer).try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    info!("Logging system initialized (level: {})", config.level);
    if config.file_output {
        info!("Log directory: {:?}", log_dir);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.console_output);
        assert!(!config.file_output);
    }

    #[test]
    fn test_log_directory_location() {
        assert!(get_log_directory().to_string_lossy().ends_with("logs"));
    }

    #[test]
    fn test_default_filter_builds() {
        assert!(build_env_filter(&LoggingConfig::default()).is_ok());

        let trace = LoggingConfig {
            level: "trace".to_string(),
            ..LoggingConfig::default()
        };
        assert!(build_env_filter(&trace).is_ok());
    }

    #[test]
    fn test_rotation_renames_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(LOG_FILE_NAME), "old").unwrap();

        rotate_existing_log_file(dir.path(), LOG_FILE_NAME).unwrap();

        assert!(!dir.path().join(LOG_FILE_NAME).exists());
        let rotated = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(rotated, 1);
    }
}
