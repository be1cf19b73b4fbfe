//! Logging setup on top of tracing-subscriber

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::domain::errors::DomainError;

/// Logging configuration options
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set
    pub level: LevelFilter,
    /// Include target module information
    pub target: bool,
    /// Use colored output (if supported)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            target: false,
            colored: true,
        }
    }
}

impl LoggingConfig {
    /// Build a configuration from a level name such as `info` or `debug`
    pub fn with_level(level: &str) -> Result<Self, DomainError> {
        let level = parse_level(level)?;
        Ok(Self {
            level,
            ..Self::default()
        })
    }
}

/// Parse a log level name
pub fn parse_level(level: &str) -> Result<LevelFilter, DomainError> {
    level.trim().parse::<LevelFilter>().map_err(|_| {
        DomainError::ConfigFail(format!(
            "Invalid log level: {}. Valid levels: off, error, warn, info, debug, trace",
            level
        ))
    })
}

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<(), DomainError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.target)
        .with_ansi(config.colored)
        .try_init()
        .map_err(|e| DomainError::ConfigFail(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log version and platform information
pub fn log_system_info() {
    tracing::info!("framecut {}", env!("CARGO_PKG_VERSION"));

    #[cfg(target_os = "macos")]
    tracing::debug!("Platform: macOS");
    #[cfg(target_os = "linux")]
    tracing::debug!("Platform: Linux");
    #[cfg(target_os = "windows")]
    tracing::debug!("Platform: Windows");
}
