//! Logging setup
//!
//! The library crates only emit `tracing` events. The embedding binary calls
//! [`init_logging`] once to install a subscriber; `RUST_LOG` overrides the
//! configured filter.

use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human oriented
    #[default]
    Pretty,
    /// Single line
    Compact,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `info,liveroom_roles=debug`
    pub filter: String,
    pub format: LogFormat,
    /// Include the event target (module path)
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Filter from `RUST_LOG` if set, else from the configured directives
    pub fn env_filter(&self) -> Result<EnvFilter, ObservabilityError> {
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(directives) if !directives.trim().is_empty() => build_filter(&directives),
            _ => build_filter(&self.filter),
        }
    }
}

/// Logging setup errors
#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

fn build_filter(directives: &str) -> Result<EnvFilter, ObservabilityError> {
    EnvFilter::try_new(directives).map_err(|e| ObservabilityError::InvalidFilter {
        filter: directives.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(config.with_target))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(config.with_target))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(config.with_target))
            .try_init(),
    };

    result.map_err(|_| ObservabilityError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        assert!(build_filter("info,liveroom_roles=debug").is_ok());

        let err = build_filter("liveroom_roles=loudest").unwrap_err();
        assert!(matches!(err, ObservabilityError::InvalidFilter { .. }));
    }

    #[test]
    fn test_config_builders() {
        let config = LoggingConfig::default()
            .with_filter("warn")
            .with_format(LogFormat::Json);
        assert_eq!(config.filter, "warn");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default().with_format(LogFormat::Compact);
        let _ = init_logging(&config);

        assert!(matches!(
            init_logging(&config),
            Err(ObservabilityError::AlreadyInitialized)
        ));
    }
}
