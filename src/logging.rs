// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Wires tracing-subscriber with env-filter overrides and selectable output formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! Structured logging setup.
//!
//! The engine itself only emits `tracing` events; hosts that want them on
//! stderr call [`init`] once at startup. `RUST_LOG` overrides the configured
//! level as usual.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::errors::{EngineError, EngineResult};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns [`EngineError::LoggingInit`] when a subscriber is already
/// installed or the level filter cannot be parsed.
pub fn init(config: &LoggingConfig) -> EngineResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| EngineError::LoggingInit {
            reason: e.to_string(),
        })?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_file(config.include_location))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_file(config.include_location))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_file(config.include_location))
            .try_init(),
    };

    result.map_err(|e| EngineError::LoggingInit {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_pretty_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.include_location);
    }
}
