// ABOUTME: Logging configuration and structured logging setup for the recommender
// ABOUTME: Selects pretty, compact, or JSON output and applies the RUST_LOG filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Structured logging setup
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use crate::config::LogLevel;
use anyhow::Result;
use fastfood_core::constants::{env_config, service_names};
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for interactive use
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            service_name: service_names::FASTFOOD_RECOMMENDER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Only `LOG_FORMAT` is read here; `RUST_LOG` is applied as-is when the
    /// filter is built.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            format: env::var(env_config::LOG_FORMAT)
                .map_or(LogFormat::Pretty, |v| LogFormat::from_str_or_default(&v)),
            ..Self::default()
        }
    }

    /// Override the level; used by `--verbose`
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Filter built from `RUST_LOG` when set, otherwise from `self.level`
    fn env_filter(&self) -> EnvFilter {
        env::var(env_config::LOG_FILTER).map_or_else(
            |_| EnvFilter::new(self.level.to_string()),
            |directive| EnvFilter::new(&directive),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Fastfood recommender starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level.to_string(),
                "filter": env::var(env_config::LOG_FILTER).ok(),
                "format": format!("{:?}", self.format),
            }
        });
        tracing::debug!("Logging configuration: {}", config_summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default(" Compact "), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, service_names::FASTFOOD_RECOMMENDER);
    }

    #[test]
    fn test_with_level_overrides() {
        let config = LoggingConfig::default().with_level(LogLevel::Debug);
        assert_eq!(config.level, LogLevel::Debug);
    }
}
