// ABOUTME: Environment configuration for the recommender runtime
// ABOUTME: Reads dataset location, default result count, and the log filter from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based runtime configuration

use fastfood_core::constants::{defaults, env_config};
use fastfood_intelligence::config::{ConfigError, RecommendationConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Runtime configuration read from the process environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Nutrition CSV location
    pub data_path: PathBuf,
    /// Result count when a query does not specify one
    pub default_top_n: usize,
    /// `RUST_LOG` filter directive as given, e.g. `info` or `fastfood_recommender=debug`
    pub log_filter: String,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(defaults::DEFAULT_DATA_PATH),
            default_top_n: defaults::DEFAULT_TOP_N,
            log_filter: defaults::DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `FASTFOOD_TOP_N` is not a positive integer or a
    /// variable holds non-Unicode data
    pub fn from_env() -> Result<Self, ConfigError> {
        let top_n_raw = env_var_or(env_config::TOP_N, &defaults::DEFAULT_TOP_N.to_string())?;
        let default_top_n = top_n_raw.trim().parse::<usize>().map_err(|e| {
            ConfigError::Parse(format!(
                "{} must be a positive integer, got '{top_n_raw}': {e}",
                env_config::TOP_N
            ))
        })?;

        let config = Self {
            data_path: PathBuf::from(env_var_or(
                env_config::DATA_PATH,
                defaults::DEFAULT_DATA_PATH,
            )?),
            default_top_n,
            log_filter: env_var_or(env_config::LOG_FILTER, defaults::DEFAULT_LOG_FILTER)?
                .trim()
                .to_owned(),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the data path is empty or the default count is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField(env_config::DATA_PATH));
        }
        if self.default_top_n == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "FASTFOOD_TOP_N must be at least 1",
            ));
        }
        Ok(())
    }

    /// Ranker configuration using this runtime's default count
    #[must_use]
    pub fn recommendation_config(&self) -> RecommendationConfig {
        RecommendationConfig {
            default_top_n: self.default_top_n,
            ..RecommendationConfig::default()
        }
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fastfood Recommender Configuration:\n\
             - Data Path: {}\n\
             - Default Top N: {}\n\
             - Log Filter: {}",
            self.data_path.display(),
            self.default_top_n,
            self.log_filter
        )
    }
}

/// Get environment variable or default value when unset
///
/// A value that is set but not valid Unicode is an error rather than a silent
/// fallback.
fn env_var_or(key: &str, default: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_owned()),
        Err(e) => Err(e.into()),
    }
}
