// ABOUTME: Configuration error types for loader and ranker validation
// ABOUTME: Defines error variants for invalid ranges, missing fields, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration error types.

use fastfood_core::errors::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range bounds are inverted or not finite
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
