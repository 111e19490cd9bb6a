// ABOUTME: Configuration for the loader's scaling step and the ranker's filters
// ABOUTME: Plain serde structs with defaults and validation, no global state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Loader and ranker configuration.
//!
//! Both structs are passed explicitly at construction time; nothing here is
//! cached process-wide.

/// Configuration error types
pub mod error;

/// Feature extraction and scaling configuration
pub mod processor;

/// Ranking defaults and healthy-filter thresholds
pub mod recommendation;

pub use error::ConfigError;
pub use processor::ProcessorConfig;
pub use recommendation::{HealthyThresholds, RecommendationConfig};
