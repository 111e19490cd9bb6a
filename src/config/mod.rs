// ABOUTME: Configuration module for the recommender runtime
// ABOUTME: Re-exports environment configuration alongside the algorithm configuration structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration for the recommender
//!
//! - **Environment**: dataset path, default result count, and log settings
//!   read from environment variables
//! - **Algorithm**: [`ProcessorConfig`] and [`RecommendationConfig`], defined
//!   in `fastfood-intelligence` and passed explicitly at construction time

/// Environment-based runtime configuration
pub mod environment;

pub use environment::{LogLevel, RecommenderConfig};
pub use fastfood_intelligence::config::{
    ConfigError, HealthyThresholds, ProcessorConfig, RecommendationConfig,
};
