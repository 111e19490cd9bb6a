// ABOUTME: Application constants for dataset columns, filters, and runtime defaults
// ABOUTME: Groups values by domain so call sites read as `healthy::HEALTHY_MAX_CALORIES`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Application constants organized by domain

/// Non-numeric column names every dataset must provide
pub mod columns {
    /// Menu item name column
    pub const ITEM: &str = "item";
    /// Restaurant (chain) name column
    pub const RESTAURANT: &str = "restaurant";
}

/// Fixed thresholds of the healthy-options filter
pub mod healthy {
    /// Items must have strictly fewer calories than this
    pub const HEALTHY_MAX_CALORIES: f64 = 500.0;
    /// Items must have strictly more protein (grams) than this
    pub const HEALTHY_MIN_PROTEIN_G: f64 = 20.0;
}

/// Default values used when configuration does not override them
pub mod defaults {
    /// Number of recommendations returned when the caller does not ask for a count
    pub const DEFAULT_TOP_N: usize = 5;
    /// Dataset location relative to the working directory
    pub const DEFAULT_DATA_PATH: &str = "data/fastfood.csv";
    /// Tracing filter used when `RUST_LOG` is unset
    pub const DEFAULT_LOG_FILTER: &str = "info";
    /// Lower bound of the min-max scaling range
    pub const FEATURE_RANGE_MIN: f64 = 0.0;
    /// Upper bound of the min-max scaling range
    pub const FEATURE_RANGE_MAX: f64 = 1.0;
}

/// Environment variable names read by the runtime configuration
pub mod env_config {
    /// Path of the nutrition CSV file
    pub const DATA_PATH: &str = "FASTFOOD_DATA_PATH";
    /// Default number of recommendations
    pub const TOP_N: &str = "FASTFOOD_TOP_N";
    /// Log output format (`pretty`, `compact`, `json`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Tracing filter directive
    pub const LOG_FILTER: &str = "RUST_LOG";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the recommender in startup logs
    pub const FASTFOOD_RECOMMENDER: &str = "fastfood-recommender";
}
