// ABOUTME: Ranker configuration for default result counts and the healthy filter
// ABOUTME: Thresholds default to the fixed calorie and protein limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recommendation Configuration
//!
//! Default result count for top-N queries and the thresholds of the
//! healthy-options filter.

use super::ConfigError;
use fastfood_core::constants::defaults::DEFAULT_TOP_N;
use fastfood_core::constants::healthy::{HEALTHY_MAX_CALORIES, HEALTHY_MIN_PROTEIN_G};
use fastfood_core::models::MenuItem;
use serde::{Deserialize, Serialize};

/// Ranker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Result count used when the caller does not pass one
    pub default_top_n: usize,
    /// Healthy-options filter thresholds
    pub healthy: HealthyThresholds,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_top_n: DEFAULT_TOP_N,
            healthy: HealthyThresholds::default(),
        }
    }
}

impl RecommendationConfig {
    /// Check the configuration for internal consistency
    ///
    /// # Errors
    ///
    /// Returns an error if the default count is zero or a threshold is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_top_n == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_top_n must be at least 1",
            ));
        }
        self.healthy.validate()
    }
}

/// Strict bounds an item must satisfy to count as a healthy option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthyThresholds {
    /// Calories must be strictly below this
    pub max_calories: f64,
    /// Protein (g) must be strictly above this
    pub min_protein_g: f64,
}

impl Default for HealthyThresholds {
    fn default() -> Self {
        Self {
            max_calories: HEALTHY_MAX_CALORIES,
            min_protein_g: HEALTHY_MIN_PROTEIN_G,
        }
    }
}

impl HealthyThresholds {
    /// Whether `item` passes the filter
    #[must_use]
    pub fn is_healthy(&self, item: &MenuItem) -> bool {
        item.calories() < self.max_calories && item.protein() > self.min_protein_g
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_calories.is_finite() && self.min_protein_g.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "healthy thresholds must be finite",
            ))
        }
    }
}
