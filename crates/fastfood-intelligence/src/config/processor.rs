// ABOUTME: Feature extraction configuration for the dataset loader
// ABOUTME: Chooses the similarity feature columns and the min-max target range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::ConfigError;
use crate::algorithms::MinMaxScaler;
use fastfood_core::constants::defaults::{FEATURE_RANGE_MAX, FEATURE_RANGE_MIN};
use fastfood_core::models::NutrientColumn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Loader configuration, handed to the processor when it is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Columns that make up an item's feature vector, in vector order
    pub feature_columns: Vec<NutrientColumn>,
    /// Value the smallest entry of each column is scaled to
    pub feature_range_min: f64,
    /// Value the largest entry of each column is scaled to
    pub feature_range_max: f64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            feature_columns: NutrientColumn::FEATURES.to_vec(),
            feature_range_min: FEATURE_RANGE_MIN,
            feature_range_max: FEATURE_RANGE_MAX,
        }
    }
}

impl ProcessorConfig {
    /// Check the configuration for internal consistency
    ///
    /// # Errors
    ///
    /// Returns an error if no feature column is configured, a column repeats,
    /// or the target range is not a finite increasing interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feature_columns.is_empty() {
            return Err(ConfigError::MissingField("feature_columns"));
        }
        let mut seen = HashSet::new();
        if !self.feature_columns.iter().all(|col| seen.insert(*col)) {
            return Err(ConfigError::Parse(
                "feature_columns must not repeat a column".to_owned(),
            ));
        }
        if !self.feature_range_min.is_finite() || !self.feature_range_max.is_finite() {
            return Err(ConfigError::InvalidRange("feature range must be finite"));
        }
        if self.feature_range_min >= self.feature_range_max {
            return Err(ConfigError::InvalidRange(
                "feature_range_min must be below feature_range_max",
            ));
        }
        Ok(())
    }

    /// Unfitted scaler targeting the configured range
    #[must_use]
    pub fn scaler(&self) -> MinMaxScaler {
        MinMaxScaler::new().with_range(self.feature_range_min, self.feature_range_max)
    }
}
