// ABOUTME: Column-wise min-max scaling of feature matrices
// ABOUTME: Fits per-column bounds once and rescales values into a target range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{AlgorithmError, FeatureMatrix};
use fastfood_core::constants::defaults::{FEATURE_RANGE_MAX, FEATURE_RANGE_MIN};
use serde::{Deserialize, Serialize};

/// Ranges narrower than this are treated as constant columns
const CONSTANT_RANGE_EPSILON: f64 = 1e-12;

/// Scales every column independently so its fitted minimum maps to the lower
/// bound of the target range and its fitted maximum to the upper bound.
///
/// A constant column maps to the lower bound for every row.
///
/// ```
/// use fastfood_intelligence::algorithms::{FeatureMatrix, MinMaxScaler};
///
/// let data = FeatureMatrix::from_rows(&[vec![0.0, 10.0], vec![5.0, 20.0], vec![10.0, 30.0]])
///     .expect("rectangular rows");
/// let mut scaler = MinMaxScaler::new();
/// let scaled = scaler.fit_transform(&data).expect("non-empty input");
///
/// assert!((scaled.get(1, 0) - 0.5).abs() < 1e-12);
/// assert!((scaled.get(2, 1) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    data_min: Option<Vec<f64>>,
    data_max: Option<Vec<f64>>,
    feature_min: f64,
    feature_max: f64,
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxScaler {
    /// Unfitted scaler targeting [0, 1]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data_min: None,
            data_max: None,
            feature_min: FEATURE_RANGE_MIN,
            feature_max: FEATURE_RANGE_MAX,
        }
    }

    /// Set the target range
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.feature_min = min;
        self.feature_max = max;
        self
    }

    /// Whether [`Self::fit`] has been called
    #[must_use]
    pub const fn is_fitted(&self) -> bool {
        self.data_min.is_some()
    }

    /// Fitted per-column minimum
    #[must_use]
    pub fn data_min(&self) -> Option<&[f64]> {
        self.data_min.as_deref()
    }

    /// Fitted per-column maximum
    #[must_use]
    pub fn data_max(&self) -> Option<&[f64]> {
        self.data_max.as_deref()
    }

    /// Compute per-column bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix has no rows
    pub fn fit(&mut self, x: &FeatureMatrix) -> Result<(), AlgorithmError> {
        let (n_rows, n_cols) = x.shape();
        if n_rows == 0 {
            return Err(AlgorithmError::EmptyInput);
        }

        let mut data_min = vec![f64::INFINITY; n_cols];
        let mut data_max = vec![f64::NEG_INFINITY; n_cols];
        for row in x.rows() {
            for (col, &value) in row.iter().enumerate() {
                data_min[col] = data_min[col].min(value);
                data_max[col] = data_max[col].max(value);
            }
        }

        self.data_min = Some(data_min);
        self.data_max = Some(data_max);
        Ok(())
    }

    /// Rescale with the fitted bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the scaler is unfitted or the column count differs
    pub fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix, AlgorithmError> {
        let (Some(data_min), Some(data_max)) = (&self.data_min, &self.data_max) else {
            return Err(AlgorithmError::NotFitted);
        };
        let (n_rows, n_cols) = x.shape();
        if n_cols != data_min.len() {
            return Err(AlgorithmError::DimensionMismatch {
                expected: data_min.len(),
                actual: n_cols,
            });
        }

        let target_range = self.feature_max - self.feature_min;
        let mut scaled = Vec::with_capacity(n_rows * n_cols);
        for row in x.rows() {
            for (col, &value) in row.iter().enumerate() {
                let data_range = data_max[col] - data_min[col];
                scaled.push(if data_range.abs() > CONSTANT_RANGE_EPSILON {
                    ((value - data_min[col]) / data_range)
                        .mul_add(target_range, self.feature_min)
                } else {
                    self.feature_min
                });
            }
        }

        FeatureMatrix::from_vec(n_rows, n_cols, scaled)
    }

    /// [`Self::fit`] followed by [`Self::transform`]
    ///
    /// # Errors
    ///
    /// Propagates errors from either step
    pub fn fit_transform(&mut self, x: &FeatureMatrix) -> Result<FeatureMatrix, AlgorithmError> {
        self.fit(x)?;
        self.transform(x)
    }
}
