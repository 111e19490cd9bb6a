// ABOUTME: Numeric algorithms behind nutrition similarity
// ABOUTME: Dense feature matrix type plus scaling and similarity submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Pairwise cosine similarity
pub mod cosine;

/// Column-wise min-max scaling
pub mod min_max;

pub use cosine::{cosine_similarity, SimilarityMatrix};
pub use min_max::MinMaxScaler;

use fastfood_core::errors::RecommenderError;
use thiserror::Error;

/// Errors raised by the numeric algorithms
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgorithmError {
    /// Matrix data length does not match its declared shape
    #[error("matrix shape {rows}x{cols} does not match {len} values")]
    ShapeMismatch {
        /// Declared rows
        rows: usize,
        /// Declared columns
        cols: usize,
        /// Actual number of values
        len: usize,
    },

    /// Input has no rows
    #[error("cannot fit on an empty matrix")]
    EmptyInput,

    /// Input column count differs from what the scaler was fit on
    #[error("expected {expected} feature columns, got {actual}")]
    DimensionMismatch {
        /// Columns seen during fit
        expected: usize,
        /// Columns of the input
        actual: usize,
    },

    /// Transform called before fit
    #[error("scaler has not been fitted")]
    NotFitted,
}

impl From<AlgorithmError> for RecommenderError {
    fn from(error: AlgorithmError) -> Self {
        Self::data_load("feature matrix", error.to_string())
    }
}

/// Dense row-major matrix of feature values, one row per menu item
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl FeatureMatrix {
    /// Build from row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len() != rows * cols`
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, AlgorithmError> {
        if rows * cols != data.len() {
            return Err(AlgorithmError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from equally sized rows
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have different lengths
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, AlgorithmError> {
        let cols = rows.first().map_or(0, Vec::len);
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        if rows.iter().any(|row| row.len() != cols) {
            return Err(AlgorithmError::ShapeMismatch {
                rows: rows.len(),
                cols,
                len: data.len(),
            });
        }
        Self::from_vec(rows.len(), cols, data)
    }

    /// `(rows, cols)`
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows
    #[must_use]
    pub const fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[must_use]
    pub const fn n_cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// One row as a slice
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunk size must be non-zero; a zero-column matrix has no data
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }
}
