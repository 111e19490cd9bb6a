// ABOUTME: Cosine similarity between feature vectors and the full pairwise matrix
// ABOUTME: Zero vectors are treated as similar to nothing, including themselves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::FeatureMatrix;
use rayon::prelude::*;
use tracing::debug;

/// Norms at or below this are treated as zero vectors
const ZERO_NORM_EPSILON: f64 = 1e-12;

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn is_zero_vector(v: &[f64]) -> bool {
    dot(v, v).sqrt() <= ZERO_NORM_EPSILON
}

/// Cosine similarity of two vectors, clamped to [-1, 1]
///
/// Returns 0 when either vector has zero magnitude.
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = dot(a, a).sqrt();
    let norm_b = dot(b, b).sqrt();
    if norm_a <= ZERO_NORM_EPSILON || norm_b <= ZERO_NORM_EPSILON {
        return 0.0;
    }
    (dot(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Square matrix of pairwise cosine similarities, row-aligned with the dataset
///
/// Entry `(i, j)` equals entry `(j, i)` exactly. The diagonal is 1 for every
/// non-zero vector and 0 for zero vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute all pairwise similarities between the rows of `features`
    ///
    /// O(n²·d) time and O(n²) memory. Rows are filled in parallel; each
    /// off-diagonal entry is [`cosine_similarity`] of the two rows, whose
    /// arithmetic is symmetric in its arguments.
    #[must_use]
    pub fn from_features(features: &FeatureMatrix) -> Self {
        let size = features.n_rows();
        let non_zero: Vec<bool> = features.rows().map(|row| !is_zero_vector(row)).collect();
        let zero_vectors = non_zero.iter().filter(|v| !**v).count();
        if zero_vectors > 0 {
            debug!(zero_vectors, "feature matrix contains zero vectors");
        }

        let rows: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| {
                (0..size)
                    .map(|j| {
                        if i == j {
                            if non_zero[i] { 1.0 } else { 0.0 }
                        } else {
                            cosine_similarity(features.row(i), features.row(j))
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            size,
            values: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of rows (and columns)
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Similarity between rows `i` and `j`
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Similarities of row `i` against every row
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Whether `(i, j)` and `(j, i)` agree within `tolerance` everywhere
    #[must_use]
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.size).all(|i| {
            (i + 1..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }
}
