// ABOUTME: Top-N ranking of menu items by similarity to a query item
// ABOUTME: Stable descending order, explicit self-exclusion, and caller-supplied filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Ranking over one row of the similarity matrix.
//!
//! The query item is removed by index rather than by assuming it sorts first:
//! a zero feature vector has self-similarity 0 and would otherwise leak into
//! its own results.

use serde::{Deserialize, Serialize};

/// A dataset row chosen by [`rank_similar`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// Row index in the dataset
    pub index: usize,
    /// Similarity to the query row
    pub score: f64,
}

/// Pick up to `top_n` rows most similar to `query_index`
///
/// `similarities` is the query's row of the similarity matrix. Candidates are
/// visited in descending score order, ties keeping dataset order, and kept
/// while `keep(index)` holds. Fewer than `top_n` results is not an error.
pub fn rank_similar<F>(
    similarities: &[f64],
    query_index: usize,
    top_n: usize,
    mut keep: F,
) -> Vec<RankedCandidate>
where
    F: FnMut(usize) -> bool,
{
    if top_n == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..similarities.len())
        .filter(|&index| index != query_index)
        .collect();
    // sort_by is stable, so equal scores stay in dataset order
    order.sort_by(|&a, &b| similarities[b].total_cmp(&similarities[a]));

    order
        .into_iter()
        .filter(|&index| keep(index))
        .take(top_n)
        .map(|index| RankedCandidate {
            index,
            score: similarities[index],
        })
        .collect()
}
