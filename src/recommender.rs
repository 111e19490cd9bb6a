// ABOUTME: Similarity ranker answering "items like this one" queries
// ABOUTME: Builds the cosine similarity matrix once and ranks rows against it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::data_processor::DataProcessor;
use fastfood_core::errors::RecommenderError;
use fastfood_core::models::Recommendation;
use fastfood_intelligence::algorithms::SimilarityMatrix;
use fastfood_intelligence::config::RecommendationConfig;
use fastfood_intelligence::recommendation_engine::rank_similar;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Ranks menu items by nutritional similarity
///
/// Call [`Recommender::build_similarity_matrix`] once before querying.
#[derive(Debug)]
pub struct Recommender {
    processor: Arc<DataProcessor>,
    config: RecommendationConfig,
    similarity_matrix: Option<SimilarityMatrix>,
}

impl Recommender {
    /// Create a ranker over a loaded processor
    #[must_use]
    pub const fn new(processor: Arc<DataProcessor>, config: RecommendationConfig) -> Self {
        Self {
            processor,
            config,
            similarity_matrix: None,
        }
    }

    /// Compute pairwise cosine similarity between all items
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::DataLoad`] if the processor has no dataset
    pub fn build_similarity_matrix(&mut self) -> Result<&SimilarityMatrix, RecommenderError> {
        let started = Instant::now();
        let features = self.processor.features()?;
        let matrix = SimilarityMatrix::from_features(&features);
        info!(
            items = matrix.size(),
            elapsed_ms = started.elapsed().as_millis(),
            "Built similarity matrix"
        );
        Ok(&*self.similarity_matrix.insert(matrix))
    }

    /// The matrix built by [`Self::build_similarity_matrix`], if any
    #[must_use]
    pub const fn similarity_matrix(&self) -> Option<&SimilarityMatrix> {
        self.similarity_matrix.as_ref()
    }

    /// Top-N items most similar to `item_name`, most similar first
    ///
    /// With `healthy_only`, only items passing the healthy thresholds are
    /// returned, which may leave fewer than `top_n` results. The query item is
    /// never part of its own results.
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::ItemNotFound`] for an unknown item and
    /// [`RecommenderError::MatrixNotBuilt`] before the matrix is built
    pub fn get_recommendations(
        &self,
        item_name: &str,
        healthy_only: bool,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommenderError> {
        let query_index = self.processor.item_index(item_name)?;
        let matrix = self
            .similarity_matrix
            .as_ref()
            .ok_or(RecommenderError::MatrixNotBuilt)?;

        let items = self.processor.items();
        let healthy = &self.config.healthy;
        let ranked = rank_similar(matrix.row(query_index), query_index, top_n, |index| {
            !healthy_only || healthy.is_healthy(&items[index])
        });
        debug!(
            item = %item_name,
            healthy_only,
            top_n,
            returned = ranked.len(),
            "Ranked similar items"
        );

        Ok(ranked
            .into_iter()
            .map(|candidate| Recommendation::from_item(&items[candidate.index], candidate.score))
            .collect())
    }

    /// [`Self::get_recommendations`] with the configured default count
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_recommendations`]
    pub fn recommend(
        &self,
        item_name: &str,
        healthy_only: bool,
    ) -> Result<Vec<Recommendation>, RecommenderError> {
        self.get_recommendations(item_name, healthy_only, self.config.default_top_n)
    }

    /// Processor this ranker reads from
    #[must_use]
    pub fn processor(&self) -> &DataProcessor {
        &self.processor
    }

    /// Ranker configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationConfig {
        &self.config
    }
}
