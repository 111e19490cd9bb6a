// ABOUTME: Query session bundling a loaded dataset with its similarity ranker
// ABOUTME: Narrow request/response surface used by presentation layers such as the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recommender Session
//!
//! A session loads the dataset once, builds the similarity matrix once, and
//! then serves queries. [`RecommenderSession::reload`] builds a complete
//! replacement before swapping it in, so a failed reload leaves the running
//! session untouched.

use crate::data_processor::DataProcessor;
use crate::recommender::Recommender;
use fastfood_core::errors::{AppResult, RecommenderError};
use fastfood_core::models::{MenuItem, Recommendation};
use fastfood_intelligence::config::{ProcessorConfig, RecommendationConfig};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Loaded dataset plus a ready-to-query ranker
#[derive(Debug)]
pub struct RecommenderSession {
    processor: Arc<DataProcessor>,
    recommender: Recommender,
}

impl RecommenderSession {
    /// Load `path`, build the similarity matrix, and return a ready session
    ///
    /// # Errors
    ///
    /// Returns an error if either configuration is invalid, the dataset fails
    /// to load, or the matrix cannot be built
    pub fn open(
        path: impl AsRef<Path>,
        processor_config: ProcessorConfig,
        recommendation_config: RecommendationConfig,
    ) -> AppResult<Self> {
        recommendation_config.validate()?;
        let mut processor = DataProcessor::new(processor_config)?;
        processor.load(path.as_ref())?;

        let processor = Arc::new(processor);
        let mut recommender = Recommender::new(Arc::clone(&processor), recommendation_config);
        recommender.build_similarity_matrix()?;

        info!(items = processor.len(), "Recommender session ready");
        Ok(Self {
            processor,
            recommender,
        })
    }

    /// Full record for the first item named exactly `item_name`
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::ItemNotFound`] if no item matches
    pub fn select_item(&self, item_name: &str) -> Result<&MenuItem, RecommenderError> {
        self.processor.item_details(item_name)
    }

    /// Distinct restaurant names, sorted
    #[must_use]
    pub fn list_restaurants(&self) -> Vec<String> {
        self.processor.restaurants()
    }

    /// Items served by any of `restaurants`; all items when empty
    #[must_use]
    pub fn list_items(&self, restaurants: &[String]) -> Vec<&MenuItem> {
        self.processor.items_for_restaurants(restaurants)
    }

    /// See [`Recommender::get_recommendations`]
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::ItemNotFound`] for an unknown item
    pub fn get_recommendations(
        &self,
        item_name: &str,
        healthy_only: bool,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommenderError> {
        self.recommender
            .get_recommendations(item_name, healthy_only, top_n)
            .inspect_err(|e| log_query_error(item_name, e))
    }

    /// See [`Recommender::recommend`]
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::ItemNotFound`] for an unknown item
    pub fn recommend(
        &self,
        item_name: &str,
        healthy_only: bool,
    ) -> Result<Vec<Recommendation>, RecommenderError> {
        self.recommender
            .recommend(item_name, healthy_only)
            .inspect_err(|e| log_query_error(item_name, e))
    }

    /// Replace the dataset and matrix with a fresh load of `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the new dataset fails to load; the current state
    /// is kept in that case
    pub fn reload(&mut self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let replacement = Self::open(
            path,
            self.processor.config().clone(),
            self.recommender.config().clone(),
        )
        .inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "Reload failed, keeping current dataset");
        })?;

        *self = replacement;
        info!(path = %path.display(), "Reloaded dataset");
        Ok(())
    }

    /// Underlying processor
    #[must_use]
    pub fn processor(&self) -> &DataProcessor {
        &self.processor
    }

    /// Underlying ranker
    #[must_use]
    pub const fn recommender(&self) -> &Recommender {
        &self.recommender
    }
}

/// Unknown items are routine; anything else means the session is unusable
fn log_query_error(item_name: &str, error: &RecommenderError) {
    if error.is_recoverable() {
        debug!(item = %item_name, error = %error, "Recommendation query rejected");
    } else {
        warn!(item = %item_name, error = %error, "Recommendation query failed");
    }
}
