// ABOUTME: Nutrition similarity engine extracted from the main crate
// ABOUTME: Scaling, similarity, ranking, and their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Fastfood Intelligence
//!
//! Numeric core of the recommender: menu items are reduced to feature vectors,
//! scaled column-wise to a common range, compared pairwise with cosine
//! similarity, and ranked for top-N queries.

/// Feature matrices, min-max scaling, and cosine similarity
pub mod algorithms;

/// Loader and ranker configuration
pub mod config;

/// Top-N ranking over a row of the similarity matrix
pub mod recommendation_engine;

pub use algorithms::{AlgorithmError, FeatureMatrix, MinMaxScaler, SimilarityMatrix};
pub use config::{ConfigError, HealthyThresholds, ProcessorConfig, RecommendationConfig};
pub use recommendation_engine::{rank_similar, RankedCandidate};
