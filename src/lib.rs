// ABOUTME: Main library entry point for the fast-food menu recommender
// ABOUTME: Loads nutrition data, builds item similarity, and serves top-N recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Fastfood Recommender
//!
//! Recommends fast-food menu items that are nutritionally similar to a chosen
//! item, optionally restricted to healthy options.
//!
//! ## Pipeline
//!
//! 1. [`data_processor::DataProcessor`] reads the nutrition CSV, coerces the
//!    14 nutrition columns to numbers, and fills missing cells with column
//!    medians.
//! 2. Eight of those columns are min-max scaled to `[0, 1]` with a scaler
//!    that is fit once per loaded dataset.
//! 3. [`recommender::Recommender`] builds the pairwise cosine similarity
//!    matrix and ranks rows against it.
//! 4. [`session::RecommenderSession`] bundles both behind the small query
//!    surface used by the `fastfood-cli` binary.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fastfood_recommender::config::{ProcessorConfig, RecommendationConfig};
//! use fastfood_recommender::errors::AppResult;
//! use fastfood_recommender::session::RecommenderSession;
//!
//! fn main() -> AppResult<()> {
//!     let session = RecommenderSession::open(
//!         "data/fastfood.csv",
//!         ProcessorConfig::default(),
//!         RecommendationConfig::default(),
//!     )?;
//!
//!     for rec in session.get_recommendations("Big Mac", true, 5)? {
//!         println!("{} ({}) {:.2}", rec.item, rec.restaurant, rec.similarity_score);
//!     }
//!     Ok(())
//! }
//! ```

/// Runtime and algorithm configuration
pub mod config;

/// Dataset loading, cleaning, and feature scaling
pub mod data_processor;

/// Structured logging setup
pub mod logging;

/// Similarity matrix construction and top-N ranking
pub mod recommender;

/// Query session used by presentation layers
pub mod session;

/// Error types shared across the workspace
pub mod errors {
    pub use fastfood_core::errors::{
        AppError, AppResult, ErrorCode, ErrorResponse, RecommenderError,
    };
}

/// Menu item and recommendation models
pub mod models {
    pub use fastfood_core::models::{MenuItem, NutrientColumn, NutritionFacts, Recommendation};
}

pub use data_processor::DataProcessor;
pub use recommender::Recommender;
pub use session::RecommenderSession;
