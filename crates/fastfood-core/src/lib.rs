// ABOUTME: Core types and constants for the fast-food nutrition recommender
// ABOUTME: Foundation crate with error handling, menu item models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Fastfood Core
//!
//! Foundation crate providing shared types and constants for the fast-food
//! nutrition recommender. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `RecommenderError`
//! - **constants**: Column names, healthy-filter thresholds, and defaults
//! - **models**: Menu item rows, nutrient columns, and recommendation results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MenuItem`, `NutrientColumn`, `Recommendation`)
pub mod models;
