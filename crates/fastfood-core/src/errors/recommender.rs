// ABOUTME: Domain error types for dataset loading and similarity ranking
// ABOUTME: Converts into AppError so presentation layers share one error surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by the loader and ranker
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecommenderError {
    /// Dataset is missing, unreadable, or lacks required data
    #[error("failed to load dataset from {source_name}: {reason}")]
    DataLoad {
        /// Path or label of the dataset source
        source_name: String,
        /// What went wrong
        reason: String,
    },

    /// No row has the requested item name
    #[error("item '{item_name}' not found")]
    ItemNotFound {
        /// Name that was looked up
        item_name: String,
    },

    /// A query was issued before the similarity matrix was built
    #[error("similarity matrix has not been built")]
    MatrixNotBuilt,
}

impl RecommenderError {
    /// Create a data load error
    #[must_use]
    pub fn data_load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataLoad {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create an item-not-found error
    #[must_use]
    pub fn item_not_found(item_name: impl Into<String>) -> Self {
        Self::ItemNotFound {
            item_name: item_name.into(),
        }
    }

    /// Error code this error maps to
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::DataLoad { .. } => ErrorCode::DataLoadFailed,
            Self::ItemNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::MatrixNotBuilt => ErrorCode::ResourceUnavailable,
        }
    }

    /// Whether the session can keep serving queries after this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. })
    }
}

impl From<RecommenderError> for AppError {
    fn from(error: RecommenderError) -> Self {
        Self::new(error.error_code(), error.to_string()).with_source(error)
    }
}
