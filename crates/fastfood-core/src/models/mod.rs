// ABOUTME: Core data models shared by the loader, ranker, and presentation layer
// ABOUTME: Re-exports menu item and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Menu item rows, nutrient columns, and recommendation results
pub mod menu_item;

pub use menu_item::{MenuItem, NutrientColumn, NutritionFacts, Recommendation};
