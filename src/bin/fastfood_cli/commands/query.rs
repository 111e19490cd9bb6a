// ABOUTME: Query commands for fastfood-cli
// ABOUTME: Handles restaurants, items, details, and recommend against an open session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use fastfood_recommender::errors::{AppError, AppResult};
use fastfood_recommender::session::RecommenderSession;
use std::io;
use tracing::info;

use crate::helpers::display::{
    display_item_details, display_items, display_recommendations, display_restaurants, print_json,
};

/// List distinct restaurants
pub fn restaurants(session: &RecommenderSession, json: bool) -> AppResult<()> {
    let restaurants = session.list_restaurants();
    let mut out = io::stdout().lock();
    if json {
        return print_json(&mut out, &restaurants);
    }
    display_restaurants(&mut out, &restaurants)?;
    Ok(())
}

/// List items, optionally restricted to some restaurants
pub fn items(session: &RecommenderSession, restaurants: &[String], json: bool) -> AppResult<()> {
    let items = session.list_items(restaurants);
    info!(count = items.len(), "Listing items");
    let mut out = io::stdout().lock();
    if json {
        return print_json(&mut out, &items);
    }
    display_items(&mut out, &items)?;
    Ok(())
}

/// Show one item's nutrition details
pub fn details(session: &RecommenderSession, item_name: &str, json: bool) -> AppResult<()> {
    let item = session.select_item(item_name)?;
    let mut out = io::stdout().lock();
    if json {
        return print_json(&mut out, item);
    }
    display_item_details(&mut out, item)?;
    Ok(())
}

/// Print items similar to `item_name`
///
/// An explicit `--top 0` is rejected as invalid input.
pub fn recommend(
    session: &RecommenderSession,
    item_name: &str,
    healthy_only: bool,
    top_n: Option<usize>,
    json: bool,
) -> AppResult<()> {
    let recommendations = match top_n {
        Some(0) => return Err(AppError::invalid_input("--top must be at least 1")),
        Some(top_n) => session.get_recommendations(item_name, healthy_only, top_n)?,
        None => session.recommend(item_name, healthy_only)?,
    };
    info!(
        item = %item_name,
        healthy_only,
        returned = recommendations.len(),
        "Generated recommendations"
    );

    let mut out = io::stdout().lock();
    if json {
        return print_json(&mut out, &recommendations);
    }
    display_recommendations(&mut out, item_name, &recommendations)?;
    Ok(())
}
