// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup and CSV fixture writers for nutrition datasets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fastfood_recommender`
//!
//! Fixtures are written to temporary CSV files so tests exercise the same
//! file-loading path as the CLI.

use fastfood_recommender::config::{ProcessorConfig, RecommendationConfig};
use fastfood_recommender::models::NutrientColumn;
use fastfood_recommender::session::RecommenderSession;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (set `TEST_LOG=DEBUG` for more)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Header row naming `item`, `restaurant`, and all 14 nutrition columns
pub fn csv_header() -> String {
    let mut header = String::from("restaurant,item");
    for column in NutrientColumn::ALL {
        header.push(',');
        header.push_str(column.column_name());
    }
    header
}

/// One data row; columns not listed in `values` get `"10"`
pub fn menu_row(restaurant: &str, item: &str, values: &[(NutrientColumn, &str)]) -> String {
    let mut row = format!("{restaurant},{item}");
    for column in NutrientColumn::ALL {
        let value = values
            .iter()
            .find(|(c, _)| *c == column)
            .map_or("10", |(_, v)| *v);
        write!(row, ",{value}").unwrap();
    }
    row
}

/// Header plus rows, newline-terminated
pub fn csv_document(rows: &[String]) -> String {
    let mut doc = csv_header();
    doc.push('\n');
    for row in rows {
        doc.push_str(row);
        doc.push('\n');
    }
    doc
}

/// Write `contents` to a temporary `.csv` file kept alive by the handle
pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("fastfood_")
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

/// Row with the eight similarity features set explicitly
#[allow(clippy::too_many_arguments)]
pub fn feature_row(
    restaurant: &str,
    item: &str,
    calories: &str,
    total_fat: &str,
    protein: &str,
    total_carb: &str,
    fiber: &str,
    sugar: &str,
    sodium: &str,
    cholesterol: &str,
) -> String {
    menu_row(
        restaurant,
        item,
        &[
            (NutrientColumn::Calories, calories),
            (NutrientColumn::TotalFat, total_fat),
            (NutrientColumn::Protein, protein),
            (NutrientColumn::TotalCarb, total_carb),
            (NutrientColumn::Fiber, fiber),
            (NutrientColumn::Sugar, sugar),
            (NutrientColumn::Sodium, sodium),
            (NutrientColumn::Cholesterol, cholesterol),
        ],
    )
}

/// A small multi-restaurant menu with realistic values
pub fn sample_menu_csv() -> String {
    csv_document(&[
        feature_row("Mcdonalds", "Big Mac", "540", "28", "25", "46", "3", "9", "950", "80"),
        feature_row(
            "Mcdonalds",
            "Artisan Grilled Chicken Sandwich",
            "380",
            "7",
            "37",
            "44",
            "3",
            "11",
            "1110",
            "85",
        ),
        feature_row("Mcdonalds", "Small French Fries", "230", "11", "3", "29", "3", "0", "130", "0"),
        feature_row(
            "Subway",
            "Footlong Oven Roasted Chicken",
            "640",
            "14",
            "46",
            "86",
            "6",
            "16",
            "1260",
            "90",
        ),
        feature_row("Subway", "6 inch Turkey Breast", "280", "3.5", "18", "46", "5", "7", "760", "25"),
        feature_row("Chick Fil-A", "8 piece Grilled Nuggets", "140", "3.5", "25", "2", "0", "1", "440", "85"),
        feature_row("Chick Fil-A", "Chicken Sandwich", "440", "19", "28", "40", "1", "6", "1350", "65"),
        feature_row("Taco Bell", "Crunchy Taco", "170", "10", "8", "13", "3", "1", "310", "25"),
    ])
}

/// Three items where C is a near-duplicate of A and B is far from both
pub fn abc_menu_csv() -> String {
    csv_document(&[
        feature_row("Diner", "A", "200", "8", "30", "20", "2", "4", "500", "60"),
        feature_row("Diner", "B", "600", "30", "10", "70", "6", "20", "1200", "20"),
        feature_row("Diner", "C", "210", "9", "29", "21", "2", "5", "520", "58"),
    ])
}

/// Open a session over `contents` with default configuration
pub fn open_session(contents: &str) -> (NamedTempFile, RecommenderSession) {
    init_test_logging();
    let file = write_csv(contents);
    let session = RecommenderSession::open(
        file.path(),
        ProcessorConfig::default(),
        RecommendationConfig::default(),
    )
    .expect("open session");
    (file, session)
}
