// ABOUTME: Integration tests for dataset loading, imputation, and feature scaling
// ABOUTME: Exercises the loader through real CSV files written to temp storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{csv_document, csv_header, feature_row, init_test_logging, menu_row, sample_menu_csv, write_csv};
use fastfood_recommender::config::ProcessorConfig;
use fastfood_recommender::errors::{AppError, ErrorCode, RecommenderError};
use fastfood_recommender::models::NutrientColumn;
use fastfood_recommender::DataProcessor;

fn load(contents: &str) -> Result<DataProcessor, RecommenderError> {
    init_test_logging();
    let file = write_csv(contents);
    let mut processor = DataProcessor::new(ProcessorConfig::default()).unwrap();
    processor.load(file.path())?;
    Ok(processor)
}

fn reason(error: &RecommenderError) -> &str {
    match error {
        RecommenderError::DataLoad { reason, .. } => reason,
        other => panic!("expected DataLoad, got {other:?}"),
    }
}

#[test]
fn test_load_sample_menu() {
    let processor = load(&sample_menu_csv()).unwrap();
    assert_eq!(processor.len(), 8);
    assert_eq!(processor.items()[0].item, "Big Mac");
    assert_eq!(processor.items()[0].restaurant, "Mcdonalds");
    assert!((processor.items()[0].calories() - 540.0).abs() < f64::EPSILON);
}

#[test]
fn test_not_available_is_imputed_with_median() {
    let doc = csv_document(&[
        menu_row("R", "one", &[(NutrientColumn::Calories, "100")]),
        menu_row("R", "two", &[(NutrientColumn::Calories, "N/A")]),
        menu_row("R", "three", &[(NutrientColumn::Calories, "300")]),
        menu_row("R", "four", &[(NutrientColumn::Calories, "500")]),
    ]);
    let processor = load(&doc).unwrap();
    let two = processor.item_details("two").unwrap();
    assert!((two.calories() - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_and_garbage_cells_are_imputed() {
    let doc = csv_document(&[
        menu_row("R", "one", &[(NutrientColumn::Protein, "10")]),
        menu_row("R", "two", &[(NutrientColumn::Protein, "")]),
        menu_row("R", "three", &[(NutrientColumn::Protein, "lots")]),
        menu_row("R", "four", &[(NutrientColumn::Protein, "20")]),
    ]);
    let processor = load(&doc).unwrap();
    for name in ["two", "three"] {
        let item = processor.item_details(name).unwrap();
        assert!((item.protein() - 15.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_headers_are_case_and_whitespace_insensitive() {
    let mut doc = String::from(" Restaurant , ITEM ");
    for column in NutrientColumn::ALL {
        doc.push_str(&format!(", {} ", column.column_name().to_uppercase()));
    }
    doc.push('\n');
    doc.push_str(&menu_row("Diner", "Pancakes", &[(NutrientColumn::Calories, "450")]));
    doc.push('\n');

    let processor = load(&doc).unwrap();
    let pancakes = processor.item_details("Pancakes").unwrap();
    assert_eq!(pancakes.restaurant, "Diner");
    assert!((pancakes.calories() - 450.0).abs() < f64::EPSILON);
}

#[test]
fn test_extra_columns_are_ignored() {
    let doc = format!(
        "{},salad\n{},yes\n",
        csv_header(),
        menu_row("Diner", "Toast", &[])
    );
    let processor = load(&doc).unwrap();
    assert_eq!(processor.len(), 1);
    assert_eq!(processor.items()[0].item, "Toast");
}

#[test]
fn test_missing_required_column_fails() {
    let doc = "item,restaurant,calories\nBurger,Diner,500\n";
    let err = load(doc).unwrap_err();
    assert!(reason(&err).contains("cal_fat"));
}

#[test]
fn test_missing_item_column_fails() {
    let doc = csv_document(&[menu_row("Diner", "Toast", &[])]).replacen("item", "name", 1);
    let err = load(&doc).unwrap_err();
    assert!(reason(&err).contains("'item'"));
}

#[test]
fn test_column_without_valid_values_fails() {
    let doc = csv_document(&[
        menu_row("R", "one", &[(NutrientColumn::Fiber, "N/A")]),
        menu_row("R", "two", &[(NutrientColumn::Fiber, "")]),
    ]);
    let err = load(&doc).unwrap_err();
    assert!(reason(&err).contains("fiber"));
}

#[test]
fn test_header_only_file_fails() {
    let err = load(&csv_document(&[])).unwrap_err();
    assert!(reason(&err).contains("no rows"));
}

#[test]
fn test_unreadable_file_fails() {
    let mut processor = DataProcessor::new(ProcessorConfig::default()).unwrap();
    let err = processor
        .load("/definitely/not/here/fastfood.csv")
        .unwrap_err();
    assert!(reason(&err).contains("cannot open file"));

    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::DataLoadFailed);
}

#[test]
fn test_item_details_first_match_and_not_found() {
    let doc = csv_document(&[
        menu_row("First", "Fries", &[(NutrientColumn::Calories, "300")]),
        menu_row("Second", "Fries", &[(NutrientColumn::Calories, "400")]),
    ]);
    let processor = load(&doc).unwrap();

    let fries = processor.item_details("Fries").unwrap();
    assert_eq!(fries.restaurant, "First");

    assert!(matches!(
        processor.item_details("fries"),
        Err(RecommenderError::ItemNotFound { .. })
    ));
    assert!(matches!(
        processor.item_details("NonexistentItem"),
        Err(RecommenderError::ItemNotFound { .. })
    ));
}

#[test]
fn test_features_are_scaled_to_unit_range() {
    let processor = load(&sample_menu_csv()).unwrap();
    let features = processor.features().unwrap();

    assert_eq!(features.shape(), (8, 8));
    for row in features.rows() {
        assert!(row.iter().all(|v| (0.0..=1.0).contains(v)), "{row:?}");
    }
    // lowest calorie item is the grilled nuggets, highest the footlong
    assert!(features.get(5, 0).abs() < 1e-12);
    assert!((features.get(3, 0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_scaler_is_fit_once() {
    let processor = load(&sample_menu_csv()).unwrap();
    assert!(processor.scaler().is_none());

    let first = processor.features().unwrap();
    let bounds = processor.scaler().unwrap().clone();
    let second = processor.features().unwrap();

    assert_eq!(first, second);
    assert_eq!(processor.scaler().unwrap(), &bounds);
    assert!((bounds.data_min().unwrap()[0] - 140.0).abs() < f64::EPSILON);
    assert!((bounds.data_max().unwrap()[0] - 640.0).abs() < f64::EPSILON);
}

#[test]
fn test_reload_resets_scaler_and_is_deterministic() {
    init_test_logging();
    let file = write_csv(&sample_menu_csv());
    let mut processor = DataProcessor::new(ProcessorConfig::default()).unwrap();

    processor.load(file.path()).unwrap();
    let items_before = processor.items().to_vec();
    let features_before = processor.features().unwrap();

    processor.load(file.path()).unwrap();
    assert!(processor.scaler().is_none());
    assert_eq!(processor.items(), items_before.as_slice());
    assert_eq!(processor.features().unwrap(), features_before);
}

#[test]
fn test_restaurant_listing_and_filtering() {
    let processor = load(&sample_menu_csv()).unwrap();
    assert_eq!(
        processor.restaurants(),
        vec!["Chick Fil-A", "Mcdonalds", "Subway", "Taco Bell"]
    );

    let subway = processor.items_for_restaurants(&["Subway".to_owned()]);
    assert_eq!(subway.len(), 2);
    assert!(subway.iter().all(|item| item.restaurant == "Subway"));

    assert_eq!(processor.items_for_restaurants(&[]).len(), 8);
}

#[test]
fn test_custom_feature_columns() {
    init_test_logging();
    let config = ProcessorConfig {
        feature_columns: vec![NutrientColumn::Calories, NutrientColumn::Protein],
        ..ProcessorConfig::default()
    };
    let mut processor = DataProcessor::new(config).unwrap();
    let doc = csv_document(&[
        feature_row("R", "a", "100", "1", "10", "1", "1", "1", "1", "1"),
        feature_row("R", "b", "200", "1", "20", "1", "1", "1", "1", "1"),
    ]);
    processor.load_from_reader(doc.as_bytes(), "inline").unwrap();
    assert_eq!(processor.features().unwrap().shape(), (2, 2));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ProcessorConfig {
        feature_columns: Vec::new(),
        ..ProcessorConfig::default()
    };
    assert!(DataProcessor::new(config).is_err());
}

#[test]
fn test_negative_values_are_imputed() {
    let doc = csv_document(&[
        menu_row("R", "one", &[(NutrientColumn::Sodium, "100")]),
        menu_row("R", "two", &[(NutrientColumn::Sodium, "-250")]),
        menu_row("R", "three", &[(NutrientColumn::Sodium, "300")]),
    ]);
    let processor = load(&doc).unwrap();
    let two = processor.item_details("two").unwrap();
    assert!((two.nutrition.get(NutrientColumn::Sodium) - 200.0).abs() < f64::EPSILON);
    assert!(processor
        .items()
        .iter()
        .all(|item| NutrientColumn::ALL.iter().all(|c| item.nutrition.get(*c) >= 0.0)));
}

#[test]
fn test_huge_values_keep_features_finite() {
    let near_max = format!("{:e}", f64::MAX * 0.9);
    let max = format!("{:e}", f64::MAX);
    let doc = csv_document(&[
        menu_row("R", "one", &[(NutrientColumn::Calories, &near_max)]),
        menu_row("R", "two", &[(NutrientColumn::Calories, &max)]),
        menu_row("R", "three", &[(NutrientColumn::Calories, "N/A")]),
    ]);
    let processor = load(&doc).unwrap();

    let imputed = processor.item_details("three").unwrap().calories();
    assert!(imputed.is_finite());

    let features = processor.features().unwrap();
    for row in features.rows() {
        assert!(row.iter().all(|v| v.is_finite() && (0.0..=1.0).contains(v)), "{row:?}");
    }
}
