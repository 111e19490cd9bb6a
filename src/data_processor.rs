// ABOUTME: Dataset loader and normalizer for the fast-food nutrition table
// ABOUTME: Reads CSV rows, coerces and imputes nutrition values, and scales features
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Dataset Loader
//!
//! [`DataProcessor`] owns the cleaned item table and the feature scaler fitted
//! on it. Loading is lenient about cell contents and strict about structure:
//!
//! - Header names are trimmed and lower-cased before lookup.
//! - A nutrition cell that does not parse as a finite, non-negative number is
//!   treated as missing and replaced with the median of its column.
//! - A missing required column, an unreadable file, or a column without a
//!   single valid value fails the whole load.

use fastfood_core::constants::columns;
use fastfood_core::errors::RecommenderError;
use fastfood_core::models::{MenuItem, NutrientColumn, NutritionFacts};
use fastfood_intelligence::algorithms::{FeatureMatrix, MinMaxScaler};
use fastfood_intelligence::config::{ConfigError, ProcessorConfig};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Result type for loader operations
pub type LoadResult<T> = Result<T, RecommenderError>;

/// Loads the nutrition dataset and produces scaled feature vectors
#[derive(Debug, Default)]
pub struct DataProcessor {
    config: ProcessorConfig,
    items: Vec<MenuItem>,
    source_name: Option<String>,
    scaler: OnceLock<MinMaxScaler>,
}

impl DataProcessor {
    /// Create an empty processor with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: ProcessorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            items: Vec::new(),
            source_name: None,
            scaler: OnceLock::new(),
        })
    }

    /// Load the dataset from a CSV file, replacing any previous table
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::DataLoad`] if the file cannot be opened or
    /// its contents fail validation
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadResult<&[MenuItem]> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|e| {
            RecommenderError::data_load(&source_name, format!("cannot open file: {e}"))
        })?;
        self.load_from_reader(file, &source_name)
    }

    /// Load the dataset from any CSV byte stream, replacing any previous table
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::DataLoad`] if the stream is not valid CSV,
    /// lacks a required column, or a nutrition column has no valid value
    pub fn load_from_reader<R: Read>(
        &mut self,
        reader: R,
        source_name: &str,
    ) -> LoadResult<&[MenuItem]> {
        let items = parse_dataset(reader, source_name)?;
        info!(
            source = %source_name,
            rows = items.len(),
            "Loaded nutrition dataset"
        );

        self.items = items;
        self.source_name = Some(source_name.to_owned());
        // scaler bounds belong to the previous table
        self.scaler = OnceLock::new();
        Ok(&self.items)
    }

    /// Scaled feature vectors, one row per item in table order
    ///
    /// The scaler is fitted on the first call and reused afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::DataLoad`] if no dataset has been loaded
    pub fn features(&self) -> LoadResult<FeatureMatrix> {
        if self.items.is_empty() {
            return Err(RecommenderError::data_load(
                self.source_label(),
                "no dataset loaded",
            ));
        }

        let columns = &self.config.feature_columns;
        let raw: Vec<f64> = self
            .items
            .iter()
            .flat_map(|item| columns.iter().map(|col| item.nutrition.get(*col)))
            .collect();
        let raw = FeatureMatrix::from_vec(self.items.len(), columns.len(), raw)?;

        let scaler = if let Some(fitted) = self.scaler.get() {
            fitted
        } else {
            let mut fresh = self.config.scaler();
            fresh.fit(&raw)?;
            debug!(
                features = columns.len(),
                rows = raw.n_rows(),
                "Fitted feature scaler"
            );
            self.scaler.get_or_init(|| fresh)
        };

        Ok(scaler.transform(&raw)?)
    }

    /// Fitted scaler, if [`Self::features`] has run since the last load
    #[must_use]
    pub fn scaler(&self) -> Option<&MinMaxScaler> {
        self.scaler.get()
    }

    /// First row whose name matches `item_name` exactly
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::ItemNotFound`] if no row matches
    pub fn item_details(&self, item_name: &str) -> LoadResult<&MenuItem> {
        let index = self.item_index(item_name)?;
        Ok(&self.items[index])
    }

    /// Row index of the first item named `item_name`
    ///
    /// # Errors
    ///
    /// Returns [`RecommenderError::ItemNotFound`] if no row matches
    pub fn item_index(&self, item_name: &str) -> LoadResult<usize> {
        self.items
            .iter()
            .position(|item| item.item == item_name)
            .ok_or_else(|| RecommenderError::item_not_found(item_name))
    }

    /// Distinct restaurant names, sorted
    #[must_use]
    pub fn restaurants(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.restaurant.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Items sold at any of `restaurants`, in table order; all items when empty
    #[must_use]
    pub fn items_for_restaurants(&self, restaurants: &[String]) -> Vec<&MenuItem> {
        if restaurants.is_empty() {
            return self.items.iter().collect();
        }
        let wanted: HashSet<&str> = restaurants.iter().map(String::as_str).collect();
        self.items
            .iter()
            .filter(|item| wanted.contains(item.restaurant.as_str()))
            .collect()
    }

    /// The whole table in row order
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no rows are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Configuration this processor was created with
    #[must_use]
    pub const fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    fn source_label(&self) -> &str {
        self.source_name.as_deref().unwrap_or("<none>")
    }
}

/// Positions of the required columns within a header row
struct ColumnLayout {
    item: usize,
    restaurant: usize,
    nutrients: [usize; NutrientColumn::COUNT],
}

impl ColumnLayout {
    /// Resolve required columns; `Err` carries the first missing name
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, &'static str> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (position, header) in headers.iter().enumerate() {
            positions
                .entry(normalize_header(header))
                .or_insert(position);
        }

        let find = |name: &'static str| positions.get(name).copied().ok_or(name);
        let mut nutrients = [0; NutrientColumn::COUNT];
        for column in NutrientColumn::ALL {
            nutrients[column.index()] = find(column.column_name())?;
        }

        Ok(Self {
            item: find(columns::ITEM)?,
            restaurant: find(columns::RESTAURANT)?,
            nutrients,
        })
    }
}

/// Row as read, before imputation
struct RawRow {
    item: String,
    restaurant: String,
    values: [Option<f64>; NutrientColumn::COUNT],
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Lenient numeric coercion: anything that is not a finite, non-negative
/// number is missing
fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Median of the values, averaging the middle pair for even counts
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    Some(if values.len().is_multiple_of(2) {
        f64::midpoint(values[mid - 1], values[mid])
    } else {
        values[mid]
    })
}

fn parse_dataset<R: Read>(reader: R, source_name: &str) -> LoadResult<Vec<MenuItem>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| {
            RecommenderError::data_load(source_name, format!("failed to read header row: {e}"))
        })?
        .clone();
    let layout = ColumnLayout::from_headers(&headers).map_err(|missing| {
        RecommenderError::data_load(source_name, format!("missing required column '{missing}'"))
    })?;

    let mut rows = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            // header is line 1
            RecommenderError::data_load(
                source_name,
                format!("malformed record at line {}: {e}", offset + 2),
            )
        })?;
        let field = |position: usize| record.get(position).unwrap_or_default();

        let mut values = [None; NutrientColumn::COUNT];
        for column in NutrientColumn::ALL {
            let raw = field(layout.nutrients[column.index()]);
            values[column.index()] = coerce_numeric(raw);
            if values[column.index()].is_none() {
                debug!(
                    line = offset + 2,
                    column = %column,
                    value = raw,
                    "Non-numeric nutrition value treated as missing"
                );
            }
        }

        rows.push(RawRow {
            item: field(layout.item).to_owned(),
            restaurant: field(layout.restaurant).to_owned(),
            values,
        });
    }

    if rows.is_empty() {
        return Err(RecommenderError::data_load(
            source_name,
            "dataset contains no rows",
        ));
    }

    impute_medians(rows, source_name)
}

/// Fill every missing value with its column median
fn impute_medians(rows: Vec<RawRow>, source_name: &str) -> LoadResult<Vec<MenuItem>> {
    let mut medians = [0.0; NutrientColumn::COUNT];
    for column in NutrientColumn::ALL {
        let mut present: Vec<f64> = rows
            .iter()
            .filter_map(|row| row.values[column.index()])
            .collect();
        let missing = rows.len() - present.len();
        medians[column.index()] = median(&mut present).ok_or_else(|| {
            RecommenderError::data_load(
                source_name,
                format!("column '{column}' has no valid numeric values"),
            )
        })?;
        if missing > 0 {
            warn!(
                column = %column,
                missing,
                median = medians[column.index()],
                "Imputed missing nutrition values with column median"
            );
        }
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let mut facts = NutritionFacts::default();
            for column in NutrientColumn::ALL {
                facts.set(
                    column,
                    row.values[column.index()].unwrap_or_else(|| medians[column.index()]),
                );
            }
            MenuItem::new(row.item, row.restaurant, facts)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric("250"), Some(250.0));
        assert_eq!(coerce_numeric(" 12.5 "), Some(12.5));
        assert_eq!(coerce_numeric("N/A"), None);
        assert_eq!(coerce_numeric(""), None);
        assert_eq!(coerce_numeric("NaN"), None);
        assert_eq!(coerce_numeric("inf"), None);
        assert_eq!(coerce_numeric("-40"), None);
        assert_eq!(coerce_numeric("-0"), Some(0.0));
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn test_median_of_huge_pair_stays_finite() {
        let huge = f64::MAX * 0.75;
        let mid = median(&mut [huge, f64::MAX]).unwrap();
        assert!(mid.is_finite());
        assert!(mid > huge);
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Total_Fat "), "total_fat");
        assert_eq!(normalize_header("RESTAURANT"), "restaurant");
    }

    #[test]
    fn test_layout_reports_missing_column() {
        let headers = csv::StringRecord::from(vec!["item", "restaurant", "calories"]);
        let missing = ColumnLayout::from_headers(&headers).err();
        assert_eq!(missing, Some("cal_fat"));
    }

    #[test]
    fn test_layout_first_duplicate_wins() {
        let mut names = vec!["Item", "item", "restaurant"];
        names.extend(NutrientColumn::ALL.iter().map(|c| c.column_name()));
        let headers = csv::StringRecord::from(names);
        let layout = ColumnLayout::from_headers(&headers).unwrap();
        assert_eq!(layout.item, 0);
        assert_eq!(layout.restaurant, 2);
        assert_eq!(layout.nutrients[0], 3);
    }

    #[test]
    fn test_features_require_loaded_dataset() {
        let processor = DataProcessor::default();
        assert!(matches!(
            processor.features(),
            Err(RecommenderError::DataLoad { .. })
        ));
    }
}
