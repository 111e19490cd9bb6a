// ABOUTME: Menu item models for the nutrition dataset and recommendation results
// ABOUTME: NutrientColumn, NutritionFacts, MenuItem, and Recommendation definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Numeric nutrition column of the dataset
///
/// The discriminant doubles as the position inside [`NutritionFacts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientColumn {
    /// Energy (kcal)
    Calories = 0,
    /// Calories from fat (kcal)
    CalFat = 1,
    /// Total fat (g)
    TotalFat = 2,
    /// Saturated fat (g)
    SatFat = 3,
    /// Trans fat (g)
    TransFat = 4,
    /// Cholesterol (mg)
    Cholesterol = 5,
    /// Sodium (mg)
    Sodium = 6,
    /// Total carbohydrates (g)
    TotalCarb = 7,
    /// Dietary fiber (g)
    Fiber = 8,
    /// Sugar (g)
    Sugar = 9,
    /// Protein (g)
    Protein = 10,
    /// Vitamin A (% daily value)
    VitA = 11,
    /// Vitamin C (% daily value)
    VitC = 12,
    /// Calcium (% daily value)
    Calcium = 13,
}

impl NutrientColumn {
    /// Number of numeric columns
    pub const COUNT: usize = 14;

    /// Every column, in dataset order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Calories,
        Self::CalFat,
        Self::TotalFat,
        Self::SatFat,
        Self::TransFat,
        Self::Cholesterol,
        Self::Sodium,
        Self::TotalCarb,
        Self::Fiber,
        Self::Sugar,
        Self::Protein,
        Self::VitA,
        Self::VitC,
        Self::Calcium,
    ];

    /// Columns compared when measuring similarity between items
    pub const FEATURES: [Self; 8] = [
        Self::Calories,
        Self::TotalFat,
        Self::Protein,
        Self::TotalCarb,
        Self::Fiber,
        Self::Sugar,
        Self::Sodium,
        Self::Cholesterol,
    ];

    /// Normalized header name of this column
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::CalFat => "cal_fat",
            Self::TotalFat => "total_fat",
            Self::SatFat => "sat_fat",
            Self::TransFat => "trans_fat",
            Self::Cholesterol => "cholesterol",
            Self::Sodium => "sodium",
            Self::TotalCarb => "total_carb",
            Self::Fiber => "fiber",
            Self::Sugar => "sugar",
            Self::Protein => "protein",
            Self::VitA => "vit_a",
            Self::VitC => "vit_c",
            Self::Calcium => "calcium",
        }
    }

    /// Position of this column inside [`NutritionFacts`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NutrientColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Fully populated nutrition values of one menu item
///
/// Serializes as a flat map keyed by column name.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutritionFacts {
    values: [f64; NutrientColumn::COUNT],
}

impl NutritionFacts {
    /// Value of a single column
    #[must_use]
    pub const fn get(&self, column: NutrientColumn) -> f64 {
        self.values[column.index()]
    }

    /// Replace the value of a single column
    pub fn set(&mut self, column: NutrientColumn, value: f64) {
        self.values[column.index()] = value;
    }

    /// Builder-style variant of [`Self::set`]
    #[must_use]
    pub fn with(mut self, column: NutrientColumn, value: f64) -> Self {
        self.values[column.index()] = value;
        self
    }

    /// Energy (kcal)
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.get(NutrientColumn::Calories)
    }

    /// Protein (g)
    #[must_use]
    pub const fn protein(&self) -> f64 {
        self.get(NutrientColumn::Protein)
    }

    /// Total fat (g)
    #[must_use]
    pub const fn total_fat(&self) -> f64 {
        self.get(NutrientColumn::TotalFat)
    }
}

impl Serialize for NutritionFacts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NutrientColumn::COUNT))?;
        for column in NutrientColumn::ALL {
            map.serialize_entry(column.column_name(), &self.get(column))?;
        }
        map.end()
    }
}

/// One row of the nutrition dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    /// Item name, unique within a restaurant but not across the dataset
    pub item: String,
    /// Restaurant the item is sold at
    pub restaurant: String,
    /// Nutrition values, imputed where the source was malformed
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
}

impl MenuItem {
    /// Create a menu item
    #[must_use]
    pub fn new(
        item: impl Into<String>,
        restaurant: impl Into<String>,
        nutrition: NutritionFacts,
    ) -> Self {
        Self {
            item: item.into(),
            restaurant: restaurant.into(),
            nutrition,
        }
    }

    /// Energy (kcal)
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.nutrition.calories()
    }

    /// Protein (g)
    #[must_use]
    pub const fn protein(&self) -> f64 {
        self.nutrition.protein()
    }
}

/// A similar item returned by the ranker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Item name
    pub item: String,
    /// Restaurant the item is sold at
    pub restaurant: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Cosine similarity to the query item, in [-1, 1]
    pub similarity_score: f64,
}

impl Recommendation {
    /// Build a recommendation from a dataset row and its similarity score
    #[must_use]
    pub fn from_item(item: &MenuItem, similarity_score: f64) -> Self {
        Self {
            item: item.item.clone(),
            restaurant: item.restaurant.clone(),
            calories: item.calories(),
            protein: item.protein(),
            similarity_score,
        }
    }
}
