// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Output formatting helpers for fastfood-cli
// ABOUTME: Provides consistent display functions for items, recommendations, and errors

use fastfood_recommender::errors::{AppError, AppResult, ErrorResponse};
use fastfood_recommender::models::{MenuItem, Recommendation};
use serde::Serialize;
use std::io::{self, Write};

/// Write any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> AppResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Display the restaurant list
pub fn display_restaurants(out: &mut impl Write, restaurants: &[String]) -> io::Result<()> {
    writeln!(out, "Restaurants ({}):", restaurants.len())?;
    for restaurant in restaurants {
        writeln!(out, "   {restaurant}")?;
    }
    Ok(())
}

/// Display items as "name (restaurant)" lines
pub fn display_items(out: &mut impl Write, items: &[&MenuItem]) -> io::Result<()> {
    writeln!(out, "Menu Items ({}):", items.len())?;
    for item in items {
        writeln!(out, "   {} ({})", item.item, item.restaurant)?;
    }
    Ok(())
}

/// Display the nutrition summary of one item
pub fn display_item_details(out: &mut impl Write, item: &MenuItem) -> io::Result<()> {
    writeln!(out, "\n{}", item.item)?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "   Restaurant: {}", item.restaurant)?;
    writeln!(out, "   Calories: {}", item.calories())?;
    writeln!(out, "   Protein: {}g", item.protein())?;
    writeln!(out, "   Total Fat: {}g", item.nutrition.total_fat())
}

/// Display numbered recommendation cards
pub fn display_recommendations(
    out: &mut impl Write,
    item_name: &str,
    recommendations: &[Recommendation],
) -> io::Result<()> {
    if recommendations.is_empty() {
        return writeln!(out, "No similar items found based on your criteria.");
    }

    writeln!(out, "\nItems similar to {item_name}")?;
    writeln!(out, "{}", "=".repeat(50))?;
    for (rank, rec) in recommendations.iter().enumerate() {
        writeln!(out, "\n{}. {}", rank + 1, rec.item)?;
        writeln!(out, "   {}", rec.restaurant)?;
        writeln!(out, "   {} calories | {}g protein", rec.calories, rec.protein)?;
        writeln!(out, "   Match Score: {:.2}", rec.similarity_score)?;
    }
    Ok(())
}

/// Report an error for the user: JSON on `out` when requested, text on `err`
pub fn report_error(out: &mut impl Write, err: &mut impl Write, error: &AppError, json: bool) {
    let written = if json {
        serde_json::to_string_pretty(&ErrorResponse::from(error))
            .map_err(io::Error::other)
            .and_then(|body| writeln!(out, "{body}"))
    } else {
        writeln!(err, "Error: {error}")
    };
    // nowhere left to report to
    let _ = written;
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastfood_recommender::models::{NutrientColumn, NutritionFacts};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn rec(item: &str, calories: f64, protein: f64, score: f64) -> Recommendation {
        Recommendation {
            item: item.to_owned(),
            restaurant: "Chick Fil-A".to_owned(),
            calories,
            protein,
            similarity_score: score,
        }
    }

    #[test]
    fn test_recommendation_cards() {
        let recs = [
            rec("8 piece Grilled Nuggets", 140.0, 25.0, 0.9876),
            rec("Chicken Sandwich", 440.0, 28.0, 0.5),
        ];
        let text = render(|out| display_recommendations(out, "Big Mac", &recs));

        assert!(text.contains("Items similar to Big Mac"));
        assert!(text.contains("1. 8 piece Grilled Nuggets"));
        assert!(text.contains("2. Chicken Sandwich"));
        assert!(text.contains("   Chick Fil-A\n"));
        assert!(text.contains("140 calories | 25g protein"));
        assert!(text.contains("Match Score: 0.99"));
        assert!(text.contains("Match Score: 0.50"));
    }

    #[test]
    fn test_empty_recommendations_message() {
        let text = render(|out| display_recommendations(out, "Big Mac", &[]));
        assert_eq!(text, "No similar items found based on your criteria.\n");
    }

    #[test]
    fn test_item_details_lines() {
        let facts = NutritionFacts::default()
            .with(NutrientColumn::Calories, 540.0)
            .with(NutrientColumn::Protein, 25.0)
            .with(NutrientColumn::TotalFat, 28.5);
        let item = MenuItem::new("Big Mac", "Mcdonalds", facts);
        let text = render(|out| display_item_details(out, &item));

        assert!(text.contains("Big Mac\n"));
        assert!(text.contains("Restaurant: Mcdonalds"));
        assert!(text.contains("Calories: 540\n"));
        assert!(text.contains("Protein: 25g"));
        assert!(text.contains("Total Fat: 28.5g"));
    }

    #[test]
    fn test_restaurant_and_item_lists() {
        let text = render(|out| {
            display_restaurants(out, &["Mcdonalds".to_owned(), "Subway".to_owned()])
        });
        assert_eq!(text, "Restaurants (2):\n   Mcdonalds\n   Subway\n");

        let item = MenuItem::new("Crunchy Taco", "Taco Bell", NutritionFacts::default());
        let text = render(|out| display_items(out, &[&item]));
        assert_eq!(text, "Menu Items (1):\n   Crunchy Taco (Taco Bell)\n");
    }

    #[test]
    fn test_report_error_json_goes_to_stdout() {
        let error = AppError::not_found("Item 'Nope'");
        let (mut out, mut err) = (Vec::new(), Vec::new());
        report_error(&mut out, &mut err, &error, true);

        assert!(err.is_empty());
        let body: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
        assert_eq!(body["error"]["message"], "Item 'Nope' not found");
    }

    #[test]
    fn test_report_error_text_goes_to_stderr() {
        let error = AppError::data_load("missing column 'protein'");
        let (mut out, mut err) = (Vec::new(), Vec::new());
        report_error(&mut out, &mut err, &error, false);

        assert!(out.is_empty());
        let text = String::from_utf8(err).unwrap();
        assert!(text.starts_with("Error: The nutrition dataset could not be loaded"));
    }

    #[test]
    fn test_print_json_array() {
        let mut out = Vec::new();
        print_json(&mut out, &["Subway"]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, serde_json::json!(["Subway"]));
    }
}
