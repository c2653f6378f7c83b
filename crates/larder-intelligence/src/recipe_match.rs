// ABOUTME: Ingredient-to-food text matching for recipe analysis
// ABOUTME: Case-folded substring matching over names and nutritional properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use larder_core::models::{Food, FoodCatalog, Recipe};
use std::collections::HashSet;

/// Resolve which catalog foods a recipe contains, by matching ingredient
/// lines against food names and properties.
///
/// A food matches an ingredient when either name contains the other
/// (case-folded), or one of the food's property strings contains the
/// ingredient name. Results are deduplicated by id in first-match order.
#[must_use]
pub fn foods_in_recipe<'a>(recipe: &Recipe, catalog: &'a FoodCatalog) -> Vec<&'a Food> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut found = Vec::new();

    for ingredient in &recipe.ingredients {
        let needle = ingredient.name.to_lowercase();
        for food in &catalog.foods {
            if seen.contains(food.id.as_str()) {
                continue;
            }
            if ingredient_matches(&needle, food) {
                seen.insert(food.id.as_str());
                found.push(food);
            }
        }
    }

    found
}

fn ingredient_matches(ingredient: &str, food: &Food) -> bool {
    let food_name = food.normalized_name();
    ingredient.contains(&food_name)
        || food_name.contains(ingredient)
        || food
            .properties
            .iter()
            .any(|p| p.to_lowercase().contains(ingredient))
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::models::Ingredient;

    fn food(id: &str, name: &str, properties: &[&str]) -> Food {
        Food {
            id: id.into(),
            name: name.into(),
            properties: properties.iter().map(|p| (*p).to_owned()).collect(),
            ..Food::default()
        }
    }

    fn recipe(ingredients: &[&str]) -> Recipe {
        Recipe {
            id: "r1".into(),
            name: "Test Bowl".into(),
            ingredients: ingredients
                .iter()
                .map(|name| Ingredient {
                    name: (*name).to_owned(),
                    amount: 1.0,
                    unit: "cup".into(),
                    notes: None,
                })
                .collect(),
            ..Recipe::default()
        }
    }

    #[test]
    fn matches_ingredient_containing_food_name() {
        let catalog = FoodCatalog::from_foods(vec![food("f1", "Kale", &[])]);
        let found = foods_in_recipe(&recipe(&["chopped kale leaves"]), &catalog);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "f1");
    }

    #[test]
    fn matches_food_name_containing_ingredient() {
        let catalog = FoodCatalog::from_foods(vec![food("f1", "Steel Cut Oats", &[])]);
        let found = foods_in_recipe(&recipe(&["oats"]), &catalog);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn matches_through_properties() {
        let catalog =
            FoodCatalog::from_foods(vec![food("f1", "Flaxseeds", &["ground flax meal"])]);
        let found = foods_in_recipe(&recipe(&["flax meal"]), &catalog);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn deduplicates_across_ingredients() {
        let catalog = FoodCatalog::from_foods(vec![food("f1", "Kale", &[])]);
        let found = foods_in_recipe(&recipe(&["kale", "baby kale"]), &catalog);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn unmatched_ingredients_yield_nothing() {
        let catalog = FoodCatalog::from_foods(vec![food("f1", "Kale", &[])]);
        let found = foods_in_recipe(&recipe(&["chicken"]), &catalog);
        assert!(found.is_empty());
    }
}
