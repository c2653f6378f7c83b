// ABOUTME: Recipe and menu planning models for day and week structures
// ABOUTME: Consumed by the menu analysis engine when scoring planned meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use serde::{Deserialize, Serialize};
use std::fmt;

/// The menu slot a recipe is written for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    /// Breakfast recipes
    Breakfast,
    /// Lunch recipes
    Lunch,
    /// Dinner recipes
    Dinner,
    /// Snack recipes
    Snack,
    /// Dessert recipes
    Dessert,
    /// Beverage recipes
    Beverage,
}

/// One ingredient line in a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Quantity in the given unit
    pub amount: f64,
    /// Measurement unit (cups, tbsp, g, ...)
    pub unit: String,
    /// Optional preparation note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Macronutrient summary for a recipe serving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionInfo {
    /// Calories per serving
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbohydrates: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
    /// Sodium in milligrams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

/// A recipe as stored in the recipe catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique stable identifier
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Number of servings the recipe yields
    #[serde(default)]
    pub servings: u32,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: u32,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: u32,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Step-by-step instructions
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Optional nutrition summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionInfo>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Menu slot this recipe is written for
    #[serde(default)]
    pub category: Option<RecipeCategory>,
}

/// Days of the week for menu planning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in planner order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        };
        f.write_str(name)
    }
}

/// The planned meals for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayMenu {
    /// Which day this menu is for
    pub day: Weekday,
    /// Planned breakfast, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Recipe>,
    /// Planned lunch, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Recipe>,
    /// Planned dinner, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Recipe>,
    /// Planned snacks
    #[serde(default)]
    pub snacks: Vec<Recipe>,
}

impl DayMenu {
    /// An empty menu for the given day.
    #[must_use]
    pub const fn empty(day: Weekday) -> Self {
        Self {
            day,
            breakfast: None,
            lunch: None,
            dinner: None,
            snacks: Vec::new(),
        }
    }

    /// All recipes planned for the day, in meal order.
    #[must_use]
    pub fn recipes(&self) -> Vec<&Recipe> {
        let mut all = Vec::new();
        all.extend(self.breakfast.as_ref());
        all.extend(self.lunch.as_ref());
        all.extend(self.dinner.as_ref());
        all.extend(self.snacks.iter());
        all
    }
}

/// A week of planned menus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMenu {
    /// Stable identifier, e.g. `week-3-2025`
    pub id: String,
    /// Display name
    pub name: String,
    /// ISO week number
    pub week: u32,
    /// Calendar year
    pub year: i32,
    /// Day menus, at most one per weekday
    pub days: Vec<DayMenu>,
}

impl WeeklyMenu {
    /// Create an empty weekly menu with one entry per weekday.
    #[must_use]
    pub fn empty(week: u32, year: i32) -> Self {
        Self {
            id: format!("week-{week}-{year}"),
            name: format!("Week {week}, {year}"),
            week,
            year,
            days: Weekday::ALL.iter().map(|d| DayMenu::empty(*d)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_menu_recipes_are_in_meal_order() {
        let recipe = |id: &str| Recipe {
            id: id.into(),
            ..Recipe::default()
        };
        let day = DayMenu {
            day: Weekday::Monday,
            breakfast: Some(recipe("b")),
            lunch: None,
            dinner: Some(recipe("d")),
            snacks: vec![recipe("s1"), recipe("s2")],
        };
        let ids: Vec<&str> = day.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "s1", "s2"]);
    }

    #[test]
    fn empty_week_covers_all_days() {
        let menu = WeeklyMenu::empty(3, 2025);
        assert_eq!(menu.id, "week-3-2025");
        assert_eq!(menu.days.len(), 7);
        assert!(menu.days.iter().all(|d| d.recipes().is_empty()));
    }

    #[test]
    fn recipe_minimal_json_parses() {
        let recipe: Recipe = serde_json::from_str(r#"{"id":"r1","name":"Porridge"}"#)
            .unwrap_or_else(|e| panic!("minimal recipe must parse: {e}"));
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.category.is_none());
    }
}
