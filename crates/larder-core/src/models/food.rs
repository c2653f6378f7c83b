// ABOUTME: Food record model matching the catalog bundle JSON schema
// ABOUTME: Meal timing vocabulary and eligibility predicates for food records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use crate::constants::timing_tags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The meal slot a suggestion or analysis is being computed for.
///
/// Catalog timing tags form a wider, open vocabulary (see
/// [`crate::constants::timing_tags`]); this enum covers only the three slots
/// the planner schedules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast slot
    Breakfast,
    /// Lunch slot
    Lunch,
    /// Dinner slot
    Dinner,
}

impl MealType {
    /// The catalog timing tag matching this meal slot.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Breakfast => timing_tags::BREAKFAST,
            Self::Lunch => timing_tags::LUNCH,
            Self::Dinner => timing_tags::DINNER,
        }
    }

    /// Parse a meal slot from its lowercase tag. Returns `None` for anything
    /// outside the three planner slots (including `snacks` and `any-meal`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            timing_tags::BREAKFAST => Some(Self::Breakfast),
            timing_tags::LUNCH => Some(Self::Lunch),
            timing_tags::DINNER => Some(Self::Dinner),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Source references backing a food record (book pages and quotes).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodSources {
    /// Page numbers in the source document
    #[serde(default)]
    pub pages: Vec<u32>,
    /// Supporting quotes from the source document
    #[serde(default)]
    pub quotes: Vec<String>,
}

/// A food item in the catalog.
///
/// Mirrors the per-food JSON file schema. Every collection field defaults to
/// empty so that records missing optional fields deserialize to safe
/// degenerate shapes instead of failing the whole bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Food {
    /// Unique stable identifier
    #[serde(default)]
    pub id: String,
    /// Display name; matched case-insensitively by the synergy engine
    #[serde(default)]
    pub name: String,
    /// Category tags (deduplicated on catalog load)
    #[serde(default)]
    pub categories: Vec<String>,
    /// Free-text nutritional properties
    #[serde(default)]
    pub properties: Vec<String>,
    /// Benefit summary text
    #[serde(default)]
    pub benefits: String,
    /// Free-text names of foods or categories this food pairs well with
    #[serde(default)]
    pub synergies: Vec<String>,
    /// Free-text names of foods or categories to avoid pairing with
    #[serde(default)]
    pub conflicts: Vec<String>,
    /// Timing tags (open vocabulary; see [`crate::constants::timing_tags`])
    #[serde(default)]
    pub timing: Vec<String>,
    /// Recommended serving amount
    #[serde(default)]
    pub amount: String,
    /// Source references
    #[serde(default)]
    pub sources: FoodSources,
}

impl Food {
    /// Case-folded name used for synergy index keys and text matching.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether this food may appear in the given meal slot.
    ///
    /// A food is eligible if its timing tags contain `any-meal` or the slot's
    /// own tag. Foods with neither are excluded from candidate pools
    /// entirely, not merely ranked low.
    #[must_use]
    pub fn is_appropriate_for(&self, meal: MealType) -> bool {
        self.timing.iter().any(|t| t == timing_tags::ANY_MEAL) || self.has_timing(meal.as_tag())
    }

    /// Whether the timing tags contain the given tag verbatim.
    #[must_use]
    pub fn has_timing(&self, tag: &str) -> bool {
        self.timing.iter().any(|t| t == tag)
    }

    /// Whether the category tags contain the given tag verbatim.
    #[must_use]
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }

    /// Deduplicate category tags in place, keeping first occurrences.
    ///
    /// Insertion order is irrelevant for scoring but duplicates would double
    /// count in the redundancy penalty, so catalog loading normalizes every
    /// record through this.
    pub fn dedup_categories(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.categories.retain(|c| seen.insert(c.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_with_timing(timing: &[&str]) -> Food {
        Food {
            id: "f1".into(),
            name: "Oats".into(),
            timing: timing.iter().map(|t| (*t).to_owned()).collect(),
            ..Food::default()
        }
    }

    #[test]
    fn meal_type_tags_round_trip() {
        for meal in [MealType::Breakfast, MealType::Lunch, MealType::Dinner] {
            assert_eq!(MealType::parse(meal.as_tag()), Some(meal));
        }
        assert_eq!(MealType::parse("BREAKFAST"), Some(MealType::Breakfast));
        assert_eq!(MealType::parse("snacks"), None);
        assert_eq!(MealType::parse("any-meal"), None);
    }

    #[test]
    fn any_meal_is_appropriate_everywhere() {
        let food = food_with_timing(&["any-meal"]);
        assert!(food.is_appropriate_for(MealType::Breakfast));
        assert!(food.is_appropriate_for(MealType::Lunch));
        assert!(food.is_appropriate_for(MealType::Dinner));
    }

    #[test]
    fn meal_specific_timing_excludes_other_slots() {
        let food = food_with_timing(&["breakfast"]);
        assert!(food.is_appropriate_for(MealType::Breakfast));
        assert!(!food.is_appropriate_for(MealType::Lunch));
    }

    #[test]
    fn descriptive_tags_alone_exclude_from_all_slots() {
        let food = food_with_timing(&["in-cooking", "with-each-meal"]);
        assert!(!food.is_appropriate_for(MealType::Breakfast));
        assert!(!food.is_appropriate_for(MealType::Dinner));
    }

    #[test]
    fn dedup_categories_keeps_first_occurrence() {
        let mut food = Food {
            categories: vec!["greens".into(), "high-fiber".into(), "greens".into()],
            ..Food::default()
        };
        food.dedup_categories();
        assert_eq!(food.categories, vec!["greens", "high-fiber"]);
    }

    #[test]
    fn missing_fields_deserialize_to_empty_shapes() {
        let food: Food = serde_json::from_str(r#"{"id":"f9","name":"Kale"}"#)
            .unwrap_or_else(|e| panic!("minimal record must parse: {e}"));
        assert!(food.synergies.is_empty());
        assert!(food.timing.is_empty());
        assert!(food.sources.pages.is_empty());
        assert_eq!(food.benefits, "");
    }
}
