// ABOUTME: Catalog-wide synergy and conflict analysis for planned meals and menus
// ABOUTME: All-pairs scoring, category balance, guideline recommendations, week totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! Menu analysis.
//!
//! Where the suggestion engine looks forward (what to add next), the
//! analyzer looks at what a meal or day already contains: every positive
//! synergy pair, every declared conflict, the category balance, and
//! guideline-driven recommendations.
//!
//! Pair scoring reuses the canonical pairwise scorer; the analyzer carries
//! no scoring variant of its own.

use crate::config::SuggestionEngineConfig;
use crate::pairwise::in_conflict;
use crate::recipe_match::foods_in_recipe;
use crate::suggestion_engine::SuggestionEngine;
use crate::synergy_index::SynergyIndex;
use larder_core::constants::{daily_dozen, timing_tags};
use larder_core::models::{DayMenu, Food, FoodCatalog, MealType, Recipe, RecipeCategory, WeeklyMenu};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A positive synergy between two foods in an analyzed set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SynergyPair {
    /// First food name (catalog order)
    pub food_a: String,
    /// Second food name
    pub food_b: String,
    /// Canonical pairwise score
    pub score: u32,
}

/// A declared conflict between two foods in an analyzed set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConflictPair {
    /// First food name (catalog order)
    pub food_a: String,
    /// Second food name
    pub food_b: String,
}

/// Daily Dozen style compliance summary for a day of meals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDozenCompliance {
    /// Whether every requirement is met
    pub compliant: bool,
    /// Unmet requirements, with have/need counts
    pub missing: Vec<String>,
    /// Met requirement labels
    pub present: Vec<String>,
}

/// The result of analyzing a set of foods making up a meal or day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysis {
    /// Sum of all positive pairwise scores
    pub total_score: u32,
    /// Names of the foods included, in match order
    pub foods_included: Vec<String>,
    /// All positive synergy pairs
    pub synergy_pairs: Vec<SynergyPair>,
    /// All declared conflicts
    pub conflict_pairs: Vec<ConflictPair>,
    /// Count of foods per category tag
    pub category_balance: BTreeMap<String, usize>,
    /// Whether every food fits the meal's timing slot
    pub timing_optimal: bool,
    /// Actionable recommendations for improving the meal
    pub recommendations: Vec<String>,
}

/// Catalog-wide analyzer for planned meals, days, and weeks.
#[derive(Debug, Clone, Default)]
pub struct MenuAnalyzer {
    engine: SuggestionEngine,
}

impl MenuAnalyzer {
    /// Create an analyzer with the canonical default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer sharing a custom engine configuration.
    #[must_use]
    pub const fn with_config(config: SuggestionEngineConfig) -> Self {
        Self {
            engine: SuggestionEngine::with_config(config),
        }
    }

    /// Analyze a single recipe as one meal.
    ///
    /// Foods are resolved from the recipe's ingredient lines; the timing
    /// check uses the recipe's own menu slot.
    #[must_use]
    pub fn analyze_meal(
        &self,
        recipe: &Recipe,
        catalog: &FoodCatalog,
        index: &SynergyIndex,
    ) -> MealAnalysis {
        let foods = foods_in_recipe(recipe, catalog);
        let timing_optimal = foods
            .iter()
            .all(|f| fits_recipe_slot(f, recipe.category));
        let mut analysis = self.analyze_foods(&foods, timing_optimal, index);
        analysis
            .recommendations
            .extend(meal_recommendations(&analysis));
        debug!(
            recipe = %recipe.id,
            foods = analysis.foods_included.len(),
            score = analysis.total_score,
            "analyzed meal"
        );
        analysis
    }

    /// Analyze a whole day's menus as one food set.
    ///
    /// Synergies are counted across meals (a breakfast food pairing with a
    /// dinner food still counts toward the day); recommendations check the
    /// Daily Dozen requirements.
    #[must_use]
    pub fn analyze_day(
        &self,
        day: &DayMenu,
        catalog: &FoodCatalog,
        index: &SynergyIndex,
    ) -> MealAnalysis {
        let mut seen = std::collections::HashSet::new();
        let mut foods: Vec<&Food> = Vec::new();
        for recipe in day.recipes() {
            for food in foods_in_recipe(recipe, catalog) {
                if seen.insert(food.id.clone()) {
                    foods.push(food);
                }
            }
        }

        // Foods are already distributed across their own slots.
        let mut analysis = self.analyze_foods(&foods, true, index);
        analysis
            .recommendations
            .extend(day_recommendations(&foods, &analysis));
        debug!(
            day = %day.day,
            foods = analysis.foods_included.len(),
            score = analysis.total_score,
            "analyzed day"
        );
        analysis
    }

    /// Analyze a meal given as selected food ids, the menu-builder way.
    ///
    /// Unresolvable ids are dropped with a warning, mirroring the
    /// suggestion engine. The timing check uses the meal slot directly.
    #[must_use]
    pub fn analyze_meal_foods(
        &self,
        selected_ids: &[String],
        meal_type: MealType,
        catalog: &FoodCatalog,
        index: &SynergyIndex,
    ) -> MealAnalysis {
        let foods: Vec<&Food> = selected_ids
            .iter()
            .filter_map(|id| {
                let food = catalog.food_by_id(id);
                if food.is_none() {
                    warn!(id = %id, "selected food id not in catalog, dropping");
                }
                food
            })
            .collect();
        let timing_optimal = foods.iter().all(|f| f.is_appropriate_for(meal_type));
        let mut analysis = self.analyze_foods(&foods, timing_optimal, index);
        analysis
            .recommendations
            .extend(meal_recommendations(&analysis));
        analysis
    }

    /// Total synergy score across every day of a weekly menu.
    #[must_use]
    pub fn score_weekly_menu(
        &self,
        menu: &WeeklyMenu,
        catalog: &FoodCatalog,
        index: &SynergyIndex,
    ) -> u32 {
        menu.days
            .iter()
            .map(|day| self.analyze_day(day, catalog, index).total_score)
            .sum()
    }

    /// Check a food set against the Daily Dozen requirements.
    #[must_use]
    pub fn check_daily_dozen(&self, foods: &[&Food]) -> DailyDozenCompliance {
        let balance = category_balance(foods);
        let mut missing = Vec::new();
        let mut present = Vec::new();
        for req in &daily_dozen::REQUIREMENTS {
            let count = balance.get(req.category).copied().unwrap_or(0);
            if count < req.needed {
                missing.push(format!(
                    "{} - have {count}, need {}",
                    req.label, req.needed
                ));
            } else {
                present.push(req.label.to_owned());
            }
        }
        DailyDozenCompliance {
            compliant: missing.is_empty(),
            missing,
            present,
        }
    }

    /// Core all-pairs analysis over a food set.
    ///
    /// Pair order is deterministic: pairs are emitted by (i, j) position in
    /// the input set regardless of how the parallel scoring is scheduled.
    fn analyze_foods(
        &self,
        foods: &[&Food],
        timing_optimal: bool,
        index: &SynergyIndex,
    ) -> MealAnalysis {
        let pair_results: Vec<(usize, usize, u32, bool)> = (0..foods.len())
            .into_par_iter()
            .map(|i| {
                let mut row = Vec::new();
                for j in (i + 1)..foods.len() {
                    let score = self.engine.pair_score(foods[i], foods[j], index);
                    let conflict = in_conflict(foods[i], foods[j]);
                    if score > 0 || conflict {
                        row.push((i, j, score, conflict));
                    }
                }
                row
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        let mut synergy_pairs = Vec::new();
        let mut conflict_pairs = Vec::new();
        let mut total_score = 0;
        for (i, j, score, conflict) in pair_results {
            if score > 0 {
                total_score += score;
                synergy_pairs.push(SynergyPair {
                    food_a: foods[i].name.clone(),
                    food_b: foods[j].name.clone(),
                    score,
                });
            }
            if conflict {
                conflict_pairs.push(ConflictPair {
                    food_a: foods[i].name.clone(),
                    food_b: foods[j].name.clone(),
                });
            }
        }

        MealAnalysis {
            total_score,
            foods_included: foods.iter().map(|f| f.name.clone()).collect(),
            synergy_pairs,
            conflict_pairs,
            category_balance: category_balance(foods),
            timing_optimal,
            recommendations: Vec::new(),
        }
    }
}

/// Whether a food fits the slot a recipe is written for. `any-meal` always
/// fits; recipes outside the four meal slots (desserts, beverages) only fit
/// `any-meal` foods.
fn fits_recipe_slot(food: &Food, category: Option<RecipeCategory>) -> bool {
    if food.has_timing(timing_tags::ANY_MEAL) {
        return true;
    }
    match category {
        Some(RecipeCategory::Breakfast) => food.has_timing(timing_tags::BREAKFAST),
        Some(RecipeCategory::Lunch) => food.has_timing(timing_tags::LUNCH),
        Some(RecipeCategory::Dinner) => food.has_timing(timing_tags::DINNER),
        Some(RecipeCategory::Snack) => food.has_timing(timing_tags::SNACKS),
        Some(RecipeCategory::Dessert | RecipeCategory::Beverage) | None => false,
    }
}

fn category_balance(foods: &[&Food]) -> BTreeMap<String, usize> {
    let mut balance = BTreeMap::new();
    for food in foods {
        for category in &food.categories {
            *balance.entry(category.clone()).or_insert(0) += 1;
        }
    }
    balance
}

fn meal_recommendations(analysis: &MealAnalysis) -> Vec<String> {
    let mut recommendations = Vec::new();
    if !analysis.timing_optimal {
        recommendations
            .push("Some foods might be more effective at different meal times".to_owned());
    }
    if analysis.category_balance.len() < daily_dozen::MIN_MEAL_CATEGORY_DIVERSITY {
        recommendations
            .push("Consider adding more diverse food categories for better synergy".to_owned());
    }
    if !analysis
        .category_balance
        .contains_key(daily_dozen::ANTI_INFLAMMATORY)
    {
        recommendations
            .push("Add anti-inflammatory foods like turmeric, ginger, or greens".to_owned());
    }
    if !analysis
        .category_balance
        .contains_key(daily_dozen::HIGH_FIBER)
    {
        recommendations.push("Include high-fiber foods like beans, oats, or flaxseeds".to_owned());
    }
    for conflict in &analysis.conflict_pairs {
        recommendations.push(format!(
            "Avoid combining {} with {}",
            conflict.food_a, conflict.food_b
        ));
    }
    recommendations
}

fn day_recommendations(foods: &[&Food], analysis: &MealAnalysis) -> Vec<String> {
    let mut recommendations = Vec::new();
    for req in &daily_dozen::REQUIREMENTS {
        let count = analysis
            .category_balance
            .get(req.category)
            .copied()
            .unwrap_or(0);
        if count < req.needed {
            recommendations.push(format!(
                "Daily Dozen: {} - have {count}, need {}",
                req.label, req.needed
            ));
        }
    }
    if !analysis
        .category_balance
        .contains_key(daily_dozen::ANTI_INFLAMMATORY)
    {
        recommendations.push("Add anti-inflammatory herbs and spices".to_owned());
    }
    let has_vinegar = foods
        .iter()
        .any(|f| f.normalized_name().contains("vinegar"));
    if !has_vinegar {
        recommendations.push("Add 2 tsp vinegar with each meal".to_owned());
    }
    for conflict in &analysis.conflict_pairs {
        recommendations.push(format!(
            "Avoid combining {} with {}",
            conflict.food_a, conflict.food_b
        ));
    }
    recommendations
}
