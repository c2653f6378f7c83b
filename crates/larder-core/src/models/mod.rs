// ABOUTME: Core data models for the Larder platform
// ABOUTME: Food records, catalog bundles, and recipe/menu planning types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! Domain models shared across the workspace.
//!
//! The `Food` record mirrors the catalog bundle JSON schema one-to-one; the
//! menu types model planned meals that the analysis engine scores.

/// Catalog bundle container and lookups
pub mod catalog;
/// Food records and meal timing vocabulary
pub mod food;
/// Recipes, day menus, and weekly plans
pub mod menu;

pub use catalog::{ExtractionMetadata, FoodCatalog};
pub use food::{Food, FoodSources, MealType};
pub use menu::{
    DayMenu, Ingredient, NutritionInfo, Recipe, RecipeCategory, Weekday, WeeklyMenu,
};
