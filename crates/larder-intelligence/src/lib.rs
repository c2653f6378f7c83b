// ABOUTME: Food synergy intelligence engine with suggestion ranking and menu analysis
// ABOUTME: Pure, synchronous scoring over immutable catalog snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

#![deny(unsafe_code)]

//! # Larder Intelligence
//!
//! The food synergy engine: given a catalog of foods tagged with categories,
//! meal timing, and free-text pairing hints, it scores how well foods pair
//! and ranks suggested additions for a meal slot.
//!
//! The engine is synchronous and pure. All operations run to completion
//! in-memory with no I/O; the catalog and the [`SynergyIndex`] built from it
//! are treated as immutable snapshots, so concurrent use from multiple tasks
//! is safe as long as callers rebuild rather than mutate on refresh.
//!
//! ## Pipeline
//!
//! ```text
//! FoodCatalog -> SynergyIndex::build -> SuggestionEngine::rank -> RankedSuggestion list
//!                                    \-> MenuAnalyzer::analyze_* -> MealAnalysis
//! ```

/// Engine configuration (scores, boosts, penalties, tier rules)
pub mod config;
/// Catalog-wide synergy and conflict analysis for planned meals
pub mod menu_analysis;
/// Pairwise synergy scoring between two foods
pub mod pairwise;
/// Ingredient-to-food text matching for recipes
pub mod recipe_match;
/// Meal suggestion ranking engine
pub mod suggestion_engine;
/// Case-folded synergy lookup index
pub mod synergy_index;

pub use config::{
    ConfigError, PairScores, Penalties, SuggestionEngineConfig, SuggestionLimits, TierRules,
    TimingBoosts,
};
pub use menu_analysis::{
    ConflictPair, DailyDozenCompliance, MealAnalysis, MenuAnalyzer, SynergyPair,
};
pub use pairwise::{in_conflict, pair_score};
pub use recipe_match::foods_in_recipe;
pub use suggestion_engine::{RankedSuggestion, SuggestionEngine, SuggestionTier, SynergyBreakdown};
pub use synergy_index::SynergyIndex;
