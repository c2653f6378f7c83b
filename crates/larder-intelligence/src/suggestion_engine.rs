// ABOUTME: Meal suggestion ranking engine over a catalog snapshot and synergy index
// ABOUTME: Two modes: timing-only ranking for empty meals, synergy ranking for populated meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! Meal suggestion ranking.
//!
//! Given the foods already placed in a meal slot, rank every other
//! timing-eligible catalog food by how well it would extend the meal:
//! summed pairwise synergy with the selection, plus a timing-specificity
//! boost, minus a redundancy penalty for categories the meal already covers.
//!
//! An empty selection takes a separate path: candidates are ranked purely by
//! timing specificity, capped, and carry no synergy breakdowns. A selection
//! whose ids all fail to resolve does NOT take that path: it falls through
//! to populated mode with zero selected foods, which yields the same
//! ordering but no cap. Callers may depend on either behavior, so both are
//! kept exactly as the menu builder shipped them.

use crate::config::SuggestionEngineConfig;
use crate::pairwise::pair_score;
use crate::synergy_index::SynergyIndex;
use larder_core::constants::timing_tags;
use larder_core::models::{Food, FoodCatalog, MealType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Qualitative bucket assigned to a ranked suggestion for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionTier {
    /// Top-ranked with a strong absolute score
    Excellent,
    /// Solidly ranked with a positive score
    Good,
    /// Everything else
    Neutral,
}

/// One selected food's contribution to a candidate's score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SynergyBreakdown {
    /// Name of the selected food this candidate scored against
    pub with_food: String,
    /// The pairwise contribution (strictly positive entries only)
    pub score: u32,
}

/// A candidate food with its final score, tier, and per-pairing breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSuggestion {
    /// The suggested food
    pub food: Food,
    /// Final score: synergy sum + timing boost - redundancy penalty.
    /// May go negative in populated mode.
    pub score: i32,
    /// Qualitative tier for display
    pub tier: SuggestionTier,
    /// Positive pairwise contributions, one per selected food that matched
    pub breakdown: Vec<SynergyBreakdown>,
}

/// The suggestion ranking engine.
///
/// Holds only configuration; every ranking call takes the catalog and index
/// as read-only snapshots, so one engine can serve concurrent sessions.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionEngineConfig,
}

impl SuggestionEngine {
    /// Create an engine with the canonical default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    #[must_use]
    pub const fn with_config(config: SuggestionEngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SuggestionEngineConfig {
        &self.config
    }

    /// Score how well two foods pair under this engine's configuration.
    ///
    /// Symmetric, and bounded to the four configured tier values
    /// (`{0, 6, 8, 10}` by default).
    #[must_use]
    pub fn pair_score(&self, a: &Food, b: &Food, index: &SynergyIndex) -> u32 {
        pair_score(a, b, index, &self.config.scores)
    }

    /// Rank suggested additions for a meal slot.
    ///
    /// `selected_ids` are the foods already in the meal; unresolvable ids
    /// are dropped with a warning. Returns suggestions sorted by descending
    /// score; ties keep catalog order. Empty catalog yields an empty list.
    #[must_use]
    pub fn rank(
        &self,
        selected_ids: &[String],
        meal_type: MealType,
        catalog: &FoodCatalog,
        index: &SynergyIndex,
    ) -> Vec<RankedSuggestion> {
        if selected_ids.is_empty() {
            return self.rank_empty_selection(meal_type, catalog);
        }
        self.rank_with_selection(selected_ids, meal_type, catalog, index)
    }

    /// Empty-selection mode: rank timing-eligible foods by specificity
    /// alone, capped, with no breakdowns computed.
    fn rank_empty_selection(
        &self,
        meal_type: MealType,
        catalog: &FoodCatalog,
    ) -> Vec<RankedSuggestion> {
        let mut suggestions: Vec<RankedSuggestion> = catalog
            .foods
            .iter()
            .filter(|f| f.is_appropriate_for(meal_type))
            .map(|f| RankedSuggestion {
                food: f.clone(),
                score: self.timing_boost(f, meal_type),
                tier: SuggestionTier::Neutral,
                breakdown: Vec::new(),
            })
            .collect();

        suggestions.sort_by(|a, b| b.score.cmp(&a.score));
        suggestions.truncate(self.config.limits.empty_selection_cap);
        debug!(
            meal = %meal_type,
            count = suggestions.len(),
            "ranked starter suggestions"
        );
        suggestions
    }

    /// Populated mode: synergy sum + timing boost - redundancy penalty,
    /// full list, rank-and-floor tiering.
    fn rank_with_selection(
        &self,
        selected_ids: &[String],
        meal_type: MealType,
        catalog: &FoodCatalog,
        index: &SynergyIndex,
    ) -> Vec<RankedSuggestion> {
        let selected_set: HashSet<&str> = selected_ids.iter().map(String::as_str).collect();
        let selected: Vec<&Food> = selected_ids
            .iter()
            .filter_map(|id| {
                let food = catalog.food_by_id(id);
                if food.is_none() {
                    warn!(id = %id, "selected food id not in catalog, dropping");
                }
                food
            })
            .collect();

        let mut suggestions: Vec<RankedSuggestion> = catalog
            .foods
            .iter()
            .filter(|f| !selected_set.contains(f.id.as_str()))
            .filter(|f| f.is_appropriate_for(meal_type))
            .map(|candidate| self.score_candidate(candidate, &selected, meal_type, index))
            .collect();

        suggestions.sort_by(|a, b| b.score.cmp(&a.score));

        for (rank, suggestion) in suggestions.iter_mut().enumerate() {
            suggestion.tier = self.tier_for(rank, suggestion.score);
        }
        debug!(
            meal = %meal_type,
            selected = selected.len(),
            count = suggestions.len(),
            "ranked meal suggestions"
        );
        suggestions
    }

    fn score_candidate(
        &self,
        candidate: &Food,
        selected: &[&Food],
        meal_type: MealType,
        index: &SynergyIndex,
    ) -> RankedSuggestion {
        let mut total: i32 = 0;
        let mut breakdown = Vec::new();

        for food in selected {
            let score = self.pair_score(candidate, food, index);
            total += score as i32;
            if score > 0 {
                breakdown.push(SynergyBreakdown {
                    with_food: food.name.clone(),
                    score,
                });
            }
        }

        total += self.timing_boost(candidate, meal_type);
        total -= self.redundancy_penalty(candidate, selected);

        RankedSuggestion {
            food: candidate.clone(),
            score: total,
            tier: SuggestionTier::Neutral,
            breakdown,
        }
    }

    /// Timing-specificity boost: exact-slot-only timing outranks dual-tagged
    /// timing, which outranks `any-meal`-only (no boost).
    fn timing_boost(&self, food: &Food, meal_type: MealType) -> i32 {
        let meal_specific = food.has_timing(meal_type.as_tag());
        let any_meal = food.has_timing(timing_tags::ANY_MEAL);
        if meal_specific && !any_meal {
            self.config.boosts.meal_specific
        } else if meal_specific && any_meal {
            self.config.boosts.dual_tagged
        } else {
            0
        }
    }

    /// Penalty for categories the meal already covers: the candidate's
    /// distinct categories present anywhere in the selection each deduct
    /// the configured amount.
    fn redundancy_penalty(&self, candidate: &Food, selected: &[&Food]) -> i32 {
        let overlap: HashSet<&str> = candidate
            .categories
            .iter()
            .filter(|cat| selected.iter().any(|f| f.has_category(cat)))
            .map(String::as_str)
            .collect();
        overlap.len() as i32 * self.config.penalties.per_category_overlap
    }

    /// Two-dimensional tier rule: rank band AND score floor must both hold.
    /// A top-ranked candidate that misses its floor drops to neutral, never
    /// into the good band.
    fn tier_for(&self, rank: usize, score: i32) -> SuggestionTier {
        let tiers = &self.config.tiers;
        if rank < tiers.excellent_max_rank {
            if score >= tiers.excellent_min_score {
                SuggestionTier::Excellent
            } else {
                SuggestionTier::Neutral
            }
        } else if rank < tiers.good_max_rank && score >= tiers.good_min_score {
            SuggestionTier::Good
        } else {
            SuggestionTier::Neutral
        }
    }
}
