// ABOUTME: Suggestion engine configuration with scores, boosts, penalties, and tiers
// ABOUTME: Defaults fix the canonical 10/8/6 pair tiers, 15/8 boosts, and 12-point penalty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Full configuration for the suggestion engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionEngineConfig {
    /// Pairwise synergy scores per match tier
    pub scores: PairScores,
    /// Timing-specificity boosts
    pub boosts: TimingBoosts,
    /// Penalties discouraging redundant suggestions
    pub penalties: Penalties,
    /// Qualitative tier assignment rules
    pub tiers: TierRules,
    /// Result set limits
    pub limits: SuggestionLimits,
}

impl SuggestionEngineConfig {
    /// Check that an override set is internally consistent.
    ///
    /// The defaults always pass; this guards caller-supplied overrides
    /// loaded from persisted settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.excellent_max_rank > self.tiers.good_max_rank {
            return Err(ConfigError::TierRankOrder {
                excellent: self.tiers.excellent_max_rank,
                good: self.tiers.good_max_rank,
            });
        }
        if self.limits.empty_selection_cap == 0 {
            return Err(ConfigError::ZeroCap);
        }
        if self.scores.exact_match <= self.scores.partial_name_match
            || self.scores.partial_name_match <= self.scores.category_match
        {
            return Err(ConfigError::PairScoreOrder {
                exact: self.scores.exact_match,
                partial: self.scores.partial_name_match,
                category: self.scores.category_match,
            });
        }
        Ok(())
    }
}

/// Scores returned by the pairwise scorer, by match tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairScores {
    /// One food lists the other's exact case-folded name
    pub exact_match: u32,
    /// A synergy string and the other food's name overlap as substrings
    pub partial_name_match: u32,
    /// A synergy string overlaps one of the other food's category tags
    pub category_match: u32,
}

impl Default for PairScores {
    fn default() -> Self {
        Self {
            exact_match: 10,
            partial_name_match: 8,
            category_match: 6,
        }
    }
}

/// Boosts applied for meal-timing specificity.
///
/// Foods tagged only for the exact slot outrank dual-tagged foods, which
/// outrank `any-meal`-only foods (no boost).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingBoosts {
    /// Timing names the exact slot and not `any-meal`
    pub meal_specific: i32,
    /// Timing names both the exact slot and `any-meal`
    pub dual_tagged: i32,
}

impl Default for TimingBoosts {
    fn default() -> Self {
        Self {
            meal_specific: 15,
            dual_tagged: 8,
        }
    }
}

/// Score deductions applied during ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Penalties {
    /// Deduction per category the candidate shares with the selected foods
    pub per_category_overlap: i32,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            per_category_overlap: 12,
        }
    }
}

/// Two-dimensional tier assignment: rank position AND an absolute score
/// floor must both hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierRules {
    /// Ranks strictly below this may be `excellent`
    pub excellent_max_rank: usize,
    /// Minimum score for `excellent`
    pub excellent_min_score: i32,
    /// Ranks strictly below this (and past the excellent band) may be `good`
    pub good_max_rank: usize,
    /// Minimum score for `good`
    pub good_min_score: i32,
}

impl Default for TierRules {
    fn default() -> Self {
        Self {
            excellent_max_rank: 3,
            excellent_min_score: 8,
            good_max_rank: 8,
            good_min_score: 3,
        }
    }
}

/// Limits on result set sizes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionLimits {
    /// Cap applied only in empty-selection mode; populated mode returns the
    /// full ranked list and leaves truncation to callers
    pub empty_selection_cap: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            empty_selection_cap: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_canonical_constants() {
        let config = SuggestionEngineConfig::default();
        assert_eq!(config.scores.exact_match, 10);
        assert_eq!(config.scores.partial_name_match, 8);
        assert_eq!(config.scores.category_match, 6);
        assert_eq!(config.boosts.meal_specific, 15);
        assert_eq!(config.boosts.dual_tagged, 8);
        assert_eq!(config.penalties.per_category_overlap, 12);
        assert_eq!(config.tiers.excellent_max_rank, 3);
        assert_eq!(config.tiers.excellent_min_score, 8);
        assert_eq!(config.tiers.good_max_rank, 8);
        assert_eq!(config.tiers.good_min_score, 3);
        assert_eq!(config.limits.empty_selection_cap, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_tier_ranks_fail_validation() {
        let mut config = SuggestionEngineConfig::default();
        config.tiers.excellent_max_rank = 10;
        config.tiers.good_max_rank = 5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TierRankOrder {
                excellent: 10,
                good: 5
            })
        );
    }

    #[test]
    fn zero_cap_fails_validation() {
        let mut config = SuggestionEngineConfig::default();
        config.limits.empty_selection_cap = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroCap));
    }

    #[test]
    fn non_decreasing_pair_scores_fail_validation() {
        let mut config = SuggestionEngineConfig::default();
        config.scores.partial_name_match = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PairScoreOrder { .. })
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SuggestionEngineConfig::default();
        let json = serde_json::to_string(&config)
            .unwrap_or_else(|e| panic!("config must serialize: {e}"));
        let back: SuggestionEngineConfig = serde_json::from_str(&json)
            .unwrap_or_else(|e| panic!("config must deserialize: {e}"));
        assert_eq!(back, config);
    }
}
