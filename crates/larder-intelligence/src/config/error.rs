// ABOUTME: Validation errors for suggestion engine configuration
// ABOUTME: Raised when caller-supplied overrides are internally inconsistent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use thiserror::Error;

/// Errors from validating a caller-supplied engine configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Tier rank cutoffs overlap incorrectly
    #[error("tier rank cutoffs out of order: excellent ends at {excellent}, good at {good}")]
    TierRankOrder {
        /// Rank cutoff for the excellent tier
        excellent: usize,
        /// Rank cutoff for the good tier
        good: usize,
    },

    /// The empty-selection result cap must allow at least one suggestion
    #[error("empty-selection cap must be positive")]
    ZeroCap,

    /// Pair score tiers must be strictly decreasing so tie-breaks stay meaningful
    #[error("pair scores must be strictly decreasing: exact {exact} > partial {partial} > category {category}")]
    PairScoreOrder {
        /// Exact-match score
        exact: u32,
        /// Partial name match score
        partial: u32,
        /// Category match score
        category: u32,
    },
}
