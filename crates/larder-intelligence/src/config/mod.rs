// ABOUTME: Engine configuration module for suggestion scoring parameters
// ABOUTME: Defaults reproduce the canonical scoring constants of the platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! Engine configuration
//!
//! Scoring weights, boosts, penalties, and tier rules for the suggestion
//! engine. Defaults are the canonical platform constants; callers may
//! persist and restore overrides since every type serializes.

/// Configuration validation errors
pub mod error;
/// Suggestion engine parameter structs
pub mod suggestion;

pub use error::ConfigError;
pub use suggestion::{
    PairScores, Penalties, SuggestionEngineConfig, SuggestionLimits, TierRules, TimingBoosts,
};
