// ABOUTME: Intelligence module re-exports from the larder-intelligence crate
// ABOUTME: Preserves larder::intelligence::* import paths for consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! # Intelligence Module
//!
//! Synergy scoring and suggestion ranking for menu planning. This module
//! re-exports from the `larder-intelligence` crate, which owns the engine
//! so it can compile in parallel with the integration surface.

pub use larder_intelligence::*;

// Re-export submodules for path-based access
// (e.g., larder::intelligence::pairwise::pair_score).
pub use larder_intelligence::{
    config, menu_analysis, pairwise, recipe_match, suggestion_engine, synergy_index,
};
