// ABOUTME: Pairwise synergy scoring between two foods with tiered text matching
// ABOUTME: First matching tier wins: exact name 10, partial name 8, category overlap 6
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! Pairwise synergy scoring.
//!
//! Synergy hints in catalog data are free text: partial words, plurals, and
//! category names stand in for structured relationships. Scoring therefore
//! stays an explicit substring-matching utility with a fixed tier order
//! rather than anything semantic.
//!
//! Each tier is evaluated across BOTH directions (A's hints against B and
//! B's hints against A) before falling through to the next tier. That makes
//! the score symmetric by construction: a category match on one side can
//! never preempt a stronger name match on the other.

use crate::config::PairScores;
use crate::synergy_index::SynergyIndex;
use larder_core::models::Food;

/// Score how well two foods pair, using the given tier scores.
///
/// Returns exactly one of `{0, category, partial, exact}`; with default
/// scores, `{0, 6, 8, 10}`. Total over any input: empty names and empty
/// hint sets degrade to harmless matches or zero, never an error.
#[must_use]
pub fn pair_score(a: &Food, b: &Food, index: &SynergyIndex, scores: &PairScores) -> u32 {
    let name_a = a.normalized_name();
    let name_b = b.normalized_name();
    let hints_a = index.synergies_of(&name_a);
    let hints_b = index.synergies_of(&name_b);

    // Tier 1: one side declares the other's exact case-folded name.
    if hints_a.contains(&name_b) || hints_b.contains(&name_a) {
        return scores.exact_match;
    }

    // Tier 2: a hint and the other food's name overlap as substrings,
    // either direction ("blueberr" matches "blueberries", "greens" matches
    // "salad greens").
    if hints_a.iter().any(|h| name_overlap(h, &name_b))
        || hints_b.iter().any(|h| name_overlap(h, &name_a))
    {
        return scores.partial_name_match;
    }

    // Tier 3: a hint overlaps one of the other food's category tags
    // ("vegetables" hint against a rich-in-vegetables candidate).
    if hints_a.iter().any(|h| category_overlap(h, &b.categories))
        || hints_b.iter().any(|h| category_overlap(h, &a.categories))
    {
        return scores.category_match;
    }

    0
}

/// Whether two foods declare each other (or each other's categories) in
/// their conflict lists. Substring match, either direction, case-folded.
#[must_use]
pub fn in_conflict(a: &Food, b: &Food) -> bool {
    let name_a = a.normalized_name();
    let name_b = b.normalized_name();
    a.conflicts
        .iter()
        .any(|c| c.to_lowercase().contains(&name_b))
        || b.conflicts
            .iter()
            .any(|c| c.to_lowercase().contains(&name_a))
}

fn name_overlap(hint: &str, name: &str) -> bool {
    name.contains(hint) || hint.contains(name)
}

fn category_overlap(hint: &str, categories: &[String]) -> bool {
    categories.iter().any(|c| {
        let cat = c.to_lowercase();
        cat.contains(hint) || hint.contains(&cat)
    })
}
