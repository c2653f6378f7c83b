// ABOUTME: Case-folded synergy lookup index built once per catalog snapshot
// ABOUTME: Maps food name to the set of synergy strings that food declares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use larder_core::models::Food;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Fast lookup from a food's case-folded name to its case-folded synergy
/// strings.
///
/// Built once per catalog load; a pure function of the catalog. The index
/// never re-validates records (malformed entries are the loader's concern),
/// so a food with a missing name simply keys under the empty string.
#[derive(Debug, Clone, Default)]
pub struct SynergyIndex {
    entries: HashMap<String, HashSet<String>>,
    empty: HashSet<String>,
}

impl SynergyIndex {
    /// Build the index from a catalog snapshot.
    ///
    /// Every food gets an entry, including foods with no declared synergies
    /// (present with an empty set, never absent). Idempotent for a given
    /// catalog.
    #[must_use]
    pub fn build(foods: &[Food]) -> Self {
        let mut entries = HashMap::with_capacity(foods.len());
        for food in foods {
            let synergies: HashSet<String> =
                food.synergies.iter().map(|s| s.to_lowercase()).collect();
            entries.insert(food.normalized_name(), synergies);
        }
        debug!(foods = foods.len(), entries = entries.len(), "built synergy index");
        Self {
            entries,
            empty: HashSet::new(),
        }
    }

    /// The synergy strings declared by the food with the given case-folded
    /// name. Unknown names resolve to an empty set.
    #[must_use]
    pub fn synergies_of(&self, normalized_name: &str) -> &HashSet<String> {
        self.entries.get(normalized_name).unwrap_or(&self.empty)
    }

    /// Number of foods indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
