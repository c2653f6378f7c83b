// ABOUTME: Food catalog bundle container with id and name lookups
// ABOUTME: Matches the aggregated foods-bundle.json format produced by catalog tooling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use super::food::Food;
use crate::errors::CatalogError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Provenance metadata carried in an aggregated bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionMetadata {
    /// When the source document was processed
    #[serde(default)]
    pub extraction_date: Option<DateTime<Utc>>,
    /// Human-readable name of the source document
    #[serde(default)]
    pub source_document: String,
    /// Topic areas the extraction focused on
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

/// An immutable-per-session collection of food records.
///
/// The catalog is treated as a read-only snapshot for the duration of any
/// ranking or analysis operation. Refreshing the catalog means loading a new
/// snapshot and rebuilding derived structures, never mutating in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodCatalog {
    /// Bundle provenance metadata
    #[serde(default)]
    pub extraction_metadata: ExtractionMetadata,
    /// All food records in the catalog
    #[serde(default)]
    pub foods: Vec<Food>,
}

impl FoodCatalog {
    /// Wrap a list of foods in a catalog with empty metadata.
    #[must_use]
    pub fn from_foods(foods: Vec<Food>) -> Self {
        Self {
            extraction_metadata: ExtractionMetadata::default(),
            foods,
        }
    }

    /// Number of food records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Look up a food by its stable id.
    #[must_use]
    pub fn food_by_id(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Look up a food by case-folded name.
    #[must_use]
    pub fn food_by_name(&self, name: &str) -> Option<&Food> {
        let needle = name.to_lowercase();
        self.foods.iter().find(|f| f.normalized_name() == needle)
    }

    /// Verify that every record carries a unique id.
    ///
    /// Ranking assumes id uniqueness across the catalog; aggregation calls
    /// this before writing a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] naming the first repeated id.
    pub fn check_unique_ids(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for food in &self.foods {
            if !seen.insert(food.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: food.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Normalize every record in place (category dedup).
    pub fn normalize(&mut self) {
        for food in &mut self.foods {
            food.dedup_categories();
        }
        debug!(foods = self.foods.len(), "normalized catalog records");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str, name: &str) -> Food {
        Food {
            id: id.into(),
            name: name.into(),
            ..Food::default()
        }
    }

    #[test]
    fn lookup_by_id_and_name() {
        let catalog = FoodCatalog::from_foods(vec![food("f1", "Oats"), food("f2", "Kale")]);
        assert_eq!(
            catalog.food_by_id("f2").map(|f| f.name.as_str()),
            Some("Kale")
        );
        assert_eq!(
            catalog.food_by_name("OATS").map(|f| f.id.as_str()),
            Some("f1")
        );
        assert!(catalog.food_by_id("ghost").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = FoodCatalog::from_foods(vec![food("f1", "Oats"), food("f1", "Kale")]);
        let err = catalog.check_unique_ids();
        assert!(matches!(err, Err(CatalogError::DuplicateId { id }) if id == "f1"));
    }

    #[test]
    fn unique_ids_pass() {
        let catalog = FoodCatalog::from_foods(vec![food("f1", "Oats"), food("f2", "Kale")]);
        assert!(catalog.check_unique_ids().is_ok());
    }

    #[test]
    fn bundle_json_shape_round_trips() {
        let json = r#"{
            "extraction_metadata": {
                "extraction_date": "2025-01-19T00:00:00Z",
                "source_document": "How Not to Diet",
                "focus_areas": ["weight-loss"]
            },
            "foods": [{"id": "f1", "name": "Oats"}]
        }"#;
        let catalog: FoodCatalog = serde_json::from_str(json)
            .unwrap_or_else(|e| panic!("bundle must parse: {e}"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.extraction_metadata.source_document,
            "How Not to Diet"
        );
    }
}
