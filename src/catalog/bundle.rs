// ABOUTME: File-backed catalog provider reading an aggregated foods bundle
// ABOUTME: Skips nameless records with a warning and normalizes the rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use super::CatalogProvider;
use async_trait::async_trait;
use larder_core::errors::CatalogError;
use larder_core::models::FoodCatalog;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Loads a catalog from an aggregated `foods-bundle.json` file.
#[derive(Debug, Clone)]
pub struct BundleProvider {
    path: PathBuf,
}

impl BundleProvider {
    /// Create a provider reading the given bundle file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The bundle file this provider reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for BundleProvider {
    async fn load_catalog(&self) -> Result<FoodCatalog, CatalogError> {
        let path_display = self.path.display().to_string();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::io(path_display.clone(), e))?;
        let mut catalog: FoodCatalog =
            serde_json::from_slice(&bytes).map_err(|e| CatalogError::parse(path_display.clone(), e))?;

        // Records without an id or name were skipped upstream by validation;
        // if one slipped through, drop it here rather than corrupt rankings.
        let before = catalog.foods.len();
        catalog.foods.retain(|food| {
            let keep = !food.id.is_empty() && !food.name.is_empty();
            if !keep {
                warn!(id = %food.id, "skipping food record with missing id or name");
            }
            keep
        });

        catalog.normalize();
        info!(
            bundle = %path_display,
            foods = catalog.foods.len(),
            skipped = before - catalog.foods.len(),
            "loaded food catalog"
        );
        Ok(catalog)
    }
}
