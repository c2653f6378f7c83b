// ABOUTME: Catalog supply interface with file-backed bundle loading
// ABOUTME: Aggregation and validation tooling for per-food JSON record files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! # Catalog Module
//!
//! The supply side of the platform: loading a food catalog into memory and
//! the build-time tooling that produces it (aggregating per-food JSON files
//! into a bundle, validating records before they ship).
//!
//! The engine treats whatever this module produces as a read-only snapshot;
//! refreshing means loading a new catalog and rebuilding the synergy index.

/// Per-food file aggregation into a bundle
pub mod aggregate;
/// File-backed bundle provider
pub mod bundle;
/// Structural validation of per-food files
pub mod validate;

pub use aggregate::{aggregate_foods_dir, write_bundle};
pub use bundle::BundleProvider;
pub use validate::{validate_foods_dir, Severity, ValidationIssue, ValidationReport};

use async_trait::async_trait;
use larder_core::errors::CatalogError;
use larder_core::models::FoodCatalog;
use tracing::warn;

/// Supplies food catalog snapshots to the engine.
///
/// Implementations own where records come from (a bundle file, a directory
/// of per-food files, a fixture in tests). Engine callers stay agnostic.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load a catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when records cannot be read or parsed.
    async fn load_catalog(&self) -> Result<FoodCatalog, CatalogError>;

    /// Load a catalog snapshot, degrading to an empty catalog on failure.
    ///
    /// Ranking an empty catalog yields empty results, so callers that can
    /// tolerate "no catalog available" use this instead of propagating.
    async fn load_catalog_or_empty(&self) -> FoodCatalog {
        match self.load_catalog().await {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(error = %err, "catalog unavailable, degrading to empty");
                FoodCatalog::default()
            }
        }
    }
}
