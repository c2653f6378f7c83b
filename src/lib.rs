// ABOUTME: Main library entry point for the Larder food intelligence platform
// ABOUTME: Catalog loading and validation around the synergy suggestion engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

#![deny(unsafe_code)]

//! # Larder
//!
//! A food catalog and synergy intelligence library for menu planning.
//! Foods carry category tags, meal timing tags, and free-text pairing
//! hints; the engine ranks which foods would best extend a meal and
//! analyzes the synergies inside planned menus.
//!
//! ## Architecture
//!
//! - **catalog**: Loading, aggregation, and validation of food record files
//! - **intelligence**: Synergy index, pairwise scorer, suggestion ranker,
//!   and menu analyzer (re-exported from `larder-intelligence`)
//! - **logging**: Structured logging setup for the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use larder::catalog::{BundleProvider, CatalogProvider};
//! use larder::intelligence::{SuggestionEngine, SynergyIndex};
//! use larder_core::models::MealType;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = BundleProvider::new("data/foods-bundle.json");
//!     let catalog = provider.load_catalog().await?;
//!     let index = SynergyIndex::build(&catalog.foods);
//!
//!     let engine = SuggestionEngine::new();
//!     let suggestions = engine.rank(&[], MealType::Breakfast, &catalog, &index);
//!     for suggestion in suggestions.iter().take(5) {
//!         println!("{} ({})", suggestion.food.name, suggestion.score);
//!     }
//!     Ok(())
//! }
//! ```

/// Catalog supply interface: bundle loading, aggregation, validation
pub mod catalog;

/// Synergy intelligence engine re-exports
pub mod intelligence;

/// Structured logging configuration
pub mod logging;
