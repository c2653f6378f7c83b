// ABOUTME: Shared test fixtures and setup functions for integration tests
// ABOUTME: Provides a small realistic food catalog and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods
#![allow(dead_code)]

//! Shared test utilities for `larder`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use larder_core::models::{Food, FoodCatalog};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a food record from its scoring-relevant fields.
pub fn food(
    id: &str,
    name: &str,
    timing: &[&str],
    synergies: &[&str],
    categories: &[&str],
) -> Food {
    Food {
        id: id.into(),
        name: name.into(),
        timing: timing.iter().map(|t| (*t).to_owned()).collect(),
        synergies: synergies.iter().map(|s| (*s).to_owned()).collect(),
        categories: categories.iter().map(|c| (*c).to_owned()).collect(),
        amount: "1 serving".into(),
        ..Food::default()
    }
}

/// A small realistic catalog exercising every match tier: exact synergy
/// declarations, partial hints, category hints, conflicts, and the full
/// timing vocabulary.
pub fn fixture_catalog() -> FoodCatalog {
    let mut foods = vec![
        food(
            "food-1",
            "Oats",
            &["breakfast"],
            &["blueberries", "ground flaxseeds"],
            &["rich-in-whole-grains", "high-fiber"],
        ),
        food(
            "food-2",
            "Blueberries",
            &["breakfast", "any-meal"],
            &[],
            &["rich-in-fruits", "anti-inflammatory"],
        ),
        food(
            "food-3",
            "Ground Flaxseeds",
            &["any-meal"],
            &["berries"],
            &["high-fiber", "nuts-and-seeds"],
        ),
        food(
            "food-4",
            "Kale",
            &["lunch", "dinner"],
            &["beans", "vinegar"],
            &["greens", "cruciferous", "anti-inflammatory"],
        ),
        food(
            "food-5",
            "Black Beans",
            &["lunch", "dinner"],
            &["vegetables"],
            &["rich-in-legumes", "high-fiber"],
        ),
        food(
            "food-6",
            "Balsamic Vinegar",
            &["with-each-meal"],
            &[],
            &["low-glycemic"],
        ),
        food(
            "food-7",
            "Spinach",
            &["lunch", "any-meal"],
            &[],
            &["greens", "rich-in-vegetables"],
        ),
        food(
            "food-8",
            "Green Tea",
            &["any-meal"],
            &[],
            &["beverages", "anti-inflammatory"],
        ),
        food(
            "food-9",
            "Walnuts",
            &["snacks", "breakfast"],
            &["berries"],
            &["nuts-and-seeds"],
        ),
        food(
            "food-10",
            "Brown Rice",
            &["lunch", "dinner"],
            &[],
            &["rich-in-whole-grains"],
        ),
    ];
    // Green tea interferes with iron uptake from greens.
    if let Some(kale) = foods.iter_mut().find(|f| f.id == "food-4") {
        kale.conflicts = vec!["green tea".into()];
    }
    FoodCatalog::from_foods(foods)
}
