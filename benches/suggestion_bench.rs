// ABOUTME: Criterion benchmarks for the suggestion ranking engine
// ABOUTME: Measures index construction and ranking over synthetic catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! Criterion benchmarks for the suggestion engine.
//!
//! Measures synergy index construction and both ranking modes over
//! synthetic catalogs sized like real food databases.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use larder::intelligence::{SuggestionEngine, SynergyIndex};
use larder_core::models::{Food, FoodCatalog, MealType};

const CATALOG_SIZES: [usize; 3] = [50, 200, 800];

/// Generate a synthetic catalog with realistic tag and hint density.
fn generate_catalog(count: usize) -> FoodCatalog {
    let categories = [
        "rich-in-legumes",
        "greens",
        "rich-in-whole-grains",
        "rich-in-fruits",
        "high-fiber",
        "anti-inflammatory",
        "nuts-and-seeds",
        "cruciferous",
    ];
    let timings: [&[&str]; 4] = [
        &["breakfast"],
        &["lunch", "dinner"],
        &["breakfast", "any-meal"],
        &["any-meal"],
    ];

    let foods = (0..count)
        .map(|index| Food {
            id: format!("food-{index}"),
            name: format!("Synthetic Food {index}"),
            categories: vec![
                categories[index % categories.len()].to_owned(),
                categories[(index * 3 + 1) % categories.len()].to_owned(),
            ],
            // Every third food names another food; every fifth names a category.
            synergies: match index % 15 {
                0 | 3 | 6 | 9 | 12 => {
                    vec![format!("synthetic food {}", (index * 7 + 1) % count)]
                }
                5 | 10 => vec![categories[(index + 2) % categories.len()].to_owned()],
                _ => Vec::new(),
            },
            timing: timings[index % timings.len()]
                .iter()
                .map(|t| (*t).to_owned())
                .collect(),
            ..Food::default()
        })
        .collect();
    FoodCatalog::from_foods(foods)
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("synergy_index_build");
    for size in CATALOG_SIZES {
        let catalog = generate_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| SynergyIndex::build(black_box(&catalog.foods)));
        });
    }
    group.finish();
}

fn bench_rank_populated(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_populated_selection");
    let engine = SuggestionEngine::new();
    for size in CATALOG_SIZES {
        let catalog = generate_catalog(size);
        let index = SynergyIndex::build(&catalog.foods);
        let selected = vec![
            "food-0".to_owned(),
            "food-1".to_owned(),
            "food-2".to_owned(),
        ];
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                engine.rank(
                    black_box(&selected),
                    MealType::Lunch,
                    black_box(catalog),
                    &index,
                )
            });
        });
    }
    group.finish();
}

fn bench_rank_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_empty_selection");
    let engine = SuggestionEngine::new();
    let no_selection: Vec<String> = Vec::new();
    for size in CATALOG_SIZES {
        let catalog = generate_catalog(size);
        let index = SynergyIndex::build(&catalog.foods);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                engine.rank(
                    black_box(&no_selection),
                    MealType::Breakfast,
                    black_box(catalog),
                    &index,
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_index_build,
    bench_rank_populated,
    bench_rank_empty
);
criterion_main!(benches);
