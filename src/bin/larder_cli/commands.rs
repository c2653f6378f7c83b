// ABOUTME: Command implementations for the Larder CLI
// ABOUTME: Catalog validate/aggregate and engine-backed suggest/analyze output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use anyhow::{bail, Result};
use larder::catalog::{
    aggregate_foods_dir, validate_foods_dir, write_bundle, BundleProvider, CatalogProvider,
};
use larder::intelligence::{MenuAnalyzer, SuggestionEngine, SuggestionTier, SynergyIndex};
use larder_core::models::{FoodCatalog, MealType};
use std::path::Path;

/// Validate a directory of per-food files and print the findings.
pub async fn validate(dir: &Path, strict: bool) -> Result<()> {
    let report = validate_foods_dir(dir).await?;

    for issue in &report.issues {
        println!("{issue}");
    }
    println!(
        "\n{} files checked: {} error(s), {} warning(s)",
        report.files_checked,
        report.error_count(),
        report.warning_count()
    );

    if !report.is_clean() {
        bail!("validation failed with {} error(s)", report.error_count());
    }
    if strict && report.warning_count() > 0 {
        bail!(
            "validation failed in strict mode with {} warning(s)",
            report.warning_count()
        );
    }
    println!("All validations passed");
    Ok(())
}

/// Aggregate per-food files into a bundle file.
pub async fn aggregate(dir: &Path, output: &Path) -> Result<()> {
    let catalog = aggregate_foods_dir(dir).await?;
    write_bundle(&catalog, output).await?;
    println!(
        "Aggregated {} foods into {}",
        catalog.len(),
        output.display()
    );
    Ok(())
}

/// Rank and print suggested additions for a meal slot.
pub async fn suggest(
    bundle: &Path,
    meal: MealType,
    selected: &[String],
    limit: usize,
) -> Result<()> {
    let (catalog, index) = load(bundle).await?;
    let engine = SuggestionEngine::new();
    let suggestions = engine.rank(selected, meal, &catalog, &index);

    if suggestions.is_empty() {
        println!("No suggestions for {meal}");
        return Ok(());
    }

    for (position, suggestion) in suggestions.iter().take(limit).enumerate() {
        let marker = match suggestion.tier {
            SuggestionTier::Excellent => " [excellent]",
            SuggestionTier::Good => " [good]",
            SuggestionTier::Neutral => "",
        };
        println!(
            "{}. {} (score {}){marker}",
            position + 1,
            suggestion.food.name,
            suggestion.score
        );
        for entry in &suggestion.breakdown {
            println!("     +{} with {}", entry.score, entry.with_food);
        }
    }
    Ok(())
}

/// Analyze and print the synergies inside a meal.
pub async fn analyze(bundle: &Path, meal: MealType, foods: &[String]) -> Result<()> {
    let (catalog, index) = load(bundle).await?;
    let analyzer = MenuAnalyzer::new();
    let analysis = analyzer.analyze_meal_foods(foods, meal, &catalog, &index);

    println!(
        "Meal: {} ({} foods, total synergy {})",
        analysis.foods_included.join(", "),
        analysis.foods_included.len(),
        analysis.total_score
    );
    for pair in &analysis.synergy_pairs {
        println!("  +{} {} / {}", pair.score, pair.food_a, pair.food_b);
    }
    for conflict in &analysis.conflict_pairs {
        println!("  ! conflict: {} / {}", conflict.food_a, conflict.food_b);
    }
    if !analysis.timing_optimal {
        println!("  note: some foods are better suited to other meal times");
    }
    if !analysis.recommendations.is_empty() {
        println!("Recommendations:");
        for recommendation in &analysis.recommendations {
            println!("  - {recommendation}");
        }
    }
    Ok(())
}

async fn load(bundle: &Path) -> Result<(FoodCatalog, SynergyIndex)> {
    let provider = BundleProvider::new(bundle);
    let catalog = provider.load_catalog().await?;
    let index = SynergyIndex::build(&catalog.foods);
    Ok((catalog, index))
}
