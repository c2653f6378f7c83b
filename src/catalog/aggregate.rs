// ABOUTME: Build-time aggregation of per-food JSON files into a single bundle
// ABOUTME: Skips malformed files with warnings, sorts by id, rejects duplicate ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use chrono::Utc;
use larder_core::errors::CatalogError;
use larder_core::models::{ExtractionMetadata, Food, FoodCatalog};
use std::path::Path;
use tracing::{info, warn};

/// Read every `*.json` file in a directory of per-food records and combine
/// them into one catalog.
///
/// Files that fail to parse, or whose records lack an id or name, are
/// skipped with a warning; one bad record must not break the bundle.
/// Records are sorted by id for stable output and easy diffs; duplicate ids
/// across files are an error.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the directory or a file cannot be
/// read, and [`CatalogError::DuplicateId`] when two records share an id.
pub async fn aggregate_foods_dir(dir: &Path) -> Result<FoodCatalog, CatalogError> {
    let dir_display = dir.display().to_string();
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| CatalogError::io(dir_display.clone(), e))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| CatalogError::io(dir_display.clone(), e))?
    {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    // Directory iteration order is OS-dependent; sort for determinism.
    paths.sort();

    let mut foods: Vec<Food> = Vec::with_capacity(paths.len());
    let mut skipped = 0_usize;
    for path in &paths {
        let file_display = path.display().to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CatalogError::io(file_display.clone(), e))?;
        match serde_json::from_slice::<Food>(&bytes) {
            Ok(food) if !food.id.is_empty() && !food.name.is_empty() => foods.push(food),
            Ok(food) => {
                warn!(file = %file_display, id = %food.id, "skipping record with missing id or name");
                skipped += 1;
            }
            Err(err) => {
                warn!(file = %file_display, error = %err, "skipping unparseable food file");
                skipped += 1;
            }
        }
    }

    foods.sort_by(|a, b| a.id.cmp(&b.id));

    let mut catalog = FoodCatalog {
        extraction_metadata: ExtractionMetadata {
            extraction_date: Some(Utc::now()),
            source_document: dir_display.clone(),
            focus_areas: Vec::new(),
        },
        foods,
    };
    catalog.check_unique_ids()?;
    catalog.normalize();

    info!(
        dir = %dir_display,
        foods = catalog.foods.len(),
        skipped,
        "aggregated food records"
    );
    Ok(catalog)
}

/// Write a catalog as a pretty-printed bundle file.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be written, or
/// [`CatalogError::Parse`] if the catalog fails to serialize.
pub async fn write_bundle(catalog: &FoodCatalog, path: &Path) -> Result<(), CatalogError> {
    let path_display = path.display().to_string();
    let json = serde_json::to_vec_pretty(catalog)
        .map_err(|e| CatalogError::parse(path_display.clone(), e))?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| CatalogError::io(path_display.clone(), e))?;
    info!(bundle = %path_display, foods = catalog.foods.len(), "wrote bundle");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_food(dir: &Path, file: &str, content: &str) {
        std::fs::write(dir.join(file), content)
            .unwrap_or_else(|e| panic!("write {file}: {e}"));
    }

    #[tokio::test]
    async fn aggregates_and_sorts_by_id() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        write_food(dir.path(), "b.json", r#"{"id":"food-2","name":"Kale"}"#);
        write_food(dir.path(), "a.json", r#"{"id":"food-10","name":"Oats"}"#);

        let catalog = aggregate_foods_dir(dir.path())
            .await
            .unwrap_or_else(|e| panic!("aggregate: {e}"));
        let ids: Vec<&str> = catalog.foods.iter().map(|f| f.id.as_str()).collect();
        // Lexicographic id order, matching the bundle build convention.
        assert_eq!(ids, vec!["food-10", "food-2"]);
        assert!(catalog.extraction_metadata.extraction_date.is_some());
    }

    #[tokio::test]
    async fn skips_malformed_files() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        write_food(dir.path(), "good.json", r#"{"id":"food-1","name":"Oats"}"#);
        write_food(dir.path(), "bad.json", "{broken");
        write_food(dir.path(), "nameless.json", r#"{"id":"food-2"}"#);
        write_food(dir.path(), "notes.txt", "not a food");

        let catalog = aggregate_foods_dir(dir.path())
            .await
            .unwrap_or_else(|e| panic!("aggregate: {e}"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.foods[0].id, "food-1");
    }

    #[tokio::test]
    async fn duplicate_ids_fail_aggregation() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        write_food(dir.path(), "a.json", r#"{"id":"food-1","name":"Oats"}"#);
        write_food(dir.path(), "b.json", r#"{"id":"food-1","name":"Kale"}"#);

        let err = aggregate_foods_dir(dir.path()).await;
        assert!(matches!(err, Err(CatalogError::DuplicateId { .. })));
    }

    #[tokio::test]
    async fn bundle_round_trips_through_write() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        write_food(dir.path(), "a.json", r#"{"id":"food-1","name":"Oats"}"#);

        let catalog = aggregate_foods_dir(dir.path())
            .await
            .unwrap_or_else(|e| panic!("aggregate: {e}"));
        let bundle_path = dir.path().join("foods-bundle.json");
        write_bundle(&catalog, &bundle_path)
            .await
            .unwrap_or_else(|e| panic!("write bundle: {e}"));

        let bytes = std::fs::read(&bundle_path).unwrap_or_else(|e| panic!("read: {e}"));
        let back: FoodCatalog =
            serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("parse: {e}"));
        assert_eq!(back.len(), 1);
    }
}
