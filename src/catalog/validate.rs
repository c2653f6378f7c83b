// ABOUTME: Structural validation of per-food JSON record files
// ABOUTME: Catches schema violations and data-entry typos before aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

use larder_core::constants::timing_tags;
use larder_core::errors::CatalogError;
use larder_core::models::Food;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::info;

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The record cannot ship (unparseable, missing identity, id collision)
    Error,
    /// The record ships but looks like a data-entry mistake
    Warning,
}

/// One finding against one file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// File the finding is about
    pub file: String,
    /// Finding severity
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: [{tag}] {}", self.file, self.message)
    }
}

/// The outcome of validating a directory of food files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Number of files examined
    pub files_checked: usize,
    /// All findings, in file order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Number of error-severity findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Whether the directory is free of error-severity findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    fn error(&mut self, file: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            file: file.to_owned(),
            severity: Severity::Error,
            message: message.into(),
        });
    }

    fn warning(&mut self, file: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            file: file.to_owned(),
            severity: Severity::Warning,
            message: message.into(),
        });
    }
}

/// Validate every `*.json` food file in a directory.
///
/// Errors: unparseable JSON, missing id or name, duplicate ids. Warnings:
/// ids outside the `food-{number}` convention, duplicate names (a later
/// record shadows the earlier one in the synergy index), unknown timing
/// tags, and empty timing (the food can never be suggested for any slot).
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the directory or a file cannot be
/// read. Findings inside the files land in the report, not in `Err`.
pub async fn validate_foods_dir(dir: &Path) -> Result<ValidationReport, CatalogError> {
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
    paths.sort();

    let mut report = ValidationReport::default();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for path in &paths {
        report.files_checked += 1;
        let file = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CatalogError::io(path.display().to_string(), e))?;

        let food: Food = match serde_json::from_slice(&bytes) {
            Ok(food) => food,
            Err(err) => {
                report.error(&file, format!("unparseable JSON: {err}"));
                continue;
            }
        };

        check_record(&food, &file, &mut report, &mut seen_ids, &mut seen_names);
    }

    info!(
        dir = %dir_display,
        files = report.files_checked,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated food records"
    );
    Ok(report)
}

fn check_record(
    food: &Food,
    file: &str,
    report: &mut ValidationReport,
    seen_ids: &mut HashSet<String>,
    seen_names: &mut HashSet<String>,
) {
    if food.id.is_empty() {
        report.error(file, "missing required field 'id'");
    } else {
        if !seen_ids.insert(food.id.clone()) {
            report.error(file, format!("duplicate id '{}'", food.id));
        }
        if !is_conventional_id(&food.id) {
            report.warning(
                file,
                format!("id '{}' does not match the 'food-{{number}}' convention", food.id),
            );
        }
    }

    if food.name.is_empty() {
        report.error(file, "missing required field 'name'");
    } else if !seen_names.insert(food.normalized_name()) {
        report.warning(
            file,
            format!(
                "duplicate name '{}' shadows an earlier record in the synergy index",
                food.name
            ),
        );
    }

    if food.categories.is_empty() {
        report.warning(file, "no categories; redundancy scoring cannot apply");
    }

    if food.timing.is_empty() {
        report.warning(file, "no timing tags; food can never be suggested for a meal");
    }
    for tag in &food.timing {
        let known = timing_tags::SCORED.contains(&tag.as_str())
            || timing_tags::DESCRIPTIVE.contains(&tag.as_str());
        if !known {
            report.warning(file, format!("unknown timing tag '{tag}'"));
        }
    }

    for synergy in &food.synergies {
        if synergy.trim().is_empty() {
            report.warning(file, "empty synergy string matches every food");
        }
    }
}

/// The `food-{number}` id convention used across the catalog.
fn is_conventional_id(id: &str) -> bool {
    id.strip_prefix("food-")
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}
