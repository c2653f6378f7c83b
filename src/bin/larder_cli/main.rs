// ABOUTME: Larder CLI - command-line tool for catalog tooling and suggestions
// ABOUTME: Validates and aggregates food records, ranks suggestions, analyzes meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods
//!
//! Usage:
//! ```bash
//! # Validate per-food record files before shipping them
//! larder-cli catalog validate --dir data/foods
//!
//! # Aggregate per-food files into a bundle
//! larder-cli catalog aggregate --dir data/foods --output public/foods-bundle.json
//!
//! # Rank suggested additions for a meal
//! larder-cli suggest --bundle public/foods-bundle.json --meal breakfast --selected food-1,food-7
//!
//! # Analyze the synergies inside a meal
//! larder-cli analyze --bundle public/foods-bundle.json --meal lunch --foods food-1,food-2
//! ```

mod commands;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use larder::logging::LoggingConfig;
use larder_core::models::MealType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "larder-cli",
    about = "Larder food catalog and suggestion CLI",
    long_about = "Command-line tool for validating and aggregating food catalog records, \
                  ranking meal suggestions, and analyzing menu synergies."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Catalog tooling commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Rank suggested additions for a meal slot
    Suggest {
        /// Path to the aggregated foods bundle
        #[arg(long)]
        bundle: PathBuf,

        /// Meal slot (breakfast, lunch, dinner)
        #[arg(long)]
        meal: String,

        /// Comma-separated ids of foods already in the meal
        #[arg(long)]
        selected: Option<String>,

        /// Show at most this many suggestions
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Analyze synergies and conflicts inside a meal
    Analyze {
        /// Path to the aggregated foods bundle
        #[arg(long)]
        bundle: PathBuf,

        /// Meal slot (breakfast, lunch, dinner)
        #[arg(long)]
        meal: String,

        /// Comma-separated ids of the foods in the meal
        #[arg(long)]
        foods: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CatalogCommand {
    /// Validate per-food record files
    Validate {
        /// Directory of per-food JSON files
        #[arg(long)]
        dir: PathBuf,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Aggregate per-food record files into a bundle
    Aggregate {
        /// Directory of per-food JSON files
        #[arg(long)]
        dir: PathBuf,

        /// Output bundle path
        #[arg(long)]
        output: PathBuf,
    },
}

fn parse_meal(meal: &str) -> Result<MealType> {
    MealType::parse(meal)
        .ok_or_else(|| anyhow!("'{meal}' is not a meal slot (use breakfast, lunch, or dinner)"))
}

fn parse_ids(ids: &str) -> Vec<String> {
    ids.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    match cli.command {
        Command::Catalog { action } => match action {
            CatalogCommand::Validate { dir, strict } => commands::validate(&dir, strict).await,
            CatalogCommand::Aggregate { dir, output } => commands::aggregate(&dir, &output).await,
        },
        Command::Suggest {
            bundle,
            meal,
            selected,
            limit,
        } => {
            let meal = parse_meal(&meal)?;
            let selected = selected.as_deref().map(parse_ids).unwrap_or_default();
            commands::suggest(&bundle, meal, &selected, limit).await
        }
        Command::Analyze {
            bundle,
            meal,
            foods,
        } => {
            let meal = parse_meal(&meal)?;
            let foods = parse_ids(&foods);
            commands::analyze(&bundle, meal, &foods).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_parsing_accepts_slots_only() {
        assert!(parse_meal("breakfast").is_ok());
        assert!(parse_meal("Lunch").is_ok());
        assert!(parse_meal("snacks").is_err());
        assert!(parse_meal("brunch").is_err());
    }

    #[test]
    fn id_lists_tolerate_spaces_and_trailing_commas() {
        assert_eq!(parse_ids("f1, f2,"), vec!["f1", "f2"]);
        assert!(parse_ids("").is_empty());
    }
}
