// ABOUTME: Domain constants organized by concern for the Larder platform
// ABOUTME: Timing tag vocabulary and Daily Dozen guideline requirements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Foods

//! Constants module
//!
//! Pure data constants grouped by domain. The timing vocabulary mirrors the
//! tags used in catalog records; the scorer only interprets the meal-slot
//! tags and `any-meal`, every other tag is descriptive.

/// Meal timing tags recognized across the platform.
pub mod timing_tags {
    /// Matches every meal slot
    pub const ANY_MEAL: &str = "any-meal";
    /// Breakfast slot tag
    pub const BREAKFAST: &str = "breakfast";
    /// Lunch slot tag
    pub const LUNCH: &str = "lunch";
    /// Dinner slot tag
    pub const DINNER: &str = "dinner";
    /// Snack tag (not a planner slot)
    pub const SNACKS: &str = "snacks";

    /// Tags the scorer interprets. Catalog validation reports anything else
    /// as descriptive-only so data entry typos surface early.
    pub const SCORED: [&str; 5] = [ANY_MEAL, BREAKFAST, LUNCH, DINNER, SNACKS];

    /// Descriptive tags seen in catalog data that are valid but ignored by
    /// the scorer.
    pub const DESCRIPTIVE: [&str; 6] = [
        "earlier-in-meal",
        "with-each-meal",
        "particularly-effective-in-soups",
        "in-cooking",
        "daily",
        "can-sprinkle-on-meals",
    ];
}

/// Daily Dozen style guideline requirements used by menu analysis
/// recommendations.
pub mod daily_dozen {
    /// One guideline entry: a category tag and the servings it calls for.
    #[derive(Debug, Clone, Copy)]
    pub struct Requirement {
        /// Category tag the requirement counts
        pub category: &'static str,
        /// Servings needed per day
        pub needed: usize,
        /// Display label for recommendations
        pub label: &'static str,
    }

    /// Per-day category requirements checked by day-level analysis.
    pub const REQUIREMENTS: [Requirement; 5] = [
        Requirement {
            category: "rich-in-legumes",
            needed: 3,
            label: "Beans (3 servings)",
        },
        Requirement {
            category: "greens",
            needed: 2,
            label: "Greens (2 servings)",
        },
        Requirement {
            category: "rich-in-whole-grains",
            needed: 3,
            label: "Whole Grains (3 servings)",
        },
        Requirement {
            category: "rich-in-fruits",
            needed: 1,
            label: "Berries/Fruits (1 serving)",
        },
        Requirement {
            category: "cruciferous",
            needed: 1,
            label: "Cruciferous Vegetables (1 serving)",
        },
    ];

    /// Category tag expected to appear in any anti-inflammatory meal.
    pub const ANTI_INFLAMMATORY: &str = "anti-inflammatory";

    /// Category tag for fiber-forward foods.
    pub const HIGH_FIBER: &str = "high-fiber";

    /// Minimum distinct categories before a meal counts as diverse.
    pub const MIN_MEAL_CATEGORY_DIVERSITY: usize = 3;
}
