// ABOUTME: Data model for pantry rows, recipe ingredient entries, and match reports
// ABOUTME: All types are plain serde-serializable values; the engine never mutates its inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! Core data types shared across the normalization, matching, and ranking
//! modules.
//!
//! Pantry rows and candidate recipes are owned by the persistence layer; this
//! crate only reads them. Match reports and suggestion rows are produced
//! fresh per query and never cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::normalize;

/// A user-owned ingredient record with both a raw and a canonical name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Stable row identifier assigned by the persistence layer
    pub id: Uuid,
    /// Name exactly as the user entered it
    pub ingredient_name: String,
    /// Canonical searchable form; empty when the persistence layer has not
    /// backfilled it yet (the matcher re-derives it on the fly)
    pub cleaned_name: String,
    /// Free-text quantity, e.g. "2 tins"
    pub quantity: Option<String>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Row creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl PantryItem {
    /// Build a pantry item from a user-entered name, deriving the canonical
    /// form immediately
    #[must_use]
    pub fn new(ingredient_name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            ingredient_name: ingredient_name.trim().to_owned(),
            cleaned_name: normalize::normalize(ingredient_name),
            quantity: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Canonical name, derived from the raw name when the stored one is empty
    #[must_use]
    pub fn canonical_name(&self) -> String {
        if self.cleaned_name.is_empty() {
            normalize::normalize(&self.ingredient_name)
        } else {
            self.cleaned_name.clone()
        }
    }
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredientEntry {
    /// Zero-based position within the recipe's ingredient list
    pub position: usize,
    /// Raw scraped ingredient line, e.g. "3 tbsp extra virgin olive oil"
    pub ingredient_text: String,
    /// Optional subsection label, e.g. "For the sauce:"
    pub group_label: Option<String>,
}

impl RecipeIngredientEntry {
    /// Build an entry from a raw line at the given list position
    #[must_use]
    pub fn new(position: usize, ingredient_text: &str) -> Self {
        Self {
            position,
            ingredient_text: ingredient_text.trim().to_owned(),
            group_label: None,
        }
    }
}

/// Candidate recipe metadata used by the suggestion ranker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CandidateRecipe {
    /// Recipe identifier when the source provides one
    pub id: Option<String>,
    /// Recipe title
    pub title: String,
    /// Source page URL; also the preferred dedup key
    pub source_url: Option<String>,
    /// Cover image URL
    pub image_url: Option<String>,
    /// Preparation time as displayed, e.g. "15 mins"
    pub prep_time: Option<String>,
    /// Cooking time as displayed
    pub cook_time: Option<String>,
    /// Raw ingredient lines as scraped
    pub ingredients: Vec<String>,
}

/// The matching strategy that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Canonical names are identical
    Exact,
    /// Plural-stemmed names are identical
    Normalized,
    /// One canonical name contains the other
    Substring,
    /// Names belong to the same synonym group
    Synonym,
    /// Edit-distance similarity cleared the threshold
    Fuzzy,
    /// Token overlap cleared the threshold
    Partial,
    /// No strategy produced a candidate
    #[default]
    None,
}

impl MatchType {
    /// Fixed score for strategies that do not compute one
    ///
    /// Fuzzy and partial matches carry a computed score instead.
    #[must_use]
    pub const fn base_score(self) -> Option<f64> {
        match self {
            Self::Exact => Some(1.0),
            Self::Normalized => Some(0.95),
            Self::Substring => Some(0.9),
            Self::Synonym => Some(0.85),
            Self::Fuzzy | Self::Partial | Self::None => None,
        }
    }

    /// Whether this strategy produced a pantry item at all
    #[must_use]
    pub const fn is_match(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Per-ingredient result of matching one recipe against a pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// The recipe entry this report describes
    pub ingredient: RecipeIngredientEntry,
    /// Raw ingredient line (mirrors `ingredient.ingredient_text`)
    pub ingredient_text: String,
    /// Canonical form of the ingredient line
    pub cleaned_ingredient: String,
    /// Best pantry match, if any strategy produced one
    pub pantry_match: Option<PantryItem>,
    /// Score of the best match, 0 when none
    pub match_score: f64,
    /// Strategy that produced the match; `None` iff `pantry_match` is absent
    pub match_type: MatchType,
    /// Whether the match clears the configured threshold
    pub in_pantry: bool,
}

/// Counts of how many ingredients each strategy matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StrategyBreakdown {
    /// Exact canonical-name matches
    pub exact: usize,
    /// Plural-stemmed matches
    pub normalized: usize,
    /// Containment matches
    pub substring: usize,
    /// Synonym-group matches
    pub synonym: usize,
    /// Edit-distance matches
    pub fuzzy: usize,
    /// Token-overlap matches
    pub partial: usize,
}

impl StrategyBreakdown {
    /// Record one report's strategy
    pub fn record(&mut self, match_type: MatchType) {
        match match_type {
            MatchType::Exact => self.exact += 1,
            MatchType::Normalized => self.normalized += 1,
            MatchType::Substring => self.substring += 1,
            MatchType::Synonym => self.synonym += 1,
            MatchType::Fuzzy => self.fuzzy += 1,
            MatchType::Partial => self.partial += 1,
            MatchType::None => {}
        }
    }

    /// Total matches across all strategies
    #[must_use]
    pub const fn total(&self) -> usize {
        self.exact + self.normalized + self.substring + self.synonym + self.fuzzy + self.partial
    }
}

/// Full pantry status of one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMatchSummary {
    /// Recipe identifier, when known
    pub recipe_id: Option<String>,
    /// One report per ingredient, in recipe order
    pub reports: Vec<MatchReport>,
    /// Number of ingredients in the recipe
    pub total_ingredients: usize,
    /// Number of ingredients judged present in the pantry
    pub matched_count: usize,
    /// Reports for the ingredients still missing
    pub missing_ingredients: Vec<MatchReport>,
    /// `matched_count / total_ingredients * 100`, 0 for an empty recipe
    pub match_percentage: f64,
    /// How many matches each strategy contributed
    pub breakdown: StrategyBreakdown,
}

/// One ranked entry in a recipe suggestion list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedRecipe {
    /// Dedup key: source URL when present, otherwise the recipe id
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Cover image URL
    pub image_url: Option<String>,
    /// Preparation time as displayed
    pub prep_time: Option<String>,
    /// Cooking time as displayed
    pub cook_time: Option<String>,
    /// Source page URL
    pub source_url: Option<String>,
    /// Number of ingredients in the recipe
    pub total_ingredients: usize,
    /// Number of ingredients found in the pantry
    pub pantry_matches: usize,
    /// Percentage of ingredients covered, rounded to one decimal place
    pub match_percentage: f64,
}

/// Coarse grocery category inferred from a canonical name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Milk, cheese, butter, cream, yogurt
    Dairy,
    /// Chicken, beef, pork, lamb, turkey, bacon
    Meat,
    /// Fish and shellfish
    Seafood,
    /// Fresh vegetables
    Vegetables,
    /// Fresh fruit
    Fruits,
    /// Rice, pasta, bread, flour, oats
    Grains,
    /// Herbs and seasonings
    Spices,
    /// Oils and vinegars
    Oils,
    /// Shelf-stable baking staples
    Pantry,
    /// Anything not covered above
    Other,
}

impl IngredientCategory {
    /// Human-readable label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Seafood => "Seafood",
            Self::Vegetables => "Vegetables",
            Self::Fruits => "Fruits",
            Self::Grains => "Grains",
            Self::Spices => "Spices",
            Self::Oils => "Oils",
            Self::Pantry => "Pantry",
            Self::Other => "Other",
        }
    }
}
