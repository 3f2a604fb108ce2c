// ABOUTME: Library entry point for the pantry-match ingredient matching engine
// ABOUTME: Normalizes scraped ingredient lines, matches them against pantries, ranks recipe suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

#![deny(unsafe_code)]

//! # Pantry Match
//!
//! A multi-strategy text-normalization and approximate-matching engine for
//! recipe ingredients. Given free-text recipe ingredient lines and a user's
//! free-text pantry inventory, it decides which ingredients the user already
//! owns, with what confidence, and ranks candidate recipes by the fraction
//! of their ingredients the pantry covers.
//!
//! ## Pipeline
//!
//! Raw ingredient lines and pantry rows flow through normalization
//! ([`normalize`]), the cascading match engine ([`matching`], backed by
//! [`similarity`] and [`synonyms`]), batch matching, and suggestion ranking
//! ([`suggestions`]).
//!
//! Everything is pure, synchronous, and side-effect-free: the synonym table
//! is read-only after first access, no inputs are mutated, and nothing is
//! cached between calls, so all entry points are safe to invoke from any
//! number of threads. Fetching pantry rows, recipe metadata, and candidate
//! lists is the caller's concern.
//!
//! Inputs are uncontrolled scraped text, so the engine never fails on
//! malformed data — it degrades to an empty canonical name or "no match"
//! instead.
//!
//! ## Example
//!
//! ```rust
//! use pantry_match::matching::MatchEngine;
//! use pantry_match::models::{MatchType, PantryItem};
//!
//! let pantry = vec![PantryItem::new("Tomatoes"), PantryItem::new("Olive Oil")];
//! let engine = MatchEngine::new();
//!
//! let outcome = engine
//!     .find_best_match("3 tbsp extra virgin olive oil", &pantry)
//!     .unwrap();
//! assert_eq!(outcome.match_type, MatchType::Exact);
//! assert_eq!(outcome.item.cleaned_name, "olive oil");
//! ```

/// Canonical ingredient resolution against a known-name catalog
pub mod catalog;

/// Engine configuration with environment overrides
pub mod config;

/// Crate error types for the configuration and logging surface
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Cascading match engine and batch matcher
pub mod matching;

/// Data model for pantry rows, recipe entries, and match reports
pub mod models;

/// Ingredient-line normalization and plural stemming
pub mod normalize;

/// Levenshtein similarity scoring
pub mod similarity;

/// Recipe suggestion ranking
pub mod suggestions;

/// US/UK ingredient synonym table
pub mod synonyms;

/// Display-text cleanup for scraped lines
pub mod tidy;

/// URL helpers for dedup keys and recipe-page detection
pub mod urls;

pub use config::MatcherConfig;
pub use errors::{EngineError, EngineResult};
pub use matching::{MatchEngine, MatchOutcome};
pub use models::{
    CandidateRecipe, MatchReport, MatchType, PantryItem, RecipeIngredientEntry,
    RecipeMatchSummary, StrategyBreakdown, SuggestedRecipe,
};
pub use suggestions::{RankingStrategy, SuggestionRanker};
