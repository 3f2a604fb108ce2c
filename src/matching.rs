// ABOUTME: Cascading match engine scoring recipe ingredients against pantry items
// ABOUTME: Exact, plural-normalized, substring, synonym, fuzzy, and word-overlap strategies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! # Match Engine
//!
//! [`MatchEngine::find_best_match`] scores one recipe ingredient line
//! against every pantry item through a cascade of strategies:
//!
//! 1. **exact** (1.0) — canonical names identical, returns immediately
//! 2. **normalized** (0.95) — plural stems identical, returns immediately
//! 3. **substring** (0.9) — one canonical name contains the other
//! 4. **synonym** (0.85) — same synonym group
//! 5. **fuzzy** — edit-distance similarity, kept when it clears the threshold
//! 6. **partial** — token overlap ratio, kept when it clears the threshold
//!
//! Strategies 3-6 accumulate candidates across the whole pantry; a candidate
//! replaces the incumbent only on a strictly greater score, so the first
//! pantry item seen wins ties. Pantry slice order is therefore part of the
//! contract.
//!
//! [`MatchEngine::match_all`] runs the cascade over a full recipe and tags
//! each report with the `in_pantry` decision, reusing the same configured
//! threshold the cascade applied.

use tracing::debug;

use crate::config::MatcherConfig;
use crate::models::{MatchReport, MatchType, PantryItem, RecipeIngredientEntry};
use crate::normalize;
use crate::similarity::similarity;
use crate::synonyms::SynonymTable;

/// Best pantry match for a single recipe ingredient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOutcome<'a> {
    /// The pantry item that matched
    pub item: &'a PantryItem,
    /// Strategy score in `[0, 1]`
    pub score: f64,
    /// Strategy that produced the match
    pub match_type: MatchType,
}

/// Cascading ingredient matcher
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatcherConfig,
}

impl MatchEngine {
    /// Engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom configuration
    #[must_use]
    pub const fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Find the best pantry match for one raw ingredient line.
    ///
    /// Returns `None` for empty input, an empty pantry, a line that
    /// normalizes to nothing, or when no strategy clears its floor. Never
    /// fails on malformed text.
    #[must_use]
    pub fn find_best_match<'a>(
        &self,
        raw_ingredient: &str,
        pantry: &'a [PantryItem],
    ) -> Option<MatchOutcome<'a>> {
        if raw_ingredient.trim().is_empty() || pantry.is_empty() {
            return None;
        }

        let cleaned_recipe = normalize::normalize(raw_ingredient);
        if cleaned_recipe.is_empty() {
            return None;
        }
        let norm_recipe = normalize::stem(&cleaned_recipe);
        let table = SynonymTable::global();
        let threshold = self.config.match_threshold;

        let mut best: Option<MatchOutcome<'a>> = None;
        let mut best_score = 0.0_f64;
        let mut keep = |candidate: MatchOutcome<'a>, best: &mut Option<MatchOutcome<'a>>| {
            if candidate.score > best_score {
                best_score = candidate.score;
                *best = Some(candidate);
            }
        };

        for item in pantry {
            let cleaned_pantry = item.canonical_name();
            // An empty canonical name would substring-match everything
            if cleaned_pantry.is_empty() {
                continue;
            }
            let norm_pantry = normalize::stem(&cleaned_pantry);

            if cleaned_recipe == cleaned_pantry {
                debug!(ingredient = %cleaned_recipe, pantry = %cleaned_pantry, "exact match");
                return Some(MatchOutcome {
                    item,
                    score: 1.0,
                    match_type: MatchType::Exact,
                });
            }

            if norm_recipe == norm_pantry {
                debug!(ingredient = %cleaned_recipe, pantry = %cleaned_pantry, "normalized match");
                return Some(MatchOutcome {
                    item,
                    score: 0.95,
                    match_type: MatchType::Normalized,
                });
            }

            if cleaned_recipe.contains(&cleaned_pantry) || cleaned_pantry.contains(&cleaned_recipe)
            {
                keep(
                    MatchOutcome {
                        item,
                        score: 0.9,
                        match_type: MatchType::Substring,
                    },
                    &mut best,
                );
            }

            if table.are_synonyms(&norm_recipe, &norm_pantry) {
                keep(
                    MatchOutcome {
                        item,
                        score: 0.85,
                        match_type: MatchType::Synonym,
                    },
                    &mut best,
                );
            }

            let fuzzy = similarity(&norm_recipe, &norm_pantry);
            if fuzzy >= threshold {
                keep(
                    MatchOutcome {
                        item,
                        score: fuzzy,
                        match_type: MatchType::Fuzzy,
                    },
                    &mut best,
                );
            }

            if let Some(overlap) = word_overlap(&norm_recipe, &norm_pantry) {
                if overlap >= threshold {
                    keep(
                        MatchOutcome {
                            item,
                            score: overlap,
                            match_type: MatchType::Partial,
                        },
                        &mut best,
                    );
                }
            }
        }

        if let Some(outcome) = &best {
            debug!(
                ingredient = %cleaned_recipe,
                pantry = %outcome.item.canonical_name(),
                score = outcome.score,
                match_type = ?outcome.match_type,
                "best cascade match"
            );
        }
        best
    }

    /// Resolve a new ingredient name against known catalog names, using the
    /// configured auto-alias threshold.
    ///
    /// Returns `None` when the name normalizes to nothing.
    #[must_use]
    pub fn resolve_catalog_name<S: AsRef<str>>(
        &self,
        raw_name: &str,
        known: &[S],
    ) -> Option<crate::catalog::CanonicalResolution> {
        crate::catalog::resolve_canonical(raw_name, known, self.config.alias_threshold)
    }

    /// Match every ingredient of one recipe against a pantry.
    ///
    /// One report per input entry, in input order. A malformed entry yields
    /// `in_pantry = false` instead of aborting the batch.
    #[must_use]
    pub fn match_all(
        &self,
        ingredients: &[RecipeIngredientEntry],
        pantry: &[PantryItem],
    ) -> Vec<MatchReport> {
        ingredients
            .iter()
            .map(|entry| {
                let outcome = self.find_best_match(&entry.ingredient_text, pantry);
                MatchReport {
                    ingredient: entry.clone(),
                    ingredient_text: entry.ingredient_text.clone(),
                    cleaned_ingredient: normalize::normalize(&entry.ingredient_text),
                    pantry_match: outcome.as_ref().map(|o| o.item.clone()),
                    match_score: outcome.as_ref().map_or(0.0, |o| o.score),
                    match_type: outcome.as_ref().map_or(MatchType::None, |o| o.match_type),
                    in_pantry: outcome
                        .as_ref()
                        .is_some_and(|o| o.score >= self.config.match_threshold),
                }
            })
            .collect()
    }
}

/// Share of tokens the two names have in common, `None` when disjoint.
///
/// Counts each token of `a` found anywhere in `b`, over the longer token
/// count.
fn word_overlap(a: &str, b: &str) -> Option<f64> {
    let a_tokens: Vec<&str> = a.split(' ').collect();
    let b_tokens: Vec<&str> = b.split(' ').collect();
    let common = a_tokens
        .iter()
        .filter(|token| b_tokens.contains(token))
        .count();

    (common > 0).then(|| common as f64 / a_tokens.len().max(b_tokens.len()) as f64)
}
