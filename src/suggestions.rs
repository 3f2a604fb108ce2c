// ABOUTME: Recipe suggestion ranking against a pantry snapshot
// ABOUTME: Fast containment-only ranking for large candidate sets, full cascade for detail views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! # Suggestion Ranking
//!
//! Two ranking computations share one entry point:
//!
//! - [`SuggestionRanker::recipe_pantry_status`] runs the full match cascade
//!   over one recipe for the detail view: per-ingredient reports, missing
//!   list, per-strategy breakdown, unrounded percentage.
//! - [`SuggestionRanker::rank`] scores many candidate recipes. With
//!   [`RankingStrategy::ExactFast`] an ingredient is a hit when its
//!   canonical name equals a pantry name or either contains the other —
//!   O(ingredients x pantry) string checks, no cascade. With
//!   [`RankingStrategy::ThoroughFuzzy`] every recipe goes through the full
//!   cascade, parallelized across recipes with rayon.
//!
//! The trade-off is deliberate: full-cascade ranking over a large candidate
//! set costs O(recipes x ingredients x pantry) cascade runs, so the cheap
//! containment check is the default for cross-recipe suggestion feeds.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::debug;

use crate::config::MatcherConfig;
use crate::matching::MatchEngine;
use crate::models::{
    CandidateRecipe, MatchReport, PantryItem, RecipeIngredientEntry, RecipeMatchSummary,
    StrategyBreakdown, SuggestedRecipe,
};
use crate::normalize;
use crate::urls;

/// How many "did you mean" alternatives to offer per missing ingredient
const ALTERNATIVES_LIMIT: usize = 5;

/// Which matching algorithm scores candidate recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingStrategy {
    /// Containment-only hit test; cheap enough for large candidate sets
    #[default]
    ExactFast,
    /// Full match cascade per ingredient, parallelized across recipes
    ThoroughFuzzy,
}

/// Ranks candidate recipes by pantry coverage
#[derive(Debug, Clone, Default)]
pub struct SuggestionRanker {
    engine: MatchEngine,
}

impl SuggestionRanker {
    /// Ranker with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranker with custom configuration
    #[must_use]
    pub const fn with_config(config: MatcherConfig) -> Self {
        Self {
            engine: MatchEngine::with_config(config),
        }
    }

    /// Full pantry status for one recipe's ingredient list.
    ///
    /// Percentage is unrounded; the breakdown counts every strategy that
    /// produced a match, whether or not it cleared the pantry threshold.
    #[must_use]
    pub fn recipe_pantry_status(
        &self,
        recipe_id: Option<&str>,
        ingredients: &[RecipeIngredientEntry],
        pantry: &[PantryItem],
    ) -> RecipeMatchSummary {
        let reports = self.engine.match_all(ingredients, pantry);
        let total_ingredients = reports.len();
        let matched_count = reports.iter().filter(|r| r.in_pantry).count();
        let missing_ingredients: Vec<MatchReport> = reports
            .iter()
            .filter(|r| !r.in_pantry)
            .cloned()
            .collect();

        let mut breakdown = StrategyBreakdown::default();
        for report in &reports {
            breakdown.record(report.match_type);
        }

        let match_percentage = if total_ingredients == 0 {
            0.0
        } else {
            matched_count as f64 / total_ingredients as f64 * 100.0
        };

        RecipeMatchSummary {
            recipe_id: recipe_id.map(str::to_owned),
            reports,
            total_ingredients,
            matched_count,
            missing_ingredients,
            match_percentage,
            breakdown,
        }
    }

    /// Rank candidate recipes by the share of their ingredients the pantry
    /// covers.
    ///
    /// Candidates with no ingredients, no stable key, or a source URL in
    /// `saved_urls` are excluded. Percentages are rounded to one decimal
    /// place, the list is sorted descending, and at most
    /// `max_suggestions` entries are returned.
    #[must_use]
    pub fn rank(
        &self,
        candidates: &[CandidateRecipe],
        pantry: &[PantryItem],
        saved_urls: &[String],
        strategy: RankingStrategy,
    ) -> Vec<SuggestedRecipe> {
        let saved: HashSet<&str> = saved_urls.iter().map(String::as_str).collect();
        let eligible: Vec<(&CandidateRecipe, String)> = candidates
            .iter()
            .filter(|candidate| !candidate.ingredients.is_empty())
            .filter(|candidate| {
                candidate
                    .source_url
                    .as_deref()
                    .is_none_or(|u| !saved.contains(u))
            })
            .filter_map(|candidate| {
                urls::suggestion_key(candidate.source_url.as_deref(), candidate.id.as_deref())
                    .map(|key| (candidate, key))
            })
            .collect();

        let mut suggestions: Vec<SuggestedRecipe> = match strategy {
            RankingStrategy::ExactFast => {
                let pantry_names = pantry_name_set(pantry);
                eligible
                    .iter()
                    .map(|(candidate, key)| {
                        let hits = containment_hits(&candidate.ingredients, &pantry_names);
                        suggested(candidate, key, hits)
                    })
                    .collect()
            }
            RankingStrategy::ThoroughFuzzy => eligible
                .par_iter()
                .map(|(candidate, key)| {
                    let entries: Vec<RecipeIngredientEntry> = candidate
                        .ingredients
                        .iter()
                        .enumerate()
                        .map(|(position, text)| RecipeIngredientEntry::new(position, text))
                        .collect();
                    let hits = self
                        .engine
                        .match_all(&entries, pantry)
                        .iter()
                        .filter(|r| r.in_pantry)
                        .count();
                    suggested(candidate, key, hits)
                })
                .collect(),
        };

        suggestions.sort_by(|a, b| {
            b.match_percentage
                .partial_cmp(&a.match_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        suggestions.truncate(self.engine.config().max_suggestions);
        debug!(
            candidates = candidates.len(),
            ranked = suggestions.len(),
            ?strategy,
            "ranked recipe suggestions"
        );
        suggestions
    }

    /// Merge suggestion lists from multiple candidate sources.
    ///
    /// Deduplicates by the stable suggestion key; on collision the entry
    /// with the higher match percentage wins, first-seen on ties. The merged
    /// list is sorted descending by percentage.
    #[must_use]
    pub fn merge(lists: &[Vec<SuggestedRecipe>]) -> Vec<SuggestedRecipe> {
        let mut order: Vec<SuggestedRecipe> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for suggestion in lists.iter().flatten() {
            if suggestion.id.is_empty() {
                continue;
            }
            match index.get(&suggestion.id) {
                Some(&slot) => {
                    if suggestion.match_percentage > order[slot].match_percentage {
                        order[slot] = suggestion.clone();
                    }
                }
                None => {
                    index.insert(suggestion.id.clone(), order.len());
                    order.push(suggestion.clone());
                }
            }
        }

        order.sort_by(|a, b| {
            b.match_percentage
                .partial_cmp(&a.match_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order
    }

    /// Alternative pantry names for an ingredient that matched nothing,
    /// closest first.
    ///
    /// Backs "did you mean" prompts next to missing-ingredient rows; the
    /// similarity floor comes from the configuration.
    #[must_use]
    pub fn suggest_alternatives<S: AsRef<str>>(&self, missing: &str, known: &[S]) -> Vec<String> {
        crate::similarity::suggest_similar(
            missing,
            known,
            self.engine.config().similar_floor,
            ALTERNATIVES_LIMIT,
        )
    }

    /// Final feed: optional minimum-percentage floor, then the configured cap.
    #[must_use]
    pub fn top_suggestions(&self, merged: Vec<SuggestedRecipe>) -> Vec<SuggestedRecipe> {
        let config = self.engine.config();
        let mut feed: Vec<SuggestedRecipe> = match config.min_match_percentage {
            Some(floor) => merged
                .into_iter()
                .filter(|s| s.match_percentage >= floor)
                .collect(),
            None => merged,
        };
        feed.truncate(config.max_suggestions);
        feed
    }
}

/// Canonical pantry names, empty ones dropped so they can never match
fn pantry_name_set(pantry: &[PantryItem]) -> HashSet<String> {
    pantry
        .iter()
        .map(PantryItem::canonical_name)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Containment-only hit count: exact canonical equality or either name
/// containing the other. Lines that normalize to nothing never hit but
/// still count toward the recipe's total.
fn containment_hits(ingredients: &[String], pantry_names: &HashSet<String>) -> usize {
    ingredients
        .iter()
        .filter(|text| {
            let cleaned = normalize::normalize(text);
            if cleaned.is_empty() {
                return false;
            }
            if pantry_names.contains(&cleaned) {
                return true;
            }
            pantry_names
                .iter()
                .any(|name| cleaned.contains(name) || name.contains(&cleaned))
        })
        .count()
}

fn suggested(candidate: &CandidateRecipe, key: &str, hits: usize) -> SuggestedRecipe {
    let total = candidate.ingredients.len();
    let match_percentage = if total == 0 {
        0.0
    } else {
        (hits as f64 / total as f64 * 1000.0).round() / 10.0
    };

    SuggestedRecipe {
        id: key.to_owned(),
        title: candidate.title.clone(),
        image_url: candidate.image_url.clone(),
        prep_time: candidate.prep_time.clone(),
        cook_time: candidate.cook_time.clone(),
        source_url: candidate.source_url.clone(),
        total_ingredients: total,
        pantry_matches: hits,
        match_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry() -> Vec<PantryItem> {
        ["Tomatoes", "Olive Oil", "Flour"]
            .iter()
            .map(|name| PantryItem::new(name))
            .collect()
    }

    fn candidate(url: &str, ingredients: &[&str]) -> CandidateRecipe {
        CandidateRecipe {
            id: None,
            title: format!("Recipe at {url}"),
            source_url: Some(url.to_owned()),
            ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
            ..CandidateRecipe::default()
        }
    }

    fn suggestion(id: &str, pct: f64) -> SuggestedRecipe {
        SuggestedRecipe {
            id: id.to_owned(),
            title: id.to_owned(),
            image_url: None,
            prep_time: None,
            cook_time: None,
            source_url: Some(id.to_owned()),
            total_ingredients: 4,
            pantry_matches: 2,
            match_percentage: pct,
        }
    }

    #[test]
    fn fast_ranking_rounds_to_one_decimal() {
        let ranker = SuggestionRanker::new();
        let candidates = vec![candidate(
            "https://example.com/pasta",
            &["2 cups diced tomatoes", "1 tbsp olive oil", "fresh basil"],
        )];
        let ranked = ranker.rank(&candidates, &pantry(), &[], RankingStrategy::ExactFast);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].pantry_matches, 2);
        assert_eq!(ranked[0].total_ingredients, 3);
        assert!((ranked[0].match_percentage - 66.7).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_ingredient_recipes_are_excluded() {
        let ranker = SuggestionRanker::new();
        let candidates = vec![candidate("https://example.com/empty", &[])];
        assert!(ranker
            .rank(&candidates, &pantry(), &[], RankingStrategy::ExactFast)
            .is_empty());
    }

    #[test]
    fn saved_recipes_are_excluded() {
        let ranker = SuggestionRanker::new();
        let candidates = vec![candidate("https://example.com/saved", &["2 cups tomatoes"])];
        let saved = vec!["https://example.com/saved".to_owned()];
        assert!(ranker
            .rank(&candidates, &pantry(), &saved, RankingStrategy::ExactFast)
            .is_empty());
    }

    #[test]
    fn ranking_sorts_descending() {
        let ranker = SuggestionRanker::new();
        let candidates = vec![
            candidate("https://example.com/low", &["saffron", "quail eggs"]),
            candidate("https://example.com/high", &["tomatoes", "olive oil"]),
        ];
        let ranked = ranker.rank(&candidates, &pantry(), &[], RankingStrategy::ExactFast);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].source_url.as_deref(), Some("https://example.com/high"));
        assert!(ranked[0].match_percentage > ranked[1].match_percentage);
    }

    #[test]
    fn thorough_ranking_counts_cascade_hits() {
        let ranker = SuggestionRanker::new();
        let pantry = vec![PantryItem::new("Scallions"), PantryItem::new("Tomatoes")];
        // Synonym hit the containment check cannot see
        let candidates = vec![candidate(
            "https://example.com/stir-fry",
            &["2 green onions chopped", "1 large tomato"],
        )];

        let fast = ranker.rank(&candidates, &pantry, &[], RankingStrategy::ExactFast);
        let thorough = ranker.rank(&candidates, &pantry, &[], RankingStrategy::ThoroughFuzzy);
        assert!((thorough[0].match_percentage - 100.0).abs() < f64::EPSILON);
        assert!(fast[0].match_percentage < thorough[0].match_percentage);
    }

    #[test]
    fn merge_keeps_higher_percentage() {
        let merged = SuggestionRanker::merge(&[
            vec![suggestion("https://example.com/a", 40.0)],
            vec![suggestion("https://example.com/a", 75.0)],
        ]);
        assert_eq!(merged.len(), 1);
        assert!((merged[0].match_percentage - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn merge_keeps_first_seen_on_ties_and_drops_keyless() {
        let merged = SuggestionRanker::merge(&[
            vec![
                SuggestedRecipe {
                    title: "first".to_owned(),
                    ..suggestion("https://example.com/a", 50.0)
                },
                suggestion("", 90.0),
            ],
            vec![SuggestedRecipe {
                title: "second".to_owned(),
                ..suggestion("https://example.com/a", 50.0)
            }],
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "first");
    }

    #[test]
    fn detailed_status_reports_breakdown() {
        let ranker = SuggestionRanker::new();
        let entries: Vec<RecipeIngredientEntry> = [
            "2 cups diced tomatoes",
            "3 tbsp extra virgin olive oil",
            "1 cup unknown ingredient",
        ]
        .iter()
        .enumerate()
        .map(|(i, text)| RecipeIngredientEntry::new(i, text))
        .collect();

        let summary = ranker.recipe_pantry_status(Some("r1"), &entries, &pantry());
        assert_eq!(summary.recipe_id.as_deref(), Some("r1"));
        assert_eq!(summary.total_ingredients, 3);
        assert_eq!(summary.matched_count, 2);
        assert_eq!(summary.missing_ingredients.len(), 1);
        assert_eq!(summary.breakdown.exact, 2);
        assert_eq!(summary.breakdown.total(), 2);
        assert!((summary.match_percentage - (2.0 / 3.0 * 100.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_recipe_scores_zero_percent() {
        let ranker = SuggestionRanker::new();
        let summary = ranker.recipe_pantry_status(None, &[], &pantry());
        assert_eq!(summary.total_ingredients, 0);
        assert!(summary.match_percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn alternatives_come_back_closest_first() {
        let ranker = SuggestionRanker::new();
        let known = ["tomatoes", "potatoes", "flour"];
        let alternatives = ranker.suggest_alternatives("tomato", &known);
        assert_eq!(alternatives[0], "tomatoes");
        assert!(alternatives.len() <= 5);
        assert!(ranker
            .suggest_alternatives("", &known)
            .is_empty());
    }

    #[test]
    fn top_suggestions_applies_floor_and_cap() {
        let config = MatcherConfig {
            min_match_percentage: Some(30.0),
            max_suggestions: 2,
            ..MatcherConfig::default()
        };
        let ranker = SuggestionRanker::with_config(config);
        let merged = vec![
            suggestion("https://example.com/a", 80.0),
            suggestion("https://example.com/b", 55.0),
            suggestion("https://example.com/c", 31.0),
            suggestion("https://example.com/d", 10.0),
        ];
        let feed = ranker.top_suggestions(merged);
        assert_eq!(feed.len(), 2);
        assert!(feed.iter().all(|s| s.match_percentage >= 30.0));
    }
}
