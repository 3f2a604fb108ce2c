// ABOUTME: Integration tests for suggestion ranking, merging, and detailed recipe status
// ABOUTME: Covers exclusion rules, rounding, dedup, and the fast/thorough strategy split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantry_match::config::MatcherConfig;
use pantry_match::models::{CandidateRecipe, PantryItem, RecipeIngredientEntry, SuggestedRecipe};
use pantry_match::suggestions::{RankingStrategy, SuggestionRanker};

fn pantry() -> Vec<PantryItem> {
    ["Tomatoes", "Olive Oil", "Flour", "Scallions"]
        .iter()
        .map(|name| PantryItem::new(name))
        .collect()
}

fn candidate(url: &str, title: &str, ingredients: &[&str]) -> CandidateRecipe {
    CandidateRecipe {
        id: None,
        title: title.to_owned(),
        source_url: Some(url.to_owned()),
        image_url: None,
        prep_time: Some("10 mins".to_owned()),
        cook_time: Some("30 mins".to_owned()),
        ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
    }
}

#[test]
fn ranks_candidates_by_pantry_coverage() {
    let ranker = SuggestionRanker::new();
    let candidates = vec![
        candidate(
            "https://example.com/fancy",
            "Fancy",
            &["saffron threads", "quail eggs", "truffle"],
        ),
        candidate(
            "https://example.com/simple",
            "Simple",
            &["2 cups diced tomatoes", "3 tbsp olive oil"],
        ),
    ];

    let ranked = ranker.rank(&candidates, &pantry(), &[], RankingStrategy::ExactFast);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].title, "Simple");
    assert!((ranked[0].match_percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(ranked[0].pantry_matches, 2);
    assert!(ranked[1].match_percentage < ranked[0].match_percentage);
}

#[test]
fn percentage_rounds_to_one_decimal() {
    let ranker = SuggestionRanker::new();
    let candidates = vec![candidate(
        "https://example.com/r",
        "R",
        &["tomatoes", "olive oil", "unicorn tears"],
    )];

    let ranked = ranker.rank(&candidates, &pantry(), &[], RankingStrategy::ExactFast);
    assert!((ranked[0].match_percentage - 66.7).abs() < f64::EPSILON);
}

#[test]
fn zero_ingredient_candidates_never_appear() {
    let ranker = SuggestionRanker::new();
    let candidates = vec![
        candidate("https://example.com/empty", "Empty", &[]),
        candidate("https://example.com/ok", "Ok", &["flour"]),
    ];
    let ranked = ranker.rank(&candidates, &pantry(), &[], RankingStrategy::ExactFast);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].title, "Ok");
}

#[test]
fn saved_recipes_are_excluded_by_source_url() {
    let ranker = SuggestionRanker::new();
    let candidates = vec![candidate(
        "https://example.com/already-saved",
        "Saved",
        &["tomatoes", "flour"],
    )];
    let saved = vec!["https://example.com/already-saved".to_owned()];
    assert!(ranker
        .rank(&candidates, &pantry(), &saved, RankingStrategy::ExactFast)
        .is_empty());
}

#[test]
fn suggestion_list_respects_configured_cap() {
    let config = MatcherConfig {
        max_suggestions: 3,
        ..MatcherConfig::default()
    };
    let ranker = SuggestionRanker::with_config(config);
    let candidates: Vec<CandidateRecipe> = (0..10)
        .map(|i| {
            candidate(
                &format!("https://example.com/{i}"),
                &format!("Recipe {i}"),
                &["tomatoes"],
            )
        })
        .collect();
    let ranked = ranker.rank(&candidates, &pantry(), &[], RankingStrategy::ExactFast);
    assert_eq!(ranked.len(), 3);
}

#[test]
fn thorough_strategy_finds_synonym_hits_fast_misses() {
    let ranker = SuggestionRanker::new();
    let candidates = vec![candidate(
        "https://example.com/stir-fry",
        "Stir Fry",
        &["2 green onions chopped", "1 tbsp olive oil"],
    )];

    let fast = ranker.rank(&candidates, &pantry(), &[], RankingStrategy::ExactFast);
    let thorough = ranker.rank(&candidates, &pantry(), &[], RankingStrategy::ThoroughFuzzy);

    assert!((fast[0].match_percentage - 50.0).abs() < f64::EPSILON);
    assert!((thorough[0].match_percentage - 100.0).abs() < f64::EPSILON);
}

#[test]
fn merging_keeps_the_higher_percentage_per_key() {
    let make = |pct: f64| SuggestedRecipe {
        id: "https://example.com/dup".to_owned(),
        title: "Dup".to_owned(),
        image_url: None,
        prep_time: None,
        cook_time: None,
        source_url: Some("https://example.com/dup".to_owned()),
        total_ingredients: 5,
        pantry_matches: 2,
        match_percentage: pct,
    };

    let merged = SuggestionRanker::merge(&[vec![make(40.0)], vec![make(80.0)], vec![make(60.0)]]);
    assert_eq!(merged.len(), 1);
    assert!((merged[0].match_percentage - 80.0).abs() < f64::EPSILON);
}

#[test]
fn merged_lists_sort_descending() {
    let make = |key: &str, pct: f64| SuggestedRecipe {
        id: key.to_owned(),
        title: key.to_owned(),
        image_url: None,
        prep_time: None,
        cook_time: None,
        source_url: Some(key.to_owned()),
        total_ingredients: 4,
        pantry_matches: 1,
        match_percentage: pct,
    };

    let merged = SuggestionRanker::merge(&[
        vec![make("a", 20.0), make("b", 90.0)],
        vec![make("c", 55.0)],
    ]);
    let percentages: Vec<f64> = merged.iter().map(|s| s.match_percentage).collect();
    assert_eq!(percentages, vec![90.0, 55.0, 20.0]);
}

#[test]
fn detailed_status_counts_strategies_and_missing() {
    let ranker = SuggestionRanker::new();
    let entries: Vec<RecipeIngredientEntry> = [
        "2 cups diced tomatoes",
        "3 tbsp extra virgin olive oil",
        "2 green onions chopped",
        "1 cup unknown ingredient",
    ]
    .iter()
    .enumerate()
    .map(|(i, text)| RecipeIngredientEntry::new(i, text))
    .collect();

    let summary = ranker.recipe_pantry_status(Some("sample"), &entries, &pantry());
    assert_eq!(summary.total_ingredients, 4);
    assert_eq!(summary.matched_count, 3);
    assert_eq!(summary.missing_ingredients.len(), 1);
    assert_eq!(
        summary.missing_ingredients[0].cleaned_ingredient,
        "unknown ingredient"
    );
    assert_eq!(summary.breakdown.exact, 2);
    assert_eq!(summary.breakdown.synonym, 1);
    assert!((summary.match_percentage - 75.0).abs() < f64::EPSILON);
}

#[test]
fn min_percentage_floor_filters_the_final_feed() {
    let config = MatcherConfig {
        min_match_percentage: Some(30.0),
        ..MatcherConfig::default()
    };
    let ranker = SuggestionRanker::with_config(config);
    let candidates = vec![
        candidate("https://example.com/good", "Good", &["tomatoes", "flour"]),
        candidate(
            "https://example.com/poor",
            "Poor",
            &["saffron", "truffle", "caviar", "quail eggs"],
        ),
    ];
    let ranked = ranker.rank(&candidates, &pantry(), &[], RankingStrategy::ExactFast);
    let feed = ranker.top_suggestions(ranked);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].title, "Good");
}
