// ABOUTME: Canonical ingredient resolution against a known-name catalog
// ABOUTME: Decides whether a new name is an existing entry, an alias, or genuinely new
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! # Ingredient Catalog Resolution
//!
//! When a new ingredient name arrives, the persistence layer wants to know
//! whether it denotes something already on file. [`resolve_canonical`]
//! answers with a cascade: exact catalog hit, then a high-similarity fuzzy
//! alias, then a synonym-group alias, otherwise a genuinely new entry.
//! The fuzzy floor is deliberately higher than the match engine's threshold
//! because auto-aliasing a wrong pair corrupts the catalog silently.
//!
//! [`infer_category`] assigns a coarse grocery category from name keywords.

use tracing::debug;

use crate::models::IngredientCategory;
use crate::normalize;
use crate::similarity::similarity;
use crate::synonyms::SynonymTable;

/// How a new ingredient name relates to the known catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalResolution {
    /// The canonical name is already a catalog entry
    Existing(String),
    /// Near-duplicate of an existing entry; record it as an alias
    FuzzyAlias {
        /// The catalog entry to alias onto
        canonical: String,
        /// Similarity that justified the alias
        score: f64,
    },
    /// Known synonym of an existing entry
    SynonymAlias {
        /// The catalog entry to alias onto
        canonical: String,
    },
    /// Nothing on file covers this name
    New(String),
}

/// Resolve a raw ingredient name against known catalog names.
///
/// `alias_threshold` is the similarity a fuzzy candidate must *exceed* to be
/// auto-aliased (the engine default is 0.8). Returns `None` when the input
/// normalizes to nothing.
#[must_use]
pub fn resolve_canonical<S: AsRef<str>>(
    raw_name: &str,
    known: &[S],
    alias_threshold: f64,
) -> Option<CanonicalResolution> {
    let cleaned = normalize::normalize(raw_name);
    if cleaned.is_empty() {
        return None;
    }

    if known.iter().any(|name| name.as_ref() == cleaned) {
        return Some(CanonicalResolution::Existing(cleaned));
    }

    let mut best: Option<(&str, f64)> = None;
    for name in known {
        let score = similarity(&cleaned, name.as_ref());
        if score > alias_threshold && best.is_none_or(|(_, b)| score > b) {
            best = Some((name.as_ref(), score));
        }
    }
    if let Some((canonical, score)) = best {
        debug!(name = %cleaned, canonical, score, "fuzzy catalog alias");
        return Some(CanonicalResolution::FuzzyAlias {
            canonical: canonical.to_owned(),
            score,
        });
    }

    let table = SynonymTable::global();
    for name in known {
        let name = name.as_ref();
        if table.are_synonyms(&cleaned, name) {
            return Some(CanonicalResolution::SynonymAlias {
                canonical: name.to_owned(),
            });
        }
    }

    Some(CanonicalResolution::New(cleaned))
}

/// Keyword-to-category table; checked in order, first hit wins
const CATEGORY_KEYWORDS: &[(IngredientCategory, &[&str])] = &[
    (
        IngredientCategory::Dairy,
        &["milk", "cheese", "butter", "cream", "yogurt"],
    ),
    (
        IngredientCategory::Meat,
        &["chicken", "beef", "pork", "lamb", "turkey", "bacon"],
    ),
    (
        IngredientCategory::Seafood,
        &["fish", "salmon", "tuna", "shrimp", "crab"],
    ),
    (
        IngredientCategory::Vegetables,
        &["tomato", "onion", "garlic", "carrot", "pepper", "lettuce"],
    ),
    (
        IngredientCategory::Fruits,
        &["apple", "banana", "orange", "lemon", "lime"],
    ),
    (
        IngredientCategory::Grains,
        &["rice", "pasta", "bread", "flour", "oats"],
    ),
    (
        IngredientCategory::Spices,
        &["salt", "pepper", "basil", "oregano", "thyme"],
    ),
    (IngredientCategory::Oils, &["oil", "vinegar"]),
    (
        IngredientCategory::Pantry,
        &["sugar", "vanilla", "baking"],
    ),
];

/// Coarse grocery category for a canonical ingredient name
#[must_use]
pub fn infer_category(name: &str) -> IngredientCategory {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return *category;
        }
    }
    IngredientCategory::Other
}
