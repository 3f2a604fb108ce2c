// ABOUTME: Ingredient-line normalization down to a canonical searchable name
// ABOUTME: Strips quantities, units, preparation notes, and clause tails, then extracts the core phrase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! # Text Normalization
//!
//! Reduces a raw scraped ingredient line ("3 tbsp extra virgin olive oil,
//! plus extra for frying") to a canonical lowercase name ("olive oil") that
//! the matcher can compare across recipes and pantries.
//!
//! The pipeline is a fixed sequence of regex strips followed by a core-phrase
//! extraction pass. Scraped lines are dominated by leading quantities and
//! trailing or parenthetical preparation notes; removing those and keeping
//! the tail of the noun phrase recovers the food item in the common case
//! without a dictionary. The canonical name is a pure function of the input
//! line and this rule set.
//!
//! Patterns are stored as `Option<Regex>` so a compilation failure degrades
//! to skipping that strip instead of panicking.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::models::RecipeIngredientEntry;

/// Leading quantity plus unit, e.g. "2 ", "1/2 cup ", "2 x 400g ", "1.5 kg "
static LEADING_QUANTITY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\d+(\s+\d+/\d+|\.\d+|\s*/\s*\d+)?\s*(x\s*\d+(\.\d+)?)?\s*(kg|g|lb|lbs|oz|ml|l|litres?|pints?|cups?|cup|tbsp|tsp|tablespoons?|teaspoons?|pieces?|cloves?|slices?)\s+",
    )
    .ok()
});

/// Parenthesized quantity annotations, e.g. "(400g)", "(2 x 400g)"
static PAREN_QUANTITY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\(\d+(\.\d+)?\s*(x\s*\d+(\.\d+)?)?\s*(kg|g|lb|lbs|oz|ml|l|litres?|pints?|cups?|cup|tbsp|tsp|pieces?)\)",
    )
    .ok()
});

/// Parenthesized preparation notes ending in a preparation word, e.g. "(finely chopped)"
static PAREN_PREP: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\([^)]*(chopped|diced|sliced|crushed|minced|grated|peeled|cored|halved|quartered|cubed|finely|roughly|fresh|dried|frozen|canned|tinned|ground|whole|large|small|medium)\)",
    )
    .ok()
});

/// Inline preparation and descriptor words
static INLINE_DESCRIPTOR: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(chopped|diced|sliced|crushed|minced|grated|peeled|cored|halved|quartered|cubed|finely|roughly|fresh|dried|frozen|canned|tinned|ground|whole|large|small|medium|free-range|organic|granulated|powdered|sifted|lumpy|dark|sea)\b",
    )
    .ok()
});

/// "extra" / "virgin" qualifiers around olive oil
static OLIVE_OIL_QUALIFIER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(extra|virgin)\b").ok());

/// Conditional clauses, e.g. ", if lumpy"
static IF_CLAUSE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i),?\s*if\s+\w+").ok());

/// Alternative-ingredient tails: keep only the first alternative
static OR_TAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)\s+or\s+.*$").ok());

/// "plus extra/more for ..." suffixes
static PLUS_EXTRA_TAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i),?\s*plus\s+(extra|more)\s+for.*$").ok());

/// "to taste" suffixes
static TO_TASTE_TAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i),?\s*to\s+taste.*$").ok());

/// "(Note 3)" style references
static NOTE_REF: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\(?note\s+\d+\)?").ok());

/// Any remaining parenthesized text
static REMAINING_PARENS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\([^)]*\)").ok());

/// Commas and semicolons collapse to a single space
static PUNCT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[,;]+").ok());

/// Runs of whitespace
static MULTI_SPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

/// Tokens dropped before core-phrase extraction
const STOP_WORDS: [&str; 8] = ["of", "and", "or", "with", "for", "the", "a", "an"];

/// Food nouns that anchor the core phrase; scanned right-to-left, the last
/// occurrence wins and the token before it (if any) is kept with it
const IMPORTANT_NOUNS: [&str; 21] = [
    "oil", "flour", "cheese", "milk", "cream", "butter", "sauce", "powder", "chips", "beans",
    "rice", "pasta", "bread", "stock", "broth", "vinegar", "sugar", "salt", "pepper", "herbs",
    "spices",
];

fn strip_all(pattern: &Option<Regex>, text: &str) -> String {
    pattern
        .as_ref()
        .map_or_else(|| text.to_owned(), |re| re.replace_all(text, "").into_owned())
}

fn collapse_spaces(pattern: &Option<Regex>, text: &str, replacement: &str) -> String {
    pattern.as_ref().map_or_else(
        || text.to_owned(),
        |re| re.replace_all(text, replacement).into_owned(),
    )
}

/// Reduce a raw ingredient line to its canonical searchable name.
///
/// Empty or whitespace-only input yields `""`. Never fails: any pattern that
/// cannot apply simply leaves the text unchanged.
#[must_use]
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut cleaned = raw.to_lowercase();

    cleaned = strip_all(&LEADING_QUANTITY, &cleaned);
    cleaned = strip_all(&PAREN_QUANTITY, &cleaned);
    cleaned = strip_all(&PAREN_PREP, &cleaned);
    cleaned = strip_all(&INLINE_DESCRIPTOR, &cleaned);

    // Compound names collapse to their head phrase before anything else can
    // chew on them.
    if cleaned.contains("extra virgin olive oil") {
        cleaned = "olive oil".to_owned();
    } else if cleaned.contains("all-purpose flour") || cleaned.contains("all purpose flour") {
        cleaned = "flour".to_owned();
    } else if cleaned.contains("olive oil") {
        cleaned = strip_all(&OLIVE_OIL_QUALIFIER, &cleaned);
        cleaned = collapse_spaces(&MULTI_SPACE, &cleaned, " ").trim().to_owned();
    }

    cleaned = strip_all(&IF_CLAUSE, &cleaned);
    cleaned = strip_all(&OR_TAIL, &cleaned);
    cleaned = strip_all(&PLUS_EXTRA_TAIL, &cleaned);
    cleaned = strip_all(&TO_TASTE_TAIL, &cleaned);
    cleaned = strip_all(&NOTE_REF, &cleaned);
    cleaned = strip_all(&REMAINING_PARENS, &cleaned);

    cleaned = collapse_spaces(&PUNCT, &cleaned, " ");
    cleaned = collapse_spaces(&MULTI_SPACE, &cleaned, " ").trim().to_owned();

    let tokens: Vec<&str> = cleaned
        .split(' ')
        .filter(|word| !STOP_WORDS.contains(word) && word.chars().count() > 1)
        .collect();

    let result = core_phrase(&tokens);
    trace!(raw, canonical = %result, "normalized ingredient line");
    result
}

/// Pick the 1-2 word phrase that names the foodstuff.
///
/// The head noun of an English noun phrase tends to sit near the end, so
/// when no known food noun is present the last two tokens win.
fn core_phrase(tokens: &[&str]) -> String {
    if let Some(idx) = tokens
        .iter()
        .rposition(|token| IMPORTANT_NOUNS.contains(token))
    {
        let start = idx.saturating_sub(1);
        return tokens[start..=idx].join(" ");
    }

    match tokens.len() {
        0 => String::new(),
        1 => (*tokens[0]).to_owned(),
        len => tokens[len - 2..].join(" "),
    }
}

/// Collapse simple plural variants of a canonical name.
///
/// Suffix rules only, first match wins: "ies" becomes "y", "es" drops when
/// the name is long enough, then a bare trailing "s" drops. Applied to the
/// whole name, so only the final word is stemmed ("green onions" becomes
/// "green onion").
///
/// Lossy by design: names that merely end in "s" ("hummus", "couscous")
/// lose their final letter. Accepted as a heuristic limitation.
#[must_use]
pub fn stem(name: &str) -> String {
    if let Some(base) = name.strip_suffix("ies") {
        return format!("{base}y");
    }
    if name.len() > 3 {
        if let Some(base) = name.strip_suffix("es") {
            return base.to_owned();
        }
        if let Some(base) = name.strip_suffix('s') {
            return base.to_owned();
        }
    }
    name.to_owned()
}

/// Turn raw scraped ingredient lines into positioned recipe entries.
///
/// A line ending in ":" is treated as a subsection header ("For the sauce:")
/// and becomes the group label of the entries that follow it. Empty lines
/// are dropped. Positions index the source list, so gaps mark where headers
/// and blanks sat.
#[must_use]
pub fn parse_ingredient_lines<S: AsRef<str>>(lines: &[S]) -> Vec<RecipeIngredientEntry> {
    let mut entries = Vec::with_capacity(lines.len());
    let mut group_label: Option<String> = None;

    for (position, line) in lines.iter().enumerate() {
        let text = line.as_ref().trim();
        if text.is_empty() {
            continue;
        }
        if let Some(header) = text.strip_suffix(':') {
            let header = header.trim();
            group_label = (!header.is_empty()).then(|| header.to_owned());
            continue;
        }
        entries.push(RecipeIngredientEntry {
            position,
            ingredient_text: text.to_owned(),
            group_label: group_label.clone(),
        });
    }

    entries
}
