// ABOUTME: Normalized edit-distance similarity between canonical ingredient names
// ABOUTME: Backs the fuzzy strategy of the match cascade and near-miss suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! Levenshtein-based string similarity.
//!
//! `similarity(a, b)` is case-insensitive, symmetric, and always in `[0, 1]`:
//! identical strings score 1.0, otherwise `(max_len - distance) / max_len`
//! over the character-wise edit distance.

/// Similarity between two ingredient names in `[0, 1]`.
///
/// Either side being empty scores 0.0; equal strings (ignoring case) score
/// exactly 1.0.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return 1.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let max_len = a_chars.len().max(b_chars.len());
    let distance = levenshtein(&a_chars, &b_chars);

    (max_len - distance) as f64 / max_len as f64
}

/// Character-wise Levenshtein distance, two-row dynamic program
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0; a.len() + 1];

    for (i, bc) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ac) in a.iter().enumerate() {
            let substitution = prev[j] + usize::from(ac != bc);
            curr[j + 1] = substitution.min(curr[j] + 1).min(prev[j + 1] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Rank known ingredient names by similarity to a missing one.
///
/// Returns at most `limit` names whose similarity exceeds `floor`, most
/// similar first. Useful for "did you mean" prompts when an ingredient
/// matched nothing in the pantry.
#[must_use]
pub fn suggest_similar<S: AsRef<str>>(
    missing: &str,
    known: &[S],
    floor: f64,
    limit: usize,
) -> Vec<String> {
    if missing.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = known
        .iter()
        .map(|name| (similarity(missing, name.as_ref()), name.as_ref()))
        .filter(|(score, _)| *score > floor)
        .collect();

    // Descending by score; sort_by is stable so equal scores keep input order
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_owned())
        .collect()
}
