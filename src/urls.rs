// ABOUTME: URL helpers for suggestion dedup keys and recipe-page detection
// ABOUTME: Cheap heuristics; called frequently from clipboard and feed polling paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! URL heuristics for the suggestion pipeline.

use url::Url;

/// Hosts that are recipe sites outright
const KNOWN_RECIPE_DOMAINS: &[&str] = &[
    "allrecipes.com",
    "bbcgoodfood.com",
    "bonappetit.com",
    "cooking.nytimes.com",
    "delish.com",
    "epicurious.com",
    "food.com",
    "foodnetwork.com",
    "jamieoliver.com",
    "seriouseats.com",
    "simplyrecipes.com",
    "sallysbakingaddiction.com",
    "tasteofhome.com",
    "thekitchn.com",
    "pinchofyum.com",
    "bettycrocker.com",
    "tasty.co",
    "loveandlemons.com",
    "chefsavvy.com",
    "recipetineats.com",
    "skinnytaste.com",
    "minimalistbaker.com",
    "cookieandkate.com",
];

/// Path fragments that suggest a recipe page on unknown hosts
const RECIPE_PATH_KEYWORDS: &[&str] = &["recipe", "recipes", "cook", "bake", "meal", "dish"];

/// Stable dedup key for a suggestion: source URL when present, otherwise the
/// recipe id. `None` when neither exists, so keyless rows drop out of
/// merging instead of colliding on an empty key.
#[must_use]
pub fn suggestion_key(source_url: Option<&str>, id: Option<&str>) -> Option<String> {
    source_url
        .filter(|u| !u.trim().is_empty())
        .or_else(|| id.filter(|i| !i.trim().is_empty()))
        .map(str::to_owned)
}

/// Light-weight check for whether free text looks like a recipe page URL.
///
/// Accepts http(s) URLs on known recipe hosts (including subdomains), or any
/// host whose path contains a recipe keyword. Everything else, including
/// non-URL text, is rejected.
#[must_use]
pub fn is_probably_recipe_url(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let Ok(url) = Url::parse(trimmed) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.strip_prefix("www.").unwrap_or(host).to_lowercase();

    if KNOWN_RECIPE_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")))
    {
        return true;
    }

    let path = url.path().to_lowercase();
    RECIPE_PATH_KEYWORDS
        .iter()
        .any(|keyword| path.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_domains_are_recipe_urls() {
        assert!(is_probably_recipe_url("https://www.bbcgoodfood.com/whatever"));
        assert!(is_probably_recipe_url("https://cooking.nytimes.com/1234"));
        assert!(is_probably_recipe_url("https://sub.allrecipes.com/x"));
    }

    #[test]
    fn recipe_keywords_in_path_count() {
        assert!(is_probably_recipe_url("https://example.com/recipes/123"));
        assert!(is_probably_recipe_url("http://example.com/how-to-bake-bread"));
        assert!(!is_probably_recipe_url("https://example.com/about"));
    }

    #[test]
    fn non_urls_and_other_schemes_are_rejected() {
        assert!(!is_probably_recipe_url("just some text"));
        assert!(!is_probably_recipe_url(""));
        assert!(!is_probably_recipe_url("ftp://example.com/recipes"));
    }

    #[test]
    fn key_prefers_source_url_over_id() {
        assert_eq!(
            suggestion_key(Some("https://a"), Some("id-1")),
            Some("https://a".to_owned())
        );
        assert_eq!(suggestion_key(None, Some("id-1")), Some("id-1".to_owned()));
        assert_eq!(suggestion_key(Some("  "), None), None);
        assert_eq!(suggestion_key(None, None), None);
    }
}
