// ABOUTME: Display-text cleanup for scraped ingredient and instruction lines
// ABOUTME: Decodes HTML entities and repairs spacing; separate from canonical-name derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! # Display Tidying
//!
//! Scraped recipe text arrives with HTML entities, misplaced punctuation,
//! and verbose parenthetical notes. These helpers clean it up for display
//! only — the canonical-name pipeline in [`crate::normalize`] works on the
//! raw line and is unaffected by anything here.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// HTML entity references, named or numeric
static ENTITY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"&(#x?[0-9a-fA-F]+|[a-zA-Z]+);").ok());

/// Whitespace runs
static MULTI_SPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s{2,}").ok());

/// Commas with arbitrary surrounding space
static COMMA: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s*,\s*").ok());

/// Semicolons with arbitrary surrounding space
static SEMICOLON: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s*;\s*").ok());

/// Comma stuck to an opening parenthesis: "(, foo" -> "(foo"
static PAREN_LEADING_COMMA: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(\s*,\s*").ok());

/// Comma before a closing parenthesis: "foo ,)" -> "foo)"
static PAREN_TRAILING_COMMA: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r",\s*\)").ok());

/// Space just inside parentheses
static PAREN_INNER_SPACE_OPEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(\s+").ok());
static PAREN_INNER_SPACE_CLOSE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s+\)").ok());

/// Word glued to an opening parenthesis
static WORD_PAREN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(\w)\(").ok());

/// Digit glued to a letter: "3lb" -> "3 lb"
static DIGIT_LETTER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d)([A-Za-z])").ok());

/// Unicode fraction glued to a letter: "½cup" -> "½ cup"
static FRACTION_LETTER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])([A-Za-z])").ok());

/// Spaces around slashes between letters or digits
static LETTER_SLASH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])\s*/\s*([A-Za-z])").ok());
static DIGIT_SLASH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d)\s*/\s*(\d)").ok());

/// Space before a period
static SPACE_PERIOD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+\.").ok());

/// "(Note 3)" style references
static NOTE_REF: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\(Note \d+\)").ok());

/// Verbose optional markers
static OPTIONAL_NOTE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\(optional[^)]*\)").ok());

/// Substitution notes: "(sub heavy cream, or ...)" -> "(or heavy cream)"
static SUB_NOTE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\(sub\s+([^,)]+)[^)]*\)").ok());

/// "(plus extra for frying)" -> "(plus extra)"
static PLUS_EXTRA_NOTE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\(plus extra for[^)]*\)").ok());

/// Empty parentheses left over after other strips
static EMPTY_PARENS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\(\s*\)").ok());

/// Named entities worth decoding in food text
fn named_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "middot" => "\u{00b7}",
        "bull" => "\u{2022}",
        "hellip" => "\u{2026}",
        "frac12" => "½",
        "frac14" => "¼",
        "frac34" => "¾",
        "frac13" => "⅓",
        "frac23" => "⅔",
        "frac15" => "⅕",
        "frac25" => "⅖",
        "frac35" => "⅗",
        "frac45" => "⅘",
        "frac16" => "⅙",
        "frac56" => "⅚",
        "frac18" => "⅛",
        "frac38" => "⅜",
        "frac58" => "⅝",
        "frac78" => "⅞",
        _ => return None,
    })
}

/// Decode named and numeric HTML entity references.
///
/// Unknown names and invalid code points pass through untouched.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let Some(pattern) = ENTITY.as_ref() else {
        return text.to_owned();
    };
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            let code = &caps[1];
            if let Some(rest) = code.strip_prefix('#') {
                let (digits, radix) = rest
                    .strip_prefix(['x', 'X'])
                    .map_or((rest, 10), |hex| (hex, 16));
                return u32::from_str_radix(digits, radix)
                    .ok()
                    .and_then(char::from_u32)
                    .map_or_else(|| caps[0].to_owned(), String::from);
            }
            named_entity(&code.to_lowercase())
                .map_or_else(|| caps[0].to_owned(), str::to_owned)
        })
        .into_owned()
}

fn replace(pattern: &Option<Regex>, text: &str, with: &str) -> String {
    pattern.as_ref().map_or_else(
        || text.to_owned(),
        |re| re.replace_all(text, with).into_owned(),
    )
}

fn tidy_common(text: &str) -> String {
    let mut s = decode_entities(text);
    s = s.replace('\u{00a0}', " ");
    s = replace(&MULTI_SPACE, &s, " ");

    s = replace(&COMMA, &s, ", ");
    s = replace(&SEMICOLON, &s, "; ");

    s = replace(&PAREN_LEADING_COMMA, &s, "(");
    s = replace(&PAREN_TRAILING_COMMA, &s, ")");

    s = replace(&PAREN_INNER_SPACE_OPEN, &s, "(");
    s = replace(&PAREN_INNER_SPACE_CLOSE, &s, ")");
    s = replace(&WORD_PAREN, &s, "$1 (");

    s = replace(&DIGIT_LETTER, &s, "$1 $2");
    s = replace(&FRACTION_LETTER, &s, "$1 $2");

    s = replace(&LETTER_SLASH, &s, "$1/$2");
    s = replace(&DIGIT_SLASH, &s, "$1/$2");

    s = replace(&SPACE_PERIOD, &s, ".");

    replace(&MULTI_SPACE, &s, " ").trim().to_owned()
}

/// Tidy an ingredient line for display.
///
/// Applies the common cleanup, then strips note references, shortens
/// verbose parenthetical notes, and drops leftover empty parentheses and
/// trailing punctuation.
#[must_use]
pub fn tidy_ingredient(text: &str) -> String {
    let mut s = tidy_common(text);

    s = replace(&NOTE_REF, &s, "");
    s = replace(&OPTIONAL_NOTE, &s, "(optional)");
    s = replace(&SUB_NOTE, &s, "(or $1)");
    s = replace(&PLUS_EXTRA_NOTE, &s, "(plus extra)");
    s = replace(&EMPTY_PARENS, &s, "");

    let s = replace(&MULTI_SPACE, &s, " ");
    s.trim().trim_end_matches([',', '.']).trim().to_owned()
}

/// Tidy an instruction step for display
#[must_use]
pub fn tidy_instruction(text: &str) -> String {
    tidy_common(text)
}
