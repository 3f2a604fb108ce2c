// ABOUTME: Engine configuration with defaults and environment variable overrides
// ABOUTME: Centralizes the match threshold shared by the cascade and the in-pantry decision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! Matcher configuration.
//!
//! One [`MatcherConfig`] value flows through the whole call chain so the
//! match threshold is defined exactly once: `find_best_match` uses it as the
//! fuzzy/partial floor and `match_all` reuses the same value for its
//! `in_pantry` decision.

use std::env;

use tracing::info;

use crate::errors::{EngineError, EngineResult};

/// Default floor a fuzzy or word-overlap candidate must clear
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Default similarity required before an unknown name is treated as an alias
/// of an existing catalog entry
pub const DEFAULT_ALIAS_THRESHOLD: f64 = 0.8;

/// Default floor for "did you mean" ingredient suggestions
pub const DEFAULT_SIMILAR_FLOOR: f64 = 0.3;

/// Default cap on a ranked suggestion list
pub const DEFAULT_MAX_SUGGESTIONS: usize = 25;

/// Tunable knobs for matching and suggestion ranking
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Minimum score for fuzzy and partial candidates, and the floor for the
    /// batch matcher's `in_pantry` classification
    pub match_threshold: f64,
    /// Minimum similarity for auto-aliasing an unknown ingredient name onto
    /// an existing catalog entry
    pub alias_threshold: f64,
    /// Minimum similarity for near-miss ingredient suggestions
    pub similar_floor: f64,
    /// Maximum number of ranked recipe suggestions returned
    pub max_suggestions: usize,
    /// Optional floor on match percentage for the final suggestion list.
    /// The original mobile app shipped with 30.0; `None` keeps everything.
    pub min_match_percentage: Option<f64>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            alias_threshold: DEFAULT_ALIAS_THRESHOLD,
            similar_floor: DEFAULT_SIMILAR_FLOOR,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            min_match_percentage: None,
        }
    }
}

impl MatcherConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognized variables: `PANTRY_MATCH_THRESHOLD`,
    /// `PANTRY_ALIAS_THRESHOLD`, `PANTRY_SIMILAR_FLOOR`,
    /// `PANTRY_MAX_SUGGESTIONS`, `PANTRY_MIN_MATCH_PERCENTAGE`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when a variable is set but
    /// unparseable or out of range.
    pub fn from_env() -> EngineResult<Self> {
        let config = Self {
            match_threshold: env_f64("PANTRY_MATCH_THRESHOLD", DEFAULT_MATCH_THRESHOLD)?,
            alias_threshold: env_f64("PANTRY_ALIAS_THRESHOLD", DEFAULT_ALIAS_THRESHOLD)?,
            similar_floor: env_f64("PANTRY_SIMILAR_FLOOR", DEFAULT_SIMILAR_FLOOR)?,
            max_suggestions: env_usize("PANTRY_MAX_SUGGESTIONS", DEFAULT_MAX_SUGGESTIONS)?,
            min_match_percentage: env_opt_f64("PANTRY_MIN_MATCH_PERCENTAGE")?,
        };
        config.validate()?;
        info!(
            match_threshold = config.match_threshold,
            max_suggestions = config.max_suggestions,
            "matcher configuration loaded"
        );
        Ok(config)
    }

    /// Check that every threshold lies in its legal range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        for (name, value) in [
            ("match_threshold", self.match_threshold),
            ("alias_threshold", self.alias_threshold),
            ("similar_floor", self.similar_floor),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(EngineError::invalid_config(format!(
                    "{name} {value} outside [0, 1]"
                )));
            }
        }
        if let Some(pct) = self.min_match_percentage {
            if !(0.0..=100.0).contains(&pct) || pct.is_nan() {
                return Err(EngineError::invalid_config(format!(
                    "min_match_percentage {pct} outside [0, 100]"
                )));
            }
        }
        if self.max_suggestions == 0 {
            return Err(EngineError::invalid_config("max_suggestions must be > 0"));
        }
        Ok(())
    }
}

fn env_f64(name: &str, default: f64) -> EngineResult<f64> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| EngineError::invalid_config(format!("{name}={raw} is not a number"))),
        Err(_) => Ok(default),
    }
}

fn env_opt_f64(name: &str) -> EngineResult<Option<f64>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| EngineError::invalid_config(format!("{name}={raw} is not a number"))),
        Err(_) => Ok(None),
    }
}

fn env_usize(name: &str, default: usize) -> EngineResult<usize> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            EngineError::invalid_config(format!("{name}={raw} is not a positive integer"))
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MatcherConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.match_threshold - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.max_suggestions, 25);
        assert_eq!(config.min_match_percentage, None);
    }

    #[test]
    fn rejects_threshold_outside_unit_interval() {
        let config = MatcherConfig {
            match_threshold: 1.5,
            ..MatcherConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("match_threshold"));
    }

    #[test]
    fn rejects_zero_suggestion_cap() {
        let config = MatcherConfig {
            max_suggestions: 0,
            ..MatcherConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_percentage_floor() {
        let config = MatcherConfig {
            min_match_percentage: Some(130.0),
            ..MatcherConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
