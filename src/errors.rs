// ABOUTME: Crate error types for the configuration and logging surface
// ABOUTME: The matching core itself never fails; malformed input degrades to empty/None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Match Contributors

//! # Error Handling
//!
//! Ingredient lines and pantry rows are uncontrolled, scraped natural
//! language, so normalization and matching never return errors — invalid
//! input yields an empty canonical name or no match. The only fallible
//! surfaces in this crate are configuration loading and logging setup,
//! covered by [`EngineError`].

use thiserror::Error;

/// Result alias for the crate's fallible surfaces
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while building engine configuration or wiring logging
#[derive(Debug, Error)]
pub enum EngineError {
    /// A configuration value was missing, unparseable, or out of range
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the rejected value
        reason: String,
    },

    /// The tracing subscriber could not be installed
    #[error("logging initialization failed: {reason}")]
    LoggingInit {
        /// Underlying subscriber error text
        reason: String,
    },
}

impl EngineError {
    /// Build an [`EngineError::InvalidConfig`] from anything displayable
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_formats_reason() {
        let err = EngineError::invalid_config("match threshold 1.5 outside [0, 1]");
        assert_eq!(
            err.to_string(),
            "invalid configuration: match threshold 1.5 outside [0, 1]"
        );
    }
}
