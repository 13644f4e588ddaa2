// ABOUTME: Configuration error types for adaptation scoring validation
// ABOUTME: Defines error variants for invalid ranges, weights, and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for adaptation scoring validation.

use pierre_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds or ordered values are not in the required order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Nominal weights don't sum to the maximum difficulty score
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let message = error.to_string();
        let app_error = match &error {
            ConfigError::ValueOutOfRange(_) => Self::value_out_of_range(message),
            ConfigError::InvalidRange(_) | ConfigError::Parse(_) | ConfigError::InvalidWeights(_) => {
                Self::config(message)
            }
        };
        app_error.with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use pierre_core::errors::ErrorCode;

    use super::*;

    #[test]
    fn test_out_of_range_keeps_its_code() {
        let error = AppError::from(ConfigError::ValueOutOfRange(
            "completion_cap must be at least 1.0",
        ));

        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(error.message.contains("completion_cap"));
        assert!(error.source.is_some());
    }

    #[test]
    fn test_other_failures_are_config_errors() {
        let error = AppError::from(ConfigError::Parse("Invalid PIERRE_ADAPTATION_SUCCESS_WEIGHT".to_owned()));

        assert_eq!(error.code, ErrorCode::ConfigError);
    }
}
