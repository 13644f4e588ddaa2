// ABOUTME: Scoring configuration for the session adaptation engine
// ABOUTME: Tunable difficulty-score weights, failure-pattern scores and status thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptation Scoring Configuration
//!
//! The difficulty score is a weighted composite of set success, reps and load
//! completion, the failure pattern and inter-set consistency. The weights and the
//! classification thresholds are tunable through `PIERRE_ADAPTATION_*`
//! environment variables; the physical constraint tables are not (see
//! [`crate::constraints`]).

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use pierre_core::constants::{env_config, scoring};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{FailurePattern, PerformanceStatus};

/// Global configuration singleton
static ADAPTATION_CONFIG: OnceLock<AdaptationConfig> = OnceLock::new();

/// Main adaptation configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Weights of the difficulty score components
    pub weights: ScoringWeights,
    /// Points awarded per failure pattern
    pub pattern_scores: PatternScores,
    /// Lower bounds of the performance status buckets
    pub thresholds: StatusThresholds,
}

/// Weights of the difficulty score components
///
/// Nominal weights (with the best pattern score) sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points for a 100 % set success rate
    pub success_rate: f64,
    /// Points for hitting the target reps
    pub reps_completion: f64,
    /// Points for hitting the target load
    pub weight_completion: f64,
    /// Points for perfectly even reps across sets
    pub consistency: f64,
    /// Completion ratios are capped at this value before weighting
    pub completion_cap: f64,
    /// Share of failures one half must hold to call the pattern early or late
    pub failure_dominance: f64,
}

/// Points awarded per failure pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternScores {
    /// No failure
    pub none: f64,
    /// Failures at the end (normal fatigue)
    pub late: f64,
    /// Failures spread out (load problem)
    pub distributed: f64,
    /// Failures at the start (too heavy from the outset)
    pub early: f64,
}

/// Inclusive lower bounds of each performance status bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// Score at or above which the session was far too easy
    pub crushing_it: f64,
    /// Score at or above which the athlete is strong
    pub strong: f64,
    /// Score at or above which the session sat in the ideal zone
    pub perfect: f64,
    /// Score at or above which the session was challenging
    pub challenging: f64,
    /// Score at or above which the athlete struggled; below is overreaching
    pub struggling: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            success_rate: 35.0,
            reps_completion: 30.0,
            weight_completion: 20.0,
            consistency: 5.0,
            completion_cap: 1.2,
            failure_dominance: 0.7,
        }
    }
}

impl Default for PatternScores {
    fn default() -> Self {
        Self {
            none: 10.0,
            late: 7.0,
            distributed: 4.0,
            early: 2.0,
        }
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            crushing_it: 90.0,
            strong: 75.0,
            perfect: 60.0,
            challenging: 45.0,
            struggling: 30.0,
        }
    }
}

impl PatternScores {
    /// Points for a failure pattern
    #[must_use]
    pub const fn score(&self, pattern: FailurePattern) -> f64 {
        match pattern {
            FailurePattern::None => self.none,
            FailurePattern::Late => self.late,
            FailurePattern::Distributed => self.distributed,
            FailurePattern::Early => self.early,
        }
    }
}

impl StatusThresholds {
    /// Map a difficulty score to its bucket; lower bounds are inclusive
    #[must_use]
    pub fn classify(&self, score: f64) -> PerformanceStatus {
        if score >= self.crushing_it {
            PerformanceStatus::CrushingIt
        } else if score >= self.strong {
            PerformanceStatus::Strong
        } else if score >= self.perfect {
            PerformanceStatus::Perfect
        } else if score >= self.challenging {
            PerformanceStatus::Challenging
        } else if score >= self.struggling {
            PerformanceStatus::Struggling
        } else {
            PerformanceStatus::Overreaching
        }
    }
}

impl AdaptationConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ADAPTATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load adaptation config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if weights are negative or don't sum to 100, if pattern
    /// scores are not ordered, or if thresholds are not strictly descending
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = &self.weights;
        if [
            weights.success_rate,
            weights.reps_completion,
            weights.weight_completion,
            weights.consistency,
        ]
        .iter()
        .any(|w| *w < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Scoring weights must not be negative",
            ));
        }

        let nominal_sum = weights.success_rate
            + weights.reps_completion
            + weights.weight_completion
            + weights.consistency
            + self.pattern_scores.none;
        if (nominal_sum - scoring::MAX_DIFFICULTY_SCORE).abs() > scoring::WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Scoring weights plus the no-failure pattern score must sum to 100",
            ));
        }

        if weights.completion_cap < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "completion_cap must be at least 1.0",
            ));
        }

        if weights.failure_dominance <= 0.5 || weights.failure_dominance >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "failure_dominance must be strictly between 0.5 and 1.0",
            ));
        }

        let patterns = &self.pattern_scores;
        if patterns.early < 0.0
            || patterns.early > patterns.distributed
            || patterns.distributed > patterns.late
            || patterns.late > patterns.none
        {
            return Err(ConfigError::InvalidRange(
                "Pattern scores must satisfy 0 <= early <= distributed <= late <= none",
            ));
        }

        let t = &self.thresholds;
        if t.crushing_it > scoring::MAX_DIFFICULTY_SCORE
            || t.struggling < scoring::MIN_DIFFICULTY_SCORE
        {
            return Err(ConfigError::ValueOutOfRange(
                "Status thresholds must lie within [0, 100]",
            ));
        }
        if t.crushing_it <= t.strong
            || t.strong <= t.perfect
            || t.perfect <= t.challenging
            || t.challenging <= t.struggling
        {
            return Err(ConfigError::InvalidRange(
                "Status thresholds must be strictly descending",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(env_config::SUCCESS_WEIGHT, &mut self.weights.success_rate)?;
        Self::apply_env_var(env_config::REPS_WEIGHT, &mut self.weights.reps_completion)?;
        Self::apply_env_var(env_config::LOAD_WEIGHT, &mut self.weights.weight_completion)?;
        Self::apply_env_var(env_config::CONSISTENCY_WEIGHT, &mut self.weights.consistency)?;
        Self::apply_env_var(env_config::COMPLETION_CAP, &mut self.weights.completion_cap)?;
        Self::apply_env_var(
            env_config::FAILURE_DOMINANCE,
            &mut self.weights.failure_dominance,
        )?;

        Self::apply_env_var(
            env_config::CRUSHING_IT_THRESHOLD,
            &mut self.thresholds.crushing_it,
        )?;
        Self::apply_env_var(env_config::STRONG_THRESHOLD, &mut self.thresholds.strong)?;
        Self::apply_env_var(env_config::PERFECT_THRESHOLD, &mut self.thresholds.perfect)?;
        Self::apply_env_var(
            env_config::CHALLENGING_THRESHOLD,
            &mut self.thresholds.challenging,
        )?;
        Self::apply_env_var(
            env_config::STRUGGLING_THRESHOLD,
            &mut self.thresholds.struggling,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use serial_test::serial;

    fn clear_overrides() {
        for name in [
            env_config::SUCCESS_WEIGHT,
            env_config::REPS_WEIGHT,
            env_config::LOAD_WEIGHT,
            env_config::CONSISTENCY_WEIGHT,
            env_config::COMPLETION_CAP,
            env_config::FAILURE_DOMINANCE,
            env_config::CRUSHING_IT_THRESHOLD,
            env_config::STRONG_THRESHOLD,
            env_config::PERFECT_THRESHOLD,
            env_config::CHALLENGING_THRESHOLD,
            env_config::STRUGGLING_THRESHOLD,
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        AdaptationConfig::default().validate().unwrap();
    }

    #[test]
    fn test_thresholds_are_inclusive_lower_bounds() {
        let thresholds = StatusThresholds::default();
        assert_eq!(thresholds.classify(90.0), PerformanceStatus::CrushingIt);
        assert_eq!(thresholds.classify(89.99), PerformanceStatus::Strong);
        assert_eq!(thresholds.classify(75.0), PerformanceStatus::Strong);
        assert_eq!(thresholds.classify(60.0), PerformanceStatus::Perfect);
        assert_eq!(thresholds.classify(45.0), PerformanceStatus::Challenging);
        assert_eq!(thresholds.classify(30.0), PerformanceStatus::Struggling);
        assert_eq!(thresholds.classify(29.99), PerformanceStatus::Overreaching);
        assert_eq!(thresholds.classify(0.0), PerformanceStatus::Overreaching);
    }

    #[test]
    fn test_weights_must_sum_to_one_hundred() {
        let mut config = AdaptationConfig::default();
        config.weights.success_rate = 40.0;

        match config.validate() {
            Err(ConfigError::InvalidWeights(_)) => {}
            other => panic!("expected InvalidWeights, got {other:?}"),
        }
    }

    #[test]
    fn test_thresholds_must_descend() {
        let mut config = AdaptationConfig::default();
        config.thresholds.perfect = 80.0;

        match config.validate() {
            Err(ConfigError::InvalidRange(_)) => {}
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_dominance_bounds() {
        let mut config = AdaptationConfig::default();
        config.weights.failure_dominance = 0.5;
        assert!(config.validate().is_err());

        config.weights.failure_dominance = 0.8;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_env_override_applies() {
        clear_overrides();
        env::set_var(env_config::CRUSHING_IT_THRESHOLD, "92.5");

        let config = AdaptationConfig::load().unwrap();
        assert!((config.thresholds.crushing_it - 92.5).abs() < f64::EPSILON);

        clear_overrides();
    }

    #[test]
    #[serial]
    fn test_env_override_parse_failure() {
        clear_overrides();
        env::set_var(env_config::STRONG_THRESHOLD, "not-a-number");

        match AdaptationConfig::load() {
            Err(ConfigError::Parse(message)) => {
                assert!(message.contains(env_config::STRONG_THRESHOLD));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }

        clear_overrides();
    }

    #[test]
    #[serial]
    fn test_env_override_is_validated() {
        clear_overrides();
        env::set_var(env_config::SUCCESS_WEIGHT, "50");

        assert!(matches!(
            AdaptationConfig::load(),
            Err(ConfigError::InvalidWeights(_))
        ));

        clear_overrides();
    }
}
