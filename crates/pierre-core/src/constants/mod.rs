// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for service identity, environment keys and session naming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identity used by structured logging
pub mod service_names {
    /// Service name reported in log records
    pub const PIERRE_STRENGTH: &str = "pierre-strength";
}

/// Environment variable names for adaptation scoring overrides
pub mod env_config {
    /// Weight of the set success rate in the difficulty score
    pub const SUCCESS_WEIGHT: &str = "PIERRE_ADAPTATION_SUCCESS_WEIGHT";
    /// Weight of the reps completion rate in the difficulty score
    pub const REPS_WEIGHT: &str = "PIERRE_ADAPTATION_REPS_WEIGHT";
    /// Weight of the load completion rate in the difficulty score
    pub const LOAD_WEIGHT: &str = "PIERRE_ADAPTATION_LOAD_WEIGHT";
    /// Weight of the inter-set consistency in the difficulty score
    pub const CONSISTENCY_WEIGHT: &str = "PIERRE_ADAPTATION_CONSISTENCY_WEIGHT";
    /// Upper cap applied to completion ratios before weighting
    pub const COMPLETION_CAP: &str = "PIERRE_ADAPTATION_COMPLETION_CAP";
    /// Share of failures that must fall in one half to call the pattern early or late
    pub const FAILURE_DOMINANCE: &str = "PIERRE_ADAPTATION_FAILURE_DOMINANCE";
    /// Lower bound of the "crushing it" bucket
    pub const CRUSHING_IT_THRESHOLD: &str = "PIERRE_ADAPTATION_CRUSHING_IT_THRESHOLD";
    /// Lower bound of the "strong" bucket
    pub const STRONG_THRESHOLD: &str = "PIERRE_ADAPTATION_STRONG_THRESHOLD";
    /// Lower bound of the "perfect" bucket
    pub const PERFECT_THRESHOLD: &str = "PIERRE_ADAPTATION_PERFECT_THRESHOLD";
    /// Lower bound of the "challenging" bucket
    pub const CHALLENGING_THRESHOLD: &str = "PIERRE_ADAPTATION_CHALLENGING_THRESHOLD";
    /// Lower bound of the "struggling" bucket
    pub const STRUGGLING_THRESHOLD: &str = "PIERRE_ADAPTATION_STRUGGLING_THRESHOLD";
}

/// Naming of sessions created by the orchestrator
pub mod session_naming {
    /// Prefix of sessions produced by adaptation of a manual session
    pub const ADAPTED_SESSION_PREFIX: &str = "Adapted session";
    /// Prefix of sessions cloned without adaptation
    pub const SIMILAR_SESSION_PREFIX: &str = "Session based on";
    /// Fallback name when the previous session has none
    pub const PREVIOUS_SESSION_FALLBACK: &str = "previous session";
}

/// Numeric limits of the scoring model
pub mod scoring {
    /// Lowest possible difficulty score
    pub const MIN_DIFFICULTY_SCORE: f64 = 0.0;
    /// Highest possible difficulty score
    pub const MAX_DIFFICULTY_SCORE: f64 = 100.0;
    /// Tolerance used when checking that nominal weights sum to the maximum score
    pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;
}
