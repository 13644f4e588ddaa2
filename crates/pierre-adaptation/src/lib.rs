// ABOUTME: Session adaptation engine turning recorded sets into the next session's prescriptions
// ABOUTME: Performance analysis, strategy selection, constrained adaptation and scoring configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Adaptation
//!
//! Pure, synchronous adaptation pipeline for strength training sessions:
//!
//! 1. [`PerformanceAnalyzer`] scores what the athlete actually did
//! 2. [`AdaptationStrategyEngine`] picks a direction from that score
//! 3. [`ExerciseAdapter`] applies it within the category constraints
//!
//! No stage performs I/O, so exercises of a session can be adapted in parallel.

/// Scoring weights, pattern scores and status thresholds
pub mod config;
/// Constraint tables for weighted and bodyweight exercises
pub mod constraints;
/// Pipeline value types
pub mod types;

/// Status → strategy decision table
pub mod adaptation_strategy;
/// Strategy → prescription adapter
pub mod exercise_adapter;
/// Recorded sets → performance analysis
pub mod performance_analyzer;
/// The three stages composed
pub mod pipeline;

pub use adaptation_strategy::AdaptationStrategyEngine;
pub use config::{AdaptationConfig, ConfigError, PatternScores, ScoringWeights, StatusThresholds};
pub use constraints::{AdaptationConstraints, WeightIncrements, BODYWEIGHT_CONSTRAINTS, WEIGHTED_CONSTRAINTS};
pub use exercise_adapter::ExerciseAdapter;
pub use performance_analyzer::PerformanceAnalyzer;
pub use pipeline::{AdaptationPipeline, ExerciseAdaptation};
pub use types::{
    AdaptationMagnitude, AdaptationPriority, AdaptationStrategy, AdaptationType, AdaptedExercise,
    FailurePattern, PerformanceAnalysis, PerformanceStatus, PrescriptionChange,
};
