// ABOUTME: Value types flowing through the adaptation pipeline
// ABOUTME: Performance classification enums, analysis, strategy and adapted prescription
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pipeline value types.
//!
//! Everything here is ephemeral: it exists for the duration of one adaptation
//! call and only the resulting prescriptions are ever persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::StatusThresholds;

/// Overall judgment of how hard the previous session was
///
/// Ordered from "too easy" to "too hard".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceStatus {
    /// Far too easy
    CrushingIt,
    /// Comfortable, room to progress
    Strong,
    /// Ideal progression zone
    Perfect,
    /// Hard but manageable
    Challenging,
    /// Too hard
    Struggling,
    /// Signs of overreaching
    Overreaching,
}

impl PerformanceStatus {
    /// Every status, from easiest to hardest
    pub const ALL: [Self; 6] = [
        Self::CrushingIt,
        Self::Strong,
        Self::Perfect,
        Self::Challenging,
        Self::Struggling,
        Self::Overreaching,
    ];

    /// Classify a difficulty score with the default bucket boundaries
    ///
    /// Each bucket's lower bound is inclusive: 90.0 is `CrushingIt`, 89.99 is `Strong`.
    #[must_use]
    pub fn from_difficulty_score(score: f64) -> Self {
        StatusThresholds::default().classify(score)
    }
}

impl fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CrushingIt => "crushing_it",
            Self::Strong => "strong",
            Self::Perfect => "perfect",
            Self::Challenging => "challenging",
            Self::Struggling => "struggling",
            Self::Overreaching => "overreaching",
        };
        f.write_str(label)
    }
}

/// Where the failed sets of an exercise are concentrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePattern {
    /// No failed set
    None,
    /// Failures concentrated in the first half: the load was too heavy from the start
    Early,
    /// Failures concentrated in the second half: normal fatigue
    Late,
    /// Failures spread across the session
    Distributed,
}

/// Direction of the change applied to the next prescription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationType {
    /// More reps or sets
    Volume,
    /// More load
    Intensity,
    /// More reps and a little more load
    Density,
    /// Less load, reps or sets
    Deload,
    /// Keep the prescription to consolidate
    Maintain,
}

/// Which prescription component the strategy acts on first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationPriority {
    /// Repetitions
    Reps,
    /// Load
    Weight,
    /// Number of sets
    Sets,
    /// Combination
    Mixed,
}

/// Size of the change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationMagnitude {
    /// Smallest step (+1.25 kg, +1 rep)
    Micro,
    /// Standard step (+2.5 kg, +2 reps)
    Normal,
    /// Large step (+5 kg, deep deload)
    Macro,
}

/// Metrics and classification derived from one exercise's recorded sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    /// Share of successful sets, in [0, 1]
    pub success_rate: f64,
    /// Sum of reps × load over all sets
    pub total_volume: f64,
    /// Mean completed reps per set
    pub avg_reps_completed: f64,
    /// Mean load over sets with a recorded positive load
    pub avg_weight_used: Option<f64>,
    /// Mean completed reps relative to the target
    pub reps_completion_rate: f64,
    /// Mean load relative to the target; 1.0 when no target load exists
    pub weight_completion_rate: f64,
    /// Distribution of failed sets
    pub failure_pattern: FailurePattern,
    /// 1 minus the coefficient of variation of completed reps, in [0, 1]
    pub consistency_score: f64,
    /// Composite difficulty score in [0, 100]; higher means easier
    pub difficulty_score: f64,
    /// Classification of `difficulty_score`
    pub recommendation: PerformanceStatus,
    /// Number of recorded sets
    pub total_sets: usize,
    /// Number of successful sets
    pub successful_sets: usize,
    /// Number of sets the prescription asked for
    pub planned_sets: u32,
}

/// Directional decision derived from a performance classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptationStrategy {
    /// Kind of change
    pub adaptation_type: AdaptationType,
    /// Component acted on first
    pub priority: AdaptationPriority,
    /// Size of the change
    pub magnitude: AdaptationMagnitude,
    /// Human-readable explanation
    pub reasoning: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Difference between the adapted and the previous prescription
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionChange {
    /// Reps delta
    pub reps: i64,
    /// Load delta; `None` unless both the previous and the new load exist
    pub weight: Option<f64>,
    /// Sets delta
    pub sets: i64,
}

impl PrescriptionChange {
    /// Whether nothing changed
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.reps == 0
            && self.sets == 0
            && self.weight.is_none_or(|delta| delta.abs() < f64::EPSILON)
    }
}

/// New prescription produced by the adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptedExercise {
    /// New target repetitions
    pub reps: u32,
    /// New target load; always `None` for bodyweight exercises
    pub weight: Option<f64>,
    /// New number of sets
    pub sets: u32,
    /// Deltas against the previous prescription
    pub change_from_previous: PrescriptionChange,
    /// Explanation carried over from the strategy
    pub reasoning: String,
    /// Strategy that produced this prescription
    pub strategy: AdaptationStrategy,
}
