// ABOUTME: Strength exercise prescription and per-set performance records
// ABOUTME: Defines SetPerformance, ExercisePrescription and the weighted/bodyweight category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Load category of an exercise, which selects the adaptation constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// External load (barbell, dumbbell, machine); progresses by weight first
    Weighted,
    /// No external load; progresses by volume only
    Bodyweight,
}

impl ExerciseCategory {
    /// Category for an exercise flagged as bodyweight or not
    #[must_use]
    pub const fn from_bodyweight(is_bodyweight: bool) -> Self {
        if is_bodyweight {
            Self::Bodyweight
        } else {
            Self::Weighted
        }
    }
}

/// One executed set, immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPerformance {
    /// Position of the set within the exercise (0- or 1-based, only the order matters)
    pub set_index: u32,
    /// Repetitions actually completed
    pub reps_completed: u32,
    /// Load used in kilograms, if recorded
    #[serde(default)]
    pub weight_used: Option<f64>,
    /// Rate of perceived exertion, if recorded
    #[serde(default)]
    pub rpe: Option<f64>,
    /// Whether the athlete judged the set successful
    pub success: bool,
}

impl SetPerformance {
    /// Record a set without RPE
    #[must_use]
    pub const fn new(
        set_index: u32,
        reps_completed: u32,
        weight_used: Option<f64>,
        success: bool,
    ) -> Self {
        Self {
            set_index,
            reps_completed,
            weight_used,
            rpe: None,
            success,
        }
    }

    /// Attach a perceived exertion score
    #[must_use]
    pub fn with_rpe(mut self, rpe: f64) -> Self {
        self.rpe = Some(rpe);
        self
    }
}

/// Planned reps/weight/sets for an exercise in a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExercisePrescription {
    /// Target repetitions per set
    pub reps: u32,
    /// Target load in kilograms; `None` for bodyweight or not-yet-loaded exercises
    #[serde(default)]
    pub weight: Option<f64>,
    /// Number of sets
    pub sets: u32,
    /// Whether the exercise uses no external load
    #[serde(default)]
    pub is_bodyweight: bool,
}

impl ExercisePrescription {
    /// Prescription for a loaded exercise
    #[must_use]
    pub const fn weighted(reps: u32, weight: Option<f64>, sets: u32) -> Self {
        Self {
            reps,
            weight,
            sets,
            is_bodyweight: false,
        }
    }

    /// Prescription for a bodyweight exercise
    #[must_use]
    pub const fn bodyweight(reps: u32, sets: u32) -> Self {
        Self {
            reps,
            weight: None,
            sets,
            is_bodyweight: true,
        }
    }

    /// Load category of this prescription
    #[must_use]
    pub const fn category(&self) -> ExerciseCategory {
        ExerciseCategory::from_bodyweight(self.is_bodyweight)
    }
}
