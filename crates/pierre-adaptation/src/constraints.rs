// ABOUTME: Physical and safety constraint tables for weighted and bodyweight exercises
// ABOUTME: Immutable bounds on reps, sets and load plus load increments, selected by category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Adaptation constraints.
//!
//! Two immutable tables bound every adapted prescription. They are selected
//! purely by exercise category and are never mutated at runtime.

use pierre_core::models::ExerciseCategory;
use serde::Serialize;

use crate::types::AdaptationMagnitude;

/// Standard load increments in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightIncrements {
    /// Smallest plate step
    pub microloading: f64,
    /// Usual progression step
    pub standard: f64,
    /// Large progression step
    pub macro_step: f64,
}

impl WeightIncrements {
    /// Increment matching a strategy magnitude
    #[must_use]
    pub const fn for_magnitude(&self, magnitude: AdaptationMagnitude) -> f64 {
        match magnitude {
            AdaptationMagnitude::Micro => self.microloading,
            AdaptationMagnitude::Normal => self.standard,
            AdaptationMagnitude::Macro => self.macro_step,
        }
    }
}

/// Bounds applied to every adapted prescription of one exercise category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdaptationConstraints {
    /// Fewest reps a prescription may ask for
    pub min_reps: u32,
    /// Most reps a prescription may ask for
    pub max_reps: u32,
    /// Fewest sets
    pub min_sets: u32,
    /// Most sets
    pub max_sets: u32,
    /// Lightest load a loaded prescription may carry
    pub min_weight: f64,
    /// Load steps
    pub weight_increments: WeightIncrements,
    /// Largest load increase per session, as a ratio of the current load
    pub max_weight_increase_per_session: f64,
    /// Largest reps increase per session
    pub max_reps_increase_per_session: u32,
    /// Largest sets increase per session
    pub max_sets_increase_per_session: u32,
    /// Whether overtraining safeguards are active
    pub prevent_overtraining: bool,
    /// Sessions to hold a new level before progressing again
    pub require_consolidation_sessions: u32,
}

/// Loaded exercises: strength/hypertrophy rep ranges, progression by load
pub const WEIGHTED_CONSTRAINTS: AdaptationConstraints = AdaptationConstraints {
    min_reps: 5,
    max_reps: 12,
    min_sets: 3,
    max_sets: 5,
    min_weight: 2.5,
    weight_increments: WeightIncrements {
        microloading: 1.25,
        standard: 2.5,
        macro_step: 5.0,
    },
    max_weight_increase_per_session: 0.10,
    max_reps_increase_per_session: 2,
    max_sets_increase_per_session: 1,
    prevent_overtraining: true,
    require_consolidation_sessions: 2,
};

/// Bodyweight exercises: endurance rep ranges, progression by volume only
pub const BODYWEIGHT_CONSTRAINTS: AdaptationConstraints = AdaptationConstraints {
    min_reps: 5,
    max_reps: 25,
    min_sets: 3,
    max_sets: 5,
    min_weight: 0.0,
    weight_increments: WeightIncrements {
        microloading: 0.0,
        standard: 0.0,
        macro_step: 0.0,
    },
    max_weight_increase_per_session: 0.0,
    max_reps_increase_per_session: 3,
    max_sets_increase_per_session: 1,
    prevent_overtraining: true,
    require_consolidation_sessions: 2,
};

impl AdaptationConstraints {
    /// Constraint table for an exercise category
    #[must_use]
    pub const fn for_category(category: ExerciseCategory) -> &'static Self {
        match category {
            ExerciseCategory::Weighted => &WEIGHTED_CONSTRAINTS,
            ExerciseCategory::Bodyweight => &BODYWEIGHT_CONSTRAINTS,
        }
    }

    /// Clamp a rep count into `[min_reps, max_reps]`
    #[must_use]
    pub fn clamp_reps(&self, reps: u32) -> u32 {
        reps.clamp(self.min_reps, self.max_reps)
    }

    /// Clamp a set count into `[min_sets, max_sets]`
    #[must_use]
    pub fn clamp_sets(&self, sets: u32) -> u32 {
        sets.clamp(self.min_sets, self.max_sets)
    }
}

/// Round a load to the nearest half kilogram
#[must_use]
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_selected_by_category() {
        let weighted = AdaptationConstraints::for_category(ExerciseCategory::Weighted);
        let bodyweight = AdaptationConstraints::for_category(ExerciseCategory::Bodyweight);

        assert_eq!(weighted.max_reps, 12);
        assert_eq!(bodyweight.max_reps, 25);
        assert!((weighted.min_weight - 2.5).abs() < f64::EPSILON);
        assert!(bodyweight.min_weight.abs() < f64::EPSILON);
    }

    #[test]
    fn test_increment_per_magnitude() {
        let increments = WEIGHTED_CONSTRAINTS.weight_increments;
        assert!((increments.for_magnitude(AdaptationMagnitude::Micro) - 1.25).abs() < f64::EPSILON);
        assert!((increments.for_magnitude(AdaptationMagnitude::Normal) - 2.5).abs() < f64::EPSILON);
        assert!((increments.for_magnitude(AdaptationMagnitude::Macro) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_half() {
        assert!((round_to_half(51.25) - 51.5).abs() < f64::EPSILON);
        assert!((round_to_half(35.0) - 35.0).abs() < f64::EPSILON);
        assert!((round_to_half(42.74) - 42.5).abs() < f64::EPSILON);
        assert!((round_to_half(42.76) - 43.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(WEIGHTED_CONSTRAINTS.clamp_reps(20), 12);
        assert_eq!(WEIGHTED_CONSTRAINTS.clamp_reps(1), 5);
        assert_eq!(BODYWEIGHT_CONSTRAINTS.clamp_sets(9), 5);
        assert_eq!(BODYWEIGHT_CONSTRAINTS.clamp_sets(0), 3);
    }
}
