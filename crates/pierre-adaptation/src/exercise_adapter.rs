// ABOUTME: Applies an adaptation strategy to a prescription within the category constraints
// ABOUTME: Weighted and bodyweight rules, clamping, load floor and deltas against the previous values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise adapter.
//!
//! Turns the previous prescription and a strategy into the next prescription.
//! Every result goes through the same post-processing regardless of the branch
//! taken: reps and sets are clamped into the category bounds, bodyweight
//! exercises never carry a load and loaded exercises never drop below the
//! minimum load.

use pierre_core::models::ExerciseCategory;

use crate::constraints::{round_to_half, AdaptationConstraints};
use crate::types::{
    AdaptationMagnitude, AdaptationStrategy, AdaptationType, AdaptedExercise, PrescriptionChange,
};

/// Rep floor applied when a load increase trades one rep away
const MIN_REPS_AFTER_LOAD_INCREASE: u32 = 6;
/// Bodyweight rep count from which progression converts reps into an extra set
const BODYWEIGHT_REPS_TO_SET_THRESHOLD: u32 = 15;
/// Rep count a bodyweight exercise drops back to when it gains a set
const BODYWEIGHT_REPS_AFTER_EXTRA_SET: u32 = 10;
/// Load multiplier of a normal deload
const DELOAD_FACTOR: f64 = 0.85;
/// Load multiplier of a deep deload
const DEEP_DELOAD_FACTOR: f64 = 0.70;

#[derive(Debug, Clone, Copy)]
struct Prescription {
    reps: u32,
    weight: Option<f64>,
    sets: u32,
}

/// Stateless adapter producing the next prescription of one exercise
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseAdapter;

impl ExerciseAdapter {
    /// Create an exercise adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Apply `strategy` to the current prescription
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn adapt(
        &self,
        current_reps: u32,
        current_weight: Option<f64>,
        current_sets: u32,
        strategy: &AdaptationStrategy,
        is_bodyweight: bool,
    ) -> AdaptedExercise {
        let category = ExerciseCategory::from_bodyweight(is_bodyweight);
        let constraints = AdaptationConstraints::for_category(category);
        let current = Prescription {
            reps: current_reps,
            weight: current_weight,
            sets: current_sets,
        };

        let adapted = match category {
            ExerciseCategory::Bodyweight => adapt_bodyweight(current, strategy, constraints),
            ExerciseCategory::Weighted => adapt_weighted(current, strategy, constraints),
        };

        let reps = constraints.clamp_reps(adapted.reps);
        let sets = constraints.clamp_sets(adapted.sets);
        let weight = match category {
            ExerciseCategory::Bodyweight => None,
            ExerciseCategory::Weighted => adapted.weight.map(|w| w.max(constraints.min_weight)),
        };

        let change_from_previous = PrescriptionChange {
            reps: i64::from(reps) - i64::from(current_reps),
            weight: weight.zip(current_weight).map(|(new, old)| new - old),
            sets: i64::from(sets) - i64::from(current_sets),
        };

        AdaptedExercise {
            reps,
            weight,
            sets,
            change_from_previous,
            reasoning: strategy.reasoning.clone(),
            strategy: strategy.clone(),
        }
    }
}

fn adapt_weighted(
    current: Prescription,
    strategy: &AdaptationStrategy,
    constraints: &AdaptationConstraints,
) -> Prescription {
    let loaded = current.weight.filter(|w| *w > 0.0);

    match strategy.adaptation_type {
        AdaptationType::Intensity => {
            let Some(weight) = loaded else {
                return Prescription {
                    weight: Some(constraints.min_weight),
                    ..current
                };
            };
            let increment = constraints
                .weight_increments
                .for_magnitude(strategy.magnitude)
                .min(weight * constraints.max_weight_increase_per_session);
            Prescription {
                reps: current
                    .reps
                    .saturating_sub(1)
                    .max(MIN_REPS_AFTER_LOAD_INCREASE),
                weight: Some(round_to_half(weight + increment)),
                sets: current.sets,
            }
        }
        AdaptationType::Volume => {
            let step = reps_step(strategy.magnitude);
            if current.reps.saturating_add(step) <= constraints.max_reps {
                Prescription {
                    reps: current.reps + step,
                    ..current
                }
            } else if current.sets < constraints.max_sets {
                Prescription {
                    sets: current.sets + 1,
                    ..current
                }
            } else {
                current
            }
        }
        AdaptationType::Density => Prescription {
            reps: current.reps.saturating_add(1).min(constraints.max_reps),
            weight: loaded.map_or(current.weight, |w| {
                Some(round_to_half(w + constraints.weight_increments.microloading))
            }),
            sets: current.sets,
        },
        AdaptationType::Deload => {
            let factor = deload_factor(strategy.magnitude);
            let (reps, weight) = match loaded {
                Some(w) => (current.reps, Some(round_to_half(w * factor))),
                None => (scale_reps(current.reps, factor), current.weight),
            };
            let sets = if strategy.magnitude == AdaptationMagnitude::Macro {
                current.sets.saturating_sub(1).max(constraints.min_sets)
            } else {
                current.sets
            };
            Prescription { reps, weight, sets }
        }
        AdaptationType::Maintain => current,
    }
}

fn adapt_bodyweight(
    current: Prescription,
    strategy: &AdaptationStrategy,
    constraints: &AdaptationConstraints,
) -> Prescription {
    match strategy.adaptation_type {
        AdaptationType::Intensity | AdaptationType::Volume | AdaptationType::Density => {
            if current.reps >= BODYWEIGHT_REPS_TO_SET_THRESHOLD {
                Prescription {
                    reps: current
                        .reps
                        .saturating_sub(3)
                        .max(BODYWEIGHT_REPS_AFTER_EXTRA_SET),
                    sets: current.sets.saturating_add(1).min(constraints.max_sets),
                    ..current
                }
            } else {
                Prescription {
                    reps: current.reps + reps_step(strategy.magnitude),
                    ..current
                }
            }
        }
        AdaptationType::Deload => {
            let decrement = if strategy.magnitude == AdaptationMagnitude::Macro {
                3
            } else {
                2
            };
            Prescription {
                reps: current
                    .reps
                    .saturating_sub(decrement)
                    .max(constraints.min_reps),
                sets: current.sets.saturating_sub(1).max(constraints.min_sets),
                ..current
            }
        }
        AdaptationType::Maintain => current,
    }
}

const fn reps_step(magnitude: AdaptationMagnitude) -> u32 {
    match magnitude {
        AdaptationMagnitude::Micro => 1,
        AdaptationMagnitude::Normal | AdaptationMagnitude::Macro => 2,
    }
}

const fn deload_factor(magnitude: AdaptationMagnitude) -> f64 {
    match magnitude {
        AdaptationMagnitude::Macro => DEEP_DELOAD_FACTOR,
        AdaptationMagnitude::Micro | AdaptationMagnitude::Normal => DELOAD_FACTOR,
    }
}

fn scale_reps(reps: u32, factor: f64) -> u32 {
    (f64::from(reps) * factor).floor() as u32
}
