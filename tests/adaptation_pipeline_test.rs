// ABOUTME: End-to-end tests of analyzer, strategy engine and adapter on realistic sessions
// ABOUTME: Reference scenarios plus score bounds and constraint properties over many set layouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{sets, sets_with_reps};
use pierre_adaptation::{
    AdaptationConfig, AdaptationConstraints, AdaptationMagnitude, AdaptationPipeline,
    AdaptationPriority, AdaptationType, FailurePattern, PerformanceStatus, BODYWEIGHT_CONSTRAINTS,
    WEIGHTED_CONSTRAINTS,
};
use pierre_core::models::{ExerciseCategory, ExercisePrescription, SetPerformance};

fn pipeline() -> AdaptationPipeline {
    AdaptationPipeline::with_config(AdaptationConfig::default())
}

#[test]
fn test_every_set_at_target_increases_load() {
    let prescription = ExercisePrescription::weighted(8, Some(50.0), 4);

    let result = pipeline().run(&prescription, &sets(4, 8, Some(50.0), true));

    assert!((result.analysis.difficulty_score - 100.0).abs() < 1e-9);
    assert_eq!(result.analysis.recommendation, PerformanceStatus::CrushingIt);
    let adapted = &result.adapted;
    assert_eq!(adapted.strategy.adaptation_type, AdaptationType::Intensity);
    assert_eq!((adapted.reps, adapted.weight, adapted.sets), (7, Some(52.5), 4));
    assert_eq!(adapted.change_from_previous.reps, -1);
    assert_eq!(adapted.change_from_previous.weight, Some(2.5));
    assert_eq!(adapted.change_from_previous.sets, 0);
}

#[test]
fn test_collapsed_session_deloads_deeply() {
    let prescription = ExercisePrescription::weighted(8, Some(50.0), 4);
    let performances =
        sets_with_reps(&[(2, false), (1, false), (0, false), (0, false)], Some(50.0));

    let result = pipeline().run(&prescription, &performances);

    assert!(result.analysis.difficulty_score < 30.0);
    assert_eq!(result.analysis.recommendation, PerformanceStatus::Overreaching);
    assert_eq!(result.analysis.failure_pattern, FailurePattern::Distributed);
    let adapted = &result.adapted;
    assert_eq!(adapted.strategy.adaptation_type, AdaptationType::Deload);
    assert_eq!(adapted.strategy.magnitude, AdaptationMagnitude::Macro);
    assert_eq!(adapted.weight, Some(35.0));
    assert_eq!(adapted.sets, 3);
}

#[test]
fn test_struggling_session_deloads_load() {
    let prescription = ExercisePrescription::weighted(8, Some(50.0), 4);
    let performances =
        sets_with_reps(&[(5, false), (4, false), (4, false), (3, false)], Some(50.0));

    let result = pipeline().run(&prescription, &performances);

    let score = result.analysis.difficulty_score;
    assert!((30.0..45.0).contains(&score), "score {score}");
    assert_eq!(result.analysis.recommendation, PerformanceStatus::Struggling);
    let adapted = &result.adapted;
    assert_eq!(adapted.strategy.adaptation_type, AdaptationType::Deload);
    assert_eq!(adapted.strategy.priority, AdaptationPriority::Weight);
    assert_eq!(adapted.strategy.magnitude, AdaptationMagnitude::Normal);
    assert_eq!((adapted.reps, adapted.weight, adapted.sets), (8, Some(42.5), 4));
    assert_eq!(adapted.change_from_previous.weight, Some(-7.5));
}

#[test]
fn test_easy_bodyweight_session_adds_reps() {
    let prescription = ExercisePrescription::bodyweight(12, 3);

    let result = pipeline().run(&prescription, &sets(3, 12, None, true));

    assert_eq!(result.analysis.recommendation, PerformanceStatus::CrushingIt);
    let adapted = &result.adapted;
    assert_eq!(adapted.strategy.adaptation_type, AdaptationType::Volume);
    assert_eq!((adapted.reps, adapted.weight, adapted.sets), (14, None, 3));
}

#[test]
fn test_ideal_zone_keeps_prescription() {
    let prescription = ExercisePrescription::weighted(10, Some(40.0), 4);
    let performances =
        sets_with_reps(&[(10, true), (9, true), (8, false), (7, false)], Some(40.0));

    let result = pipeline().run(&prescription, &performances);

    let score = result.analysis.difficulty_score;
    assert!((60.0..75.0).contains(&score), "score {score}");
    assert_eq!(result.analysis.failure_pattern, FailurePattern::Late);
    assert_eq!(result.adapted.strategy.adaptation_type, AdaptationType::Maintain);
    assert_eq!(
        (result.adapted.reps, result.adapted.weight, result.adapted.sets),
        (10, Some(40.0), 4)
    );
    assert!(result.adapted.change_from_previous.is_unchanged());
}

#[test]
fn test_prescription_category_selects_constraints() {
    let squat = ExercisePrescription::weighted(8, Some(50.0), 4);
    let push_ups = ExercisePrescription::bodyweight(12, 3);

    assert_eq!(squat.category(), ExerciseCategory::Weighted);
    assert_eq!(push_ups.category(), ExerciseCategory::Bodyweight);
    assert_eq!(
        AdaptationConstraints::for_category(squat.category()),
        &WEIGHTED_CONSTRAINTS
    );
    assert_eq!(
        AdaptationConstraints::for_category(push_ups.category()),
        &BODYWEIGHT_CONSTRAINTS
    );
}

#[test]
fn test_scores_and_prescriptions_stay_in_bounds() {
    let pipeline = pipeline();
    let loads = [None, Some(20.0), Some(50.0), Some(120.0)];

    for &load in &loads {
        for reps_done in [0_u32, 3, 8, 12, 20] {
            for failures in 0..=4_u32 {
                let performances: Vec<SetPerformance> = (0..4)
                    .map(|i| SetPerformance::new(i, reps_done, load, i >= failures))
                    .collect();
                let prescription = match load {
                    Some(_) => ExercisePrescription::weighted(8, load, 4),
                    None => ExercisePrescription::bodyweight(12, 4),
                };
                let constraints = AdaptationConstraints::for_category(prescription.category());

                let result = pipeline.run(&prescription, &performances);

                let score = result.analysis.difficulty_score;
                assert!((0.0..=100.0).contains(&score), "score {score}");
                let adapted = &result.adapted;
                assert!((constraints.min_reps..=constraints.max_reps).contains(&adapted.reps));
                assert!((constraints.min_sets..=constraints.max_sets).contains(&adapted.sets));
                if prescription.is_bodyweight {
                    assert_eq!(adapted.weight, None);
                }
                if let (Some(before), Some(after)) = (prescription.weight, adapted.weight) {
                    let cap = before * constraints.max_weight_increase_per_session;
                    assert!(after - before <= cap.max(constraints.weight_increments.standard));
                }
            }
        }
    }
}
