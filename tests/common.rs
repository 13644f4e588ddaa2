// ABOUTME: Shared fixtures for the strength adaptation integration tests
// ABOUTME: Builders for profiles, performed exercises, completed sessions and templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_strength`

use std::sync::Once;

use chrono::NaiveDate;
use pierre_core::models::{
    ExerciseId, ExercisePrescription, FitnessProfile, PerformedExercise, ProgramId, SessionId,
    SessionStatus, SessionTemplate, SetPerformance, TemplateExercise, TemplateExerciseId,
    TrainingSession, UserId, WeekDay,
};
use pierre_strength::database_plugins::InMemorySessionStore;

pub const USER_ID: UserId = 7;
pub const OTHER_USER_ID: UserId = 8;
pub const PROGRAM_ID: ProgramId = 1;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Wednesday
pub fn reference_date() -> NaiveDate {
    date(2025, 3, 5)
}

pub fn profile(training_days: &[WeekDay]) -> FitnessProfile {
    FitnessProfile {
        user_id: USER_ID,
        training_days: training_days.to_vec(),
    }
}

/// `count` sets with identical reps and load
pub fn sets(count: u32, reps: u32, weight: Option<f64>, success: bool) -> Vec<SetPerformance> {
    (0..count)
        .map(|i| SetPerformance::new(i, reps, weight, success))
        .collect()
}

/// Sets with per-set reps, all at the same load
pub fn sets_with_reps(reps: &[(u32, bool)], weight: Option<f64>) -> Vec<SetPerformance> {
    reps.iter()
        .zip(0_u32..)
        .map(|(&(reps, success), i)| SetPerformance::new(i, reps, weight, success))
        .collect()
}

pub fn weighted(
    exercise_id: ExerciseId,
    reps: u32,
    weight: f64,
    set_count: u32,
    performances: Vec<SetPerformance>,
) -> PerformedExercise {
    PerformedExercise {
        exercise_id,
        prescription: ExercisePrescription::weighted(reps, Some(weight), set_count),
        performances,
    }
}

pub fn bodyweight(
    exercise_id: ExerciseId,
    reps: u32,
    set_count: u32,
    performances: Vec<SetPerformance>,
) -> PerformedExercise {
    PerformedExercise {
        exercise_id,
        prescription: ExercisePrescription::bodyweight(reps, set_count),
        performances,
    }
}

/// 4×8 at 50 kg, every set at target
pub fn easy_bench_press() -> PerformedExercise {
    weighted(100, 8, 50.0, 4, sets(4, 8, Some(50.0), true))
}

/// 3×12 push-ups, every set at target
pub fn easy_push_ups() -> PerformedExercise {
    bodyweight(200, 12, 3, sets(3, 12, None, true))
}

/// 4×8 at 50 kg, every set failed far from target at maximal effort
pub fn collapsed_squat() -> PerformedExercise {
    let performances = sets_with_reps(&[(2, false), (1, false), (0, false), (0, false)], Some(50.0))
        .into_iter()
        .map(|set| set.with_rpe(10.0))
        .collect();
    weighted(300, 8, 50.0, 4, performances)
}

pub fn completed_session(id: SessionId, exercises: Vec<PerformedExercise>) -> TrainingSession {
    TrainingSession {
        id,
        program_id: PROGRAM_ID,
        profile: Some(profile(&[WeekDay::Monday, WeekDay::Thursday])),
        session_name: Some("Push day".to_owned()),
        session_template_id: None,
        original_session_id: None,
        date: Some(date(2025, 3, 3)),
        status: SessionStatus::Completed,
        exercises,
    }
}

pub fn template_exercise(
    id: TemplateExerciseId,
    exercise_id: ExerciseId,
    order_in_session: u32,
    prescription: ExercisePrescription,
) -> TemplateExercise {
    TemplateExercise {
        id,
        exercise_id,
        order_in_session,
        prescription,
    }
}

pub async fn store_with(session: TrainingSession) -> InMemorySessionStore {
    init_test_logging();
    let store = InMemorySessionStore::new();
    store.insert_session(session).await;
    store
}

pub async fn store_with_template(
    session: TrainingSession,
    template: SessionTemplate,
) -> InMemorySessionStore {
    let store = store_with(session).await;
    store.insert_template(template).await;
    store
}
