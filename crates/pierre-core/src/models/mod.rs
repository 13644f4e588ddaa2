// ABOUTME: Core data models for strength training sessions and their adaptation
// ABOUTME: Re-exports prescriptions, per-set performances, sessions and templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Data structures exchanged between the adaptation engine, the orchestration
//! service and the persistence collaborator.
//!
//! ## Core Models
//!
//! - `SetPerformance`: the recorded outcome of one executed set
//! - `ExercisePrescription`: the planned reps/weight/sets for an exercise
//! - `TrainingSession`: a session with its exercises and the owning profile
//! - `SessionTemplate`: a reusable session plan adapted in place between cycles
//! - `NewSession`: what the orchestrator asks the collaborator to persist

mod session;
mod strength;

pub use session::{
    ExerciseId, FitnessProfile, NewSession, PerformedExercise, PlannedExercise, ProgramId,
    SessionId, SessionStatus, SessionTemplate, TemplateExercise, TemplateExerciseId,
    TemplateExerciseUpdate, TemplateId, TrainingSession, UserId, WeekDay,
};
pub use strength::{ExerciseCategory, ExercisePrescription, SetPerformance};
