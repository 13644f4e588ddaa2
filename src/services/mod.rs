// ABOUTME: Domain service layer orchestrating the adaptation engine and its collaborators
// ABOUTME: Protocol-agnostic services reusable from the CLI, tests or any future transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold the business rules around the pure engine: ownership checks,
//! completeness validation, scheduling and persistence.

/// Completed session → next session
pub mod session_adaptation;

pub use session_adaptation::{
    AdaptedSessionOutcome, ExerciseAdaptationReport, SessionAdaptationService,
};
