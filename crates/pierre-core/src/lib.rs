// ABOUTME: Core types and constants for the Pierre strength adaptation workspace
// ABOUTME: Foundation crate with error handling, training-session models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre strength
//! adaptation engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Training sessions, exercise prescriptions and per-set performances

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and configuration keys organized by domain
pub mod constants;

/// Core data models (`TrainingSession`, `ExercisePrescription`, `SetPerformance`, ...)
pub mod models;
