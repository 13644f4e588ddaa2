// ABOUTME: Main library entry point for the Pierre strength session adaptation service
// ABOUTME: Orchestration, persistence and scheduling collaborators around the adaptation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Adapts the next strength-training session from what the athlete actually
//! did in the previous one.
//!
//! ## Architecture
//!
//! - **`pierre_core`**: errors, domain models and constants
//! - **`pierre_adaptation`**: the pure analyzer → strategy → adapter pipeline
//! - **services**: ownership checks, validation and persistence orchestration
//! - **`database_plugins`**: the persistence collaborator and its in-memory backend
//! - **scheduling**: the next-session date collaborator
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_strength::database_plugins::InMemorySessionStore;
//! use pierre_strength::services::SessionAdaptationService;
//! use pierre_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = InMemorySessionStore::new();
//!     let service = SessionAdaptationService::new(store);
//!
//!     let outcome = service.create_adapted_session_from_previous(42, 7).await?;
//!     println!("Next session: {:?}", outcome.session.date);
//!
//!     Ok(())
//! }
//! ```

/// Session persistence abstraction and in-memory backend
pub mod database_plugins;

/// Structured logging setup
pub mod logging;

/// Next-session date selection
pub mod scheduling;

/// Domain services
pub mod services;

/// JSON session documents
pub mod session_file;

pub use pierre_adaptation as adaptation;
pub use pierre_core::{constants, errors, models};
