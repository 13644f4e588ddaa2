// ABOUTME: Persistence abstraction for training sessions and session templates
// ABOUTME: Collaborator trait consumed by the adaptation service plus the in-memory backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session persistence layer
//!
//! The adaptation service never talks to storage directly; it goes through
//! [`SessionRepository`]. Backends must make every multi-row write atomic.

use async_trait::async_trait;
use pierre_core::errors::AppResult;
use pierre_core::models::{
    NewSession, SessionId, SessionTemplate, TemplateExerciseUpdate, TemplateId, TrainingSession,
};

/// In-memory backend
pub mod memory;

pub use memory::InMemorySessionStore;

/// Core persistence abstraction for the adaptation workflow
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Get a session with its exercises, their recorded sets and the owning profile
    async fn get_session(&self, session_id: SessionId) -> AppResult<Option<TrainingSession>>;

    /// Get a session template with its exercises ordered by position
    async fn get_session_template(
        &self,
        template_id: TemplateId,
    ) -> AppResult<Option<SessionTemplate>>;

    /// Create a session together with all of its exercise prescriptions
    ///
    /// Either the session and every prescription are stored, or nothing is.
    async fn create_session(&self, session: NewSession) -> AppResult<TrainingSession>;

    /// Update template prescriptions and create the next session in one atomic unit
    async fn adapt_template_and_create_session(
        &self,
        template_id: TemplateId,
        updates: Vec<TemplateExerciseUpdate>,
        session: NewSession,
    ) -> AppResult<TrainingSession>;
}
