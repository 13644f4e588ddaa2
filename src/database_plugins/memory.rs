// ABOUTME: In-memory session repository backing the CLI and the test suites
// ABOUTME: Every write happens under a single lock so multi-row operations are atomic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{
    ExercisePrescription, FitnessProfile, NewSession, PerformedExercise, ProgramId, SessionId,
    SessionTemplate, TemplateExerciseUpdate, TemplateId, TrainingSession,
};
use tokio::sync::RwLock;
use tracing::debug;

use super::SessionRepository;

#[derive(Debug, Default)]
struct StoreState {
    next_session_id: SessionId,
    sessions: HashMap<SessionId, TrainingSession>,
    templates: HashMap<TemplateId, SessionTemplate>,
    profiles: HashMap<ProgramId, FitnessProfile>,
}

impl StoreState {
    fn allocate_session_id(&mut self) -> SessionId {
        self.next_session_id += 1;
        self.next_session_id
    }

    /// Attach the owning profile through the session's program
    fn resolve(&self, mut session: TrainingSession) -> TrainingSession {
        if let Some(profile) = self.profiles.get(&session.program_id) {
            session.profile = Some(profile.clone());
        }
        session
    }

    fn insert_new(&mut self, new_session: NewSession) -> TrainingSession {
        let id = self.allocate_session_id();
        let exercises = new_session
            .exercises
            .into_iter()
            .map(|planned| PerformedExercise {
                exercise_id: planned.exercise_id,
                prescription: ExercisePrescription {
                    reps: planned.reps,
                    weight: planned.weight,
                    sets: planned.sets,
                    is_bodyweight: planned.is_bodyweight,
                },
                performances: Vec::new(),
            })
            .collect();

        let session = self.resolve(TrainingSession {
            id,
            program_id: new_session.program_id,
            profile: None,
            session_name: new_session.session_name,
            session_template_id: new_session.session_template_id,
            original_session_id: new_session.original_session_id,
            date: new_session.date,
            status: new_session.status,
            exercises,
        });
        self.sessions.insert(id, session.clone());
        session
    }
}

/// Session repository held entirely in memory
///
/// Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a fitness profile to a program
    pub async fn register_program(&self, program_id: ProgramId, profile: FitnessProfile) {
        self.state.write().await.profiles.insert(program_id, profile);
    }

    /// Store an existing session as-is
    ///
    /// A session carrying a profile also registers that profile for its program.
    pub async fn insert_session(&self, session: TrainingSession) {
        let mut state = self.state.write().await;
        if let Some(profile) = &session.profile {
            state.profiles.insert(session.program_id, profile.clone());
        }
        state.next_session_id = state.next_session_id.max(session.id);
        state.sessions.insert(session.id, session);
    }

    /// Store a session template
    pub async fn insert_template(&self, template: SessionTemplate) {
        self.state
            .write()
            .await
            .templates
            .insert(template.id, template);
    }

    /// Number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn get_session(&self, session_id: SessionId) -> AppResult<Option<TrainingSession>> {
        let state = self.state.read().await;
        Ok(state
            .sessions
            .get(&session_id)
            .cloned()
            .map(|session| state.resolve(session)))
    }

    async fn get_session_template(
        &self,
        template_id: TemplateId,
    ) -> AppResult<Option<SessionTemplate>> {
        let state = self.state.read().await;
        Ok(state.templates.get(&template_id).map(|template| {
            let mut template = template.clone();
            template.exercises.sort_by_key(|e| e.order_in_session);
            template
        }))
    }

    async fn create_session(&self, session: NewSession) -> AppResult<TrainingSession> {
        let created = self.state.write().await.insert_new(session);
        debug!(session_id = created.id, "Stored new session");
        Ok(created)
    }

    async fn adapt_template_and_create_session(
        &self,
        template_id: TemplateId,
        updates: Vec<TemplateExerciseUpdate>,
        session: NewSession,
    ) -> AppResult<TrainingSession> {
        let mut state = self.state.write().await;

        let template = state
            .templates
            .get(&template_id)
            .ok_or_else(|| AppError::not_found(format!("Session template {template_id}")))?;

        // Validate every row before touching anything
        let mut positions = Vec::with_capacity(updates.len());
        for update in &updates {
            let position = template
                .exercises
                .iter()
                .position(|e| e.id == update.template_exercise_id)
                .ok_or_else(|| {
                    AppError::not_found(format!(
                        "Template exercise {}",
                        update.template_exercise_id
                    ))
                    .with_resource_id(template_id.to_string())
                })?;
            positions.push(position);
        }

        if let Some(template) = state.templates.get_mut(&template_id) {
            for (update, position) in updates.iter().zip(positions) {
                let prescription = &mut template.exercises[position].prescription;
                prescription.reps = update.reps;
                prescription.weight = update.weight;
                prescription.sets = update.sets;
            }
        }

        let created = state.insert_new(session);
        debug!(
            template_id,
            session_id = created.id,
            "Adapted template and stored next session"
        );
        Ok(created)
    }
}
