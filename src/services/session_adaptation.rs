// ABOUTME: Orchestrates adapting a completed training session into the next one
// ABOUTME: Ownership and completeness checks, parallel per-exercise adaptation, atomic persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session adaptation service
//!
//! Flow of an adaptation request:
//!
//! 1. fetch the previous session and check the caller owns its fitness profile
//! 2. refuse sessions with an exercise that has no recorded set
//! 3. run analyzer → strategy → adapter for every exercise (in parallel)
//! 4. persist the next session in a single atomic call
//!
//! Sessions instantiated from a template adapt the template in place and get a
//! new, empty scheduled instance. Other sessions get a new session carrying the
//! adapted prescriptions.

use chrono::{NaiveDate, Utc};
use pierre_adaptation::constraints::round_to_half;
use pierre_adaptation::{AdaptationPipeline, ExerciseAdaptation};
use pierre_core::constants::session_naming::{
    ADAPTED_SESSION_PREFIX, PREVIOUS_SESSION_FALLBACK, SIMILAR_SESSION_PREFIX,
};
use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{
    ExerciseId, ExercisePrescription, NewSession, PerformedExercise, PlannedExercise, SessionId,
    SessionStatus, SessionTemplate, SetPerformance, TemplateExerciseId, TemplateExerciseUpdate,
    TemplateId, TrainingSession, UserId,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::database_plugins::SessionRepository;
use crate::scheduling::{SessionScheduler, WeekdayScheduler};

/// Adaptation computed for one exercise of the previous session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseAdaptationReport {
    /// Catalog exercise
    pub exercise_id: ExerciseId,
    /// Template row updated with the new prescription, for template-backed sessions
    pub template_exercise_id: Option<TemplateExerciseId>,
    /// Prescription the adaptation started from
    pub previous: ExercisePrescription,
    /// Analysis and new prescription
    pub adaptation: ExerciseAdaptation,
}

impl ExerciseAdaptationReport {
    fn planned(&self) -> PlannedExercise {
        let adapted = &self.adaptation.adapted;
        PlannedExercise {
            exercise_id: self.exercise_id,
            reps: adapted.reps,
            weight: adapted.weight,
            sets: adapted.sets,
            is_bodyweight: self.previous.is_bodyweight,
        }
    }
}

/// Result of adapting a completed session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptedSessionOutcome {
    /// Newly created session
    pub session: TrainingSession,
    /// Per-exercise adaptations, in session (or template) order
    pub adaptations: Vec<ExerciseAdaptationReport>,
}

/// Service turning completed sessions into the next session of a program
pub struct SessionAdaptationService<R, S = WeekdayScheduler> {
    repository: R,
    scheduler: S,
    pipeline: AdaptationPipeline,
}

impl<R: SessionRepository> SessionAdaptationService<R> {
    /// Create a service scheduling on preferred weekdays with the global scoring configuration
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_scheduler(repository, WeekdayScheduler)
    }
}

impl<R: SessionRepository, S: SessionScheduler> SessionAdaptationService<R, S> {
    /// Create a service with a custom scheduling collaborator
    #[must_use]
    pub fn with_scheduler(repository: R, scheduler: S) -> Self {
        Self::with_pipeline(repository, scheduler, AdaptationPipeline::new())
    }

    /// Create a service with explicit collaborators and pipeline
    #[must_use]
    pub const fn with_pipeline(repository: R, scheduler: S, pipeline: AdaptationPipeline) -> Self {
        Self {
            repository,
            scheduler,
            pipeline,
        }
    }

    /// Persistence collaborator in use
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Fetch a session with its recorded sets, checking the caller owns it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the session or its fitness profile does not
    /// exist, `PermissionDenied` if the profile belongs to another user, or the
    /// repository error unchanged
    pub async fn get_session_with_performances(
        &self,
        session_id: SessionId,
        user_id: UserId,
    ) -> AppResult<TrainingSession> {
        let session = self
            .repository
            .get_session(session_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Training session #{session_id}"))
                    .with_resource_id(session_id.to_string())
            })?;

        let owner = session.profile.as_ref().map(|profile| profile.user_id);
        match owner {
            None => Err(AppError::not_found("Fitness profile")
                .with_resource_id(session.program_id.to_string())),
            Some(owner) if owner != user_id => {
                warn!(session_id, user_id, "Rejected access to another user's session");
                Err(
                    AppError::permission_denied("You do not have access to this training session")
                        .with_user_id(user_id)
                        .with_resource_id(session_id.to_string()),
                )
            }
            Some(_) => Ok(session),
        }
    }

    /// Adapt a completed session into the next one, scheduled from today
    ///
    /// # Errors
    ///
    /// See [`Self::create_adapted_session_from_previous_on`]
    pub async fn create_adapted_session_from_previous(
        &self,
        session_id: SessionId,
        user_id: UserId,
    ) -> AppResult<AdaptedSessionOutcome> {
        self.create_adapted_session_from_previous_on(session_id, user_id, today())
            .await
    }

    /// Adapt a completed session into the next one, scheduled after `reference_date`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing session, profile or template,
    /// `PermissionDenied` when the caller does not own the session, `InvalidInput`
    /// when an exercise has no recorded set, or the repository error unchanged
    pub async fn create_adapted_session_from_previous_on(
        &self,
        session_id: SessionId,
        user_id: UserId,
        reference_date: NaiveDate,
    ) -> AppResult<AdaptedSessionOutcome> {
        let previous = self
            .get_session_with_performances(session_id, user_id)
            .await?;
        ensure_completed(&previous)?;

        let next_date = self.next_date(&previous, reference_date);

        match previous.session_template_id {
            Some(template_id) => {
                let template = self.fetch_template(template_id).await?;
                self.adapt_template(&previous, &template, next_date).await
            }
            None => {
                self.adapt_legacy_session(&previous, next_date, reference_date)
                    .await
            }
        }
    }

    /// Create the next session without adapting anything, scheduled from today
    ///
    /// # Errors
    ///
    /// See [`Self::create_similar_session_on`]
    pub async fn create_similar_session(
        &self,
        session_id: SessionId,
        user_id: UserId,
    ) -> AppResult<TrainingSession> {
        self.create_similar_session_on(session_id, user_id, today())
            .await
    }

    /// Create the next session without adapting anything, scheduled after `reference_date`
    ///
    /// Template-backed sessions get a new empty instance of the same template;
    /// other sessions are cloned with their prescriptions unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for a missing session, profile or template,
    /// `PermissionDenied` when the caller does not own the session, or the
    /// repository error unchanged
    pub async fn create_similar_session_on(
        &self,
        session_id: SessionId,
        user_id: UserId,
        reference_date: NaiveDate,
    ) -> AppResult<TrainingSession> {
        let previous = self
            .get_session_with_performances(session_id, user_id)
            .await?;
        let next_date = self.next_date(&previous, reference_date);

        let new_session = if let Some(template_id) = previous.session_template_id {
            self.fetch_template(template_id).await?;
            NewSession {
                program_id: previous.program_id,
                session_name: previous.session_name.clone(),
                date: next_date,
                status: SessionStatus::Scheduled,
                session_template_id: Some(template_id),
                original_session_id: None,
                exercises: Vec::new(),
            }
        } else {
            let name = previous
                .session_name
                .as_deref()
                .unwrap_or(PREVIOUS_SESSION_FALLBACK);
            NewSession {
                program_id: previous.program_id,
                session_name: Some(format!("{SIMILAR_SESSION_PREFIX} {name}")),
                date: next_date,
                status: SessionStatus::Scheduled,
                session_template_id: None,
                original_session_id: Some(chain_root(&previous)),
                exercises: previous.exercises.iter().map(unchanged_plan).collect(),
            }
        };

        let created = self.repository.create_session(new_session).await?;
        info!(
            previous_session_id = previous.id,
            session_id = created.id,
            date = ?created.date,
            "Created similar session"
        );
        Ok(created)
    }

    /// Run the pipeline over every exercise of a session without persisting anything
    #[must_use]
    pub fn preview_adaptations(&self, session: &TrainingSession) -> Vec<ExerciseAdaptationReport> {
        session
            .exercises
            .par_iter()
            .map(|exercise| ExerciseAdaptationReport {
                exercise_id: exercise.exercise_id,
                template_exercise_id: None,
                previous: exercise.prescription,
                adaptation: self
                    .pipeline
                    .run(&exercise.prescription, &exercise.performances),
            })
            .collect()
    }

    async fn fetch_template(&self, template_id: TemplateId) -> AppResult<SessionTemplate> {
        self.repository
            .get_session_template(template_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Session template #{template_id}"))
                    .with_resource_id(template_id.to_string())
            })
    }

    fn next_date(&self, session: &TrainingSession, reference_date: NaiveDate) -> Option<NaiveDate> {
        let preferred = session
            .profile
            .as_ref()
            .map_or(&[][..], |profile| profile.training_days.as_slice());
        self.scheduler.next_session_date(reference_date, preferred)
    }

    async fn adapt_legacy_session(
        &self,
        previous: &TrainingSession,
        next_date: Option<NaiveDate>,
        reference_date: NaiveDate,
    ) -> AppResult<AdaptedSessionOutcome> {
        let adaptations = self.preview_adaptations(previous);

        let new_session = NewSession {
            program_id: previous.program_id,
            session_name: Some(format!("{ADAPTED_SESSION_PREFIX} - {reference_date}")),
            date: next_date,
            status: SessionStatus::Scheduled,
            session_template_id: None,
            original_session_id: Some(chain_root(previous)),
            exercises: adaptations
                .iter()
                .map(ExerciseAdaptationReport::planned)
                .collect(),
        };

        let session = self.repository.create_session(new_session).await?;
        info!(
            previous_session_id = previous.id,
            session_id = session.id,
            exercises = adaptations.len(),
            date = ?session.date,
            "Created adapted session"
        );

        Ok(AdaptedSessionOutcome {
            session,
            adaptations,
        })
    }

    async fn adapt_template(
        &self,
        previous: &TrainingSession,
        template: &SessionTemplate,
        next_date: Option<NaiveDate>,
    ) -> AppResult<AdaptedSessionOutcome> {
        let adaptations: Vec<ExerciseAdaptationReport> = template
            .exercises
            .par_iter()
            .filter_map(|template_exercise| {
                let performed = previous.exercises.iter().find(|performed| {
                    performed.exercise_id == template_exercise.exercise_id
                        && performed.has_performances()
                })?;

                let prescription = ExercisePrescription {
                    weight: mean_recorded_weight(&performed.performances)
                        .or(performed.prescription.weight),
                    is_bodyweight: template_exercise.prescription.is_bodyweight,
                    ..performed.prescription
                };

                Some(ExerciseAdaptationReport {
                    exercise_id: template_exercise.exercise_id,
                    template_exercise_id: Some(template_exercise.id),
                    previous: prescription,
                    adaptation: self.pipeline.run(&prescription, &performed.performances),
                })
            })
            .collect();

        let updates = adaptations
            .iter()
            .filter_map(|report| {
                report.template_exercise_id.map(|template_exercise_id| {
                    let adapted = &report.adaptation.adapted;
                    TemplateExerciseUpdate {
                        template_exercise_id,
                        exercise_id: report.exercise_id,
                        reps: adapted.reps,
                        weight: adapted.weight,
                        sets: adapted.sets,
                    }
                })
            })
            .collect();

        let new_session = NewSession {
            program_id: previous.program_id,
            session_name: Some(template.name.clone()),
            date: next_date,
            status: SessionStatus::Scheduled,
            session_template_id: Some(template.id),
            original_session_id: None,
            exercises: Vec::new(),
        };

        let session = self
            .repository
            .adapt_template_and_create_session(template.id, updates, new_session)
            .await?;
        info!(
            previous_session_id = previous.id,
            template_id = template.id,
            session_id = session.id,
            exercises = adaptations.len(),
            date = ?session.date,
            "Adapted session template and scheduled next instance"
        );

        Ok(AdaptedSessionOutcome {
            session,
            adaptations,
        })
    }
}

/// Every exercise must have at least one recorded set
fn ensure_completed(session: &TrainingSession) -> AppResult<()> {
    if session.exercises.iter().all(PerformedExercise::has_performances) {
        return Ok(());
    }

    warn!(
        session_id = session.id,
        "Rejected adaptation of a session without recorded performances"
    );
    Err(AppError::invalid_input(
        "Cannot adapt session: no performance recorded. Please complete the session first.",
    )
    .with_resource_id(session.id.to_string()))
}

/// First session of the chain `session` belongs to
fn chain_root(session: &TrainingSession) -> SessionId {
    session.original_session_id.unwrap_or(session.id)
}

fn unchanged_plan(exercise: &PerformedExercise) -> PlannedExercise {
    let prescription = exercise.prescription;
    PlannedExercise {
        exercise_id: exercise.exercise_id,
        reps: prescription.reps,
        weight: prescription.weight,
        sets: prescription.sets,
        is_bodyweight: prescription.is_bodyweight,
    }
}

/// Mean of the positive recorded loads, on the half-kilogram grid
fn mean_recorded_weight(performances: &[SetPerformance]) -> Option<f64> {
    let loads: Vec<f64> = performances
        .iter()
        .filter_map(|p| p.weight_used)
        .filter(|w| *w > 0.0)
        .collect();
    if loads.is_empty() {
        return None;
    }
    Some(round_to_half(loads.iter().sum::<f64>() / loads.len() as f64))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_recorded_weight_ignores_missing_and_zero_loads() {
        let sets = [
            SetPerformance::new(0, 8, Some(50.0), true),
            SetPerformance::new(1, 8, Some(52.5), true),
            SetPerformance::new(2, 8, Some(0.0), true),
            SetPerformance::new(3, 8, None, true),
        ];
        // 51.25 snaps to 51.5
        assert_eq!(mean_recorded_weight(&sets), Some(51.5));
        assert_eq!(mean_recorded_weight(&sets[2..]), None);
    }

    #[test]
    fn test_chain_root_prefers_original() {
        let mut session = TrainingSession {
            id: 7,
            program_id: 1,
            profile: None,
            session_name: None,
            session_template_id: None,
            original_session_id: None,
            date: None,
            status: SessionStatus::Completed,
            exercises: Vec::new(),
        };
        assert_eq!(chain_root(&session), 7);

        session.original_session_id = Some(3);
        assert_eq!(chain_root(&session), 3);
    }
}
