// ABOUTME: Training session, session template and fitness profile models
// ABOUTME: Shapes exchanged with the persistence collaborator when adapting a completed session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::strength::{ExercisePrescription, SetPerformance};

/// Identifier of a training session
pub type SessionId = i64;
/// Identifier of an exercise in the catalog
pub type ExerciseId = i64;
/// Identifier of a training program
pub type ProgramId = i64;
/// Identifier of a session template
pub type TemplateId = i64;
/// Identifier of one exercise row inside a session template
pub type TemplateExerciseId = i64;
/// Identifier of a user account
pub type UserId = i64;

/// Preferred training day of a fitness profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekDay {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
    /// User schedules manually; ignored by automatic scheduling
    Custom,
}

impl WeekDay {
    /// Calendar weekday, or `None` for [`WeekDay::Custom`]
    #[must_use]
    pub const fn to_chrono(self) -> Option<Weekday> {
        match self {
            Self::Monday => Some(Weekday::Mon),
            Self::Tuesday => Some(Weekday::Tue),
            Self::Wednesday => Some(Weekday::Wed),
            Self::Thursday => Some(Weekday::Thu),
            Self::Friday => Some(Weekday::Fri),
            Self::Saturday => Some(Weekday::Sat),
            Self::Sunday => Some(Weekday::Sun),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

impl FromStr for WeekDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            "custom" => Ok(Self::Custom),
            other => Err(format!("Unknown training day: {other}")),
        }
    }
}

/// Lifecycle state of a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// Planned, not started
    #[default]
    Scheduled,
    /// Started, performances being recorded
    InProgress,
    /// Finished
    Completed,
}

/// Fitness profile owning a training program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessProfile {
    /// Account that owns the profile
    pub user_id: UserId,
    /// Days the athlete prefers to train on
    #[serde(default)]
    pub training_days: Vec<WeekDay>,
}

/// An exercise of a session together with its recorded sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformedExercise {
    /// Catalog exercise
    pub exercise_id: ExerciseId,
    /// What was planned for this session
    pub prescription: ExercisePrescription,
    /// What was actually executed, one entry per set
    #[serde(default)]
    pub performances: Vec<SetPerformance>,
}

impl PerformedExercise {
    /// Whether at least one set has been recorded
    #[must_use]
    pub fn has_performances(&self) -> bool {
        !self.performances.is_empty()
    }
}

/// A training session as returned by the persistence collaborator
///
/// `profile` is resolved through the session's program; it is `None` when the
/// program no longer has a fitness profile attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Session identifier
    pub id: SessionId,
    /// Program the session belongs to
    pub program_id: ProgramId,
    /// Owning fitness profile, resolved through the program
    #[serde(default)]
    pub profile: Option<FitnessProfile>,
    /// Display name
    #[serde(default)]
    pub session_name: Option<String>,
    /// Template this session was instantiated from, if any
    #[serde(default)]
    pub session_template_id: Option<TemplateId>,
    /// First session of the chain this one descends from, if any
    #[serde(default)]
    pub original_session_id: Option<SessionId>,
    /// Planned date, `None` when scheduled manually
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Lifecycle state
    #[serde(default)]
    pub status: SessionStatus,
    /// Exercises in session order
    #[serde(default)]
    pub exercises: Vec<PerformedExercise>,
}

/// One exercise row of a session template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExercise {
    /// Row identifier
    pub id: TemplateExerciseId,
    /// Catalog exercise
    pub exercise_id: ExerciseId,
    /// Position in the session
    pub order_in_session: u32,
    /// Current prescription carried by the template
    pub prescription: ExercisePrescription,
}

/// Reusable session plan; each cycle instantiates a new session from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTemplate {
    /// Template identifier
    pub id: TemplateId,
    /// Program the template belongs to
    pub program_id: ProgramId,
    /// Display name given to instantiated sessions
    pub name: String,
    /// Exercises of the template
    pub exercises: Vec<TemplateExercise>,
}

/// Prescription row of a session to be created
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Catalog exercise
    pub exercise_id: ExerciseId,
    /// Target repetitions per set
    pub reps: u32,
    /// Target load, `None` for bodyweight
    pub weight: Option<f64>,
    /// Number of sets
    pub sets: u32,
    /// Whether the exercise uses no external load
    pub is_bodyweight: bool,
}

/// New prescription for an existing template exercise row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemplateExerciseUpdate {
    /// Row to update
    pub template_exercise_id: TemplateExerciseId,
    /// Catalog exercise of the row
    pub exercise_id: ExerciseId,
    /// New target repetitions
    pub reps: u32,
    /// New target load
    pub weight: Option<f64>,
    /// New number of sets
    pub sets: u32,
}

/// Session the orchestrator asks the persistence collaborator to create
///
/// The collaborator must write the session and all of its `exercises` as a
/// single atomic unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    /// Program of the new session
    pub program_id: ProgramId,
    /// Display name
    pub session_name: Option<String>,
    /// Planned date, `None` for manual scheduling
    pub date: Option<NaiveDate>,
    /// Initial lifecycle state
    pub status: SessionStatus,
    /// Template the session instantiates, if any
    pub session_template_id: Option<TemplateId>,
    /// Root of the session chain
    pub original_session_id: Option<SessionId>,
    /// Ordered prescriptions; empty for template-backed sessions
    pub exercises: Vec<PlannedExercise>,
}
