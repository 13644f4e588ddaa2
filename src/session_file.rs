// ABOUTME: Loads completed training sessions (and their template) from JSON documents
// ABOUTME: Input format of the command-line tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use pierre_core::errors::{AppError, AppResult};
use pierre_core::models::{SessionTemplate, TrainingSession};
use serde::{Deserialize, Serialize};

/// A completed session, plus the template it was instantiated from if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDocument {
    /// Session with its exercises, recorded sets and owning profile
    pub session: TrainingSession,
    /// Template referenced by `session.session_template_id`
    #[serde(default)]
    pub template: Option<SessionTemplate>,
}

impl SessionDocument {
    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the text is not a valid document, or
    /// `InvalidInput` if the bundled template is not the one the session references
    pub fn from_json(text: &str) -> AppResult<Self> {
        let document: Self = serde_json::from_str(text)?;

        if let Some(template) = &document.template {
            if document.session.session_template_id != Some(template.id) {
                return Err(AppError::invalid_input(format!(
                    "Template #{} is not referenced by session #{}",
                    template.id, document.session.id
                )));
            }
        }

        Ok(document)
    }
}

/// Read a session document from disk
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read, otherwise see
/// [`SessionDocument::from_json`]
pub fn load_session_document(path: &Path) -> AppResult<SessionDocument> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    SessionDocument::from_json(&text)
}
