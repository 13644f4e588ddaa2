// ABOUTME: Command-line tool adapting a completed strength session read from a JSON file
// ABOUTME: Prints the next session (or a dry-run analysis) as JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pierre strength session adaptation CLI.
//!
//! Usage:
//! ```bash
//! # Adapt a completed session, scheduling on the profile's training days
//! cargo run --bin pierre-strength-cli -- adapt --input session.json
//!
//! # Override training days and the reference date
//! cargo run --bin pierre-strength-cli -- adapt --input session.json \
//!     --training-days mon,thu --date 2025-03-05
//!
//! # Next session without adaptation
//! cargo run --bin pierre-strength-cli -- adapt --input session.json --similar
//!
//! # Per-exercise analysis and strategy, nothing persisted
//! cargo run --bin pierre-strength-cli -- analyze --input session.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use pierre_core::models::WeekDay;
use pierre_strength::database_plugins::{InMemorySessionStore, SessionRepository};
use pierre_strength::logging::LoggingConfig;
use pierre_strength::services::session_adaptation::SessionAdaptationService;
use pierre_strength::session_file::load_session_document;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pierre-strength-cli",
    version,
    about = "Pierre strength session adaptation",
    long_about = "Adapt the next strength session from what was actually performed in the previous one"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the next session from a completed one
    Adapt {
        /// JSON document holding the completed session (and its template)
        #[arg(long)]
        input: PathBuf,

        /// Preferred training days, overriding the profile's (e.g. mon,thu)
        #[arg(long, value_delimiter = ',')]
        training_days: Vec<WeekDay>,

        /// Reference date for scheduling, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Clone the session without adapting it
        #[arg(long)]
        similar: bool,
    },
    /// Show the analysis and strategy of every exercise without creating anything
    Analyze {
        /// JSON document holding the completed session
        #[arg(long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Adapt {
            input,
            training_days,
            date,
            similar,
        } => adapt(&input, training_days, date, similar).await,
        Command::Analyze { input } => analyze(&input),
    }
}

async fn adapt(
    input: &Path,
    training_days: Vec<WeekDay>,
    date: Option<NaiveDate>,
    similar: bool,
) -> Result<()> {
    let mut document = load_session_document(input)?;
    let Some(profile) = document.session.profile.as_mut() else {
        bail!(
            "Session #{} has no fitness profile to schedule against",
            document.session.id
        );
    };
    if !training_days.is_empty() {
        profile.training_days = training_days;
    }
    let user_id = profile.user_id;
    let session_id = document.session.id;
    let reference_date = date.unwrap_or_else(|| Utc::now().date_naive());

    let store = InMemorySessionStore::new();
    if let Some(template) = document.template {
        store.insert_template(template).await;
    }
    store.insert_session(document.session).await;

    let service = SessionAdaptationService::new(store);
    info!(session_id, %reference_date, similar, "Creating next session");

    let output = if similar {
        let session = service
            .create_similar_session_on(session_id, user_id, reference_date)
            .await?;
        json!({ "session": session })
    } else {
        let outcome = service
            .create_adapted_session_from_previous_on(session_id, user_id, reference_date)
            .await?;
        let template = match outcome.session.session_template_id {
            Some(template_id) => {
                service
                    .repository()
                    .get_session_template(template_id)
                    .await?
            }
            None => None,
        };
        json!({
            "session": outcome.session,
            "adaptations": outcome.adaptations,
            "template": template,
        })
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn analyze(input: &Path) -> Result<()> {
    let document = load_session_document(input)?;
    let service = SessionAdaptationService::new(InMemorySessionStore::new());

    let reports = service.preview_adaptations(&document.session);
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
