// ABOUTME: Composes analyzer, strategy engine and adapter into the per-exercise pipeline
// ABOUTME: Pure and synchronous so a session's exercises can be adapted independently in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::{ExercisePrescription, SetPerformance};
use serde::Serialize;
use tracing::debug;

use crate::adaptation_strategy::AdaptationStrategyEngine;
use crate::config::AdaptationConfig;
use crate::exercise_adapter::ExerciseAdapter;
use crate::performance_analyzer::PerformanceAnalyzer;
use crate::types::{AdaptedExercise, PerformanceAnalysis};

/// Analysis and adapted prescription of one exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseAdaptation {
    /// What the recorded sets say about the previous session
    pub analysis: PerformanceAnalysis,
    /// Prescription for the next session
    pub adapted: AdaptedExercise,
}

/// Analyzer → strategy → adapter
#[derive(Debug, Clone, Default)]
pub struct AdaptationPipeline {
    analyzer: PerformanceAnalyzer,
    strategy_engine: AdaptationStrategyEngine,
    adapter: ExerciseAdapter,
}

impl AdaptationPipeline {
    /// Create a pipeline using the global adaptation configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AdaptationConfig::global().clone())
    }

    /// Create a pipeline with an explicit scoring configuration
    #[must_use]
    pub const fn with_config(config: AdaptationConfig) -> Self {
        Self {
            analyzer: PerformanceAnalyzer::with_config(config),
            strategy_engine: AdaptationStrategyEngine::new(),
            adapter: ExerciseAdapter::new(),
        }
    }

    /// Adapt one exercise from its prescription and recorded sets
    #[must_use]
    pub fn run(
        &self,
        prescription: &ExercisePrescription,
        performances: &[SetPerformance],
    ) -> ExerciseAdaptation {
        let analysis = self.analyzer.analyze(
            performances,
            prescription.reps,
            prescription.weight,
            prescription.sets,
        );
        let strategy = self.strategy_engine.determine(
            analysis.recommendation,
            prescription.is_bodyweight,
            prescription.weight,
        );
        let adapted = self.adapter.adapt(
            prescription.reps,
            prescription.weight,
            prescription.sets,
            &strategy,
            prescription.is_bodyweight,
        );

        debug!(
            status = %analysis.recommendation,
            adaptation = ?strategy.adaptation_type,
            reps = adapted.reps,
            weight = ?adapted.weight,
            sets = adapted.sets,
            "Adapted exercise prescription"
        );

        ExerciseAdaptation { analysis, adapted }
    }
}
