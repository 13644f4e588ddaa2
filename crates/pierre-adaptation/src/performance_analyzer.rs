// ABOUTME: Per-exercise performance analysis turning recorded sets into a difficulty score
// ABOUTME: Computes completion rates, failure pattern and consistency, then classifies the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Performance analysis of one exercise's recorded sets.
//!
//! The analyzer is pure: identical inputs always produce the identical
//! [`PerformanceAnalysis`]. Degenerate inputs (no sets, no load target) are
//! handled by policy rather than reported as errors.

use pierre_core::constants::scoring::{MAX_DIFFICULTY_SCORE, MIN_DIFFICULTY_SCORE};
use pierre_core::models::SetPerformance;
use tracing::debug;

use crate::config::AdaptationConfig;
use crate::types::{FailurePattern, PerformanceAnalysis};

/// Analyzer computing the difficulty score of an exercise
#[derive(Debug, Clone)]
pub struct PerformanceAnalyzer {
    config: AdaptationConfig,
}

impl Default for PerformanceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceAnalyzer {
    /// Create an analyzer using the global adaptation configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AdaptationConfig::global().clone())
    }

    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: AdaptationConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AdaptationConfig {
        &self.config
    }

    /// Analyze the recorded sets of one exercise against its prescription
    #[must_use]
    pub fn analyze(
        &self,
        performances: &[SetPerformance],
        target_reps: u32,
        target_weight: Option<f64>,
        target_sets: u32,
    ) -> PerformanceAnalysis {
        let total_sets = performances.len();
        let successful_sets = performances.iter().filter(|p| p.success).count();

        let success_rate = if total_sets == 0 {
            0.0
        } else {
            successful_sets as f64 / total_sets as f64
        };

        let reps: Vec<f64> = performances
            .iter()
            .map(|p| f64::from(p.reps_completed))
            .collect();
        let avg_reps_completed = mean(&reps).unwrap_or(0.0);
        let reps_completion_rate = if target_reps == 0 {
            1.0
        } else {
            avg_reps_completed / f64::from(target_reps)
        };

        let loads: Vec<f64> = performances
            .iter()
            .filter_map(|p| p.weight_used)
            .filter(|w| *w > 0.0)
            .collect();
        let avg_weight_used = mean(&loads);
        let weight_completion_rate = match (avg_weight_used, target_weight) {
            (Some(avg), Some(target)) if target > 0.0 => avg / target,
            _ => 1.0,
        };

        let total_volume = performances
            .iter()
            .map(|p| f64::from(p.reps_completed) * p.weight_used.unwrap_or(0.0))
            .sum();

        let failure_pattern = self.detect_failure_pattern(performances);
        let consistency_score = consistency_score(&reps);

        let difficulty_score = self.difficulty_score(
            success_rate,
            reps_completion_rate,
            weight_completion_rate,
            failure_pattern,
            consistency_score,
        );
        let recommendation = self.config.thresholds.classify(difficulty_score);

        debug!(
            total_sets,
            successful_sets,
            difficulty_score,
            ?failure_pattern,
            %recommendation,
            "Analyzed exercise performance"
        );

        PerformanceAnalysis {
            success_rate,
            total_volume,
            avg_reps_completed,
            avg_weight_used,
            reps_completion_rate,
            weight_completion_rate,
            failure_pattern,
            consistency_score,
            difficulty_score,
            recommendation,
            total_sets,
            successful_sets,
            planned_sets: target_sets,
        }
    }

    /// Locate failed sets relative to the session midpoint
    ///
    /// Sets are ordered by `set_index` and the first half holds `ceil(n / 2)`
    /// sets, so a single failed set counts as an early failure.
    fn detect_failure_pattern(&self, performances: &[SetPerformance]) -> FailurePattern {
        let failed_count = performances.iter().filter(|p| !p.success).count();
        if failed_count == 0 {
            return FailurePattern::None;
        }

        let mut ordered: Vec<&SetPerformance> = performances.iter().collect();
        ordered.sort_by_key(|p| p.set_index);

        let mid_point = ordered.len().div_ceil(2);
        let (first_half, second_half) = ordered.split_at(mid_point);
        let first_half_failures = first_half.iter().filter(|p| !p.success).count();
        let second_half_failures = second_half.iter().filter(|p| !p.success).count();

        let dominance = self.config.weights.failure_dominance;
        let failed = failed_count as f64;
        if first_half_failures as f64 / failed > dominance {
            FailurePattern::Early
        } else if second_half_failures as f64 / failed > dominance {
            FailurePattern::Late
        } else {
            FailurePattern::Distributed
        }
    }

    fn difficulty_score(
        &self,
        success_rate: f64,
        reps_completion_rate: f64,
        weight_completion_rate: f64,
        failure_pattern: FailurePattern,
        consistency_score: f64,
    ) -> f64 {
        let weights = &self.config.weights;
        let pattern_score = self.config.pattern_scores.score(failure_pattern);
        let score = success_rate.mul_add(
            weights.success_rate,
            reps_completion_rate.min(weights.completion_cap).mul_add(
                weights.reps_completion,
                weight_completion_rate.min(weights.completion_cap).mul_add(
                    weights.weight_completion,
                    consistency_score.mul_add(weights.consistency, pattern_score),
                ),
            ),
        );

        score.clamp(MIN_DIFFICULTY_SCORE, MAX_DIFFICULTY_SCORE)
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// `1 - CV` of completed reps, floored at 0; 1.0 below two sets
fn consistency_score(reps: &[f64]) -> f64 {
    if reps.len() < 2 {
        return 1.0;
    }
    let Some(avg) = mean(reps) else {
        return 1.0;
    };
    if avg.abs() < f64::EPSILON {
        return 1.0;
    }

    let variance = reps.iter().map(|r| (r - avg).powi(2)).sum::<f64>() / reps.len() as f64;
    let coefficient_of_variation = variance.sqrt() / avg;

    (1.0 - coefficient_of_variation).max(0.0)
}
