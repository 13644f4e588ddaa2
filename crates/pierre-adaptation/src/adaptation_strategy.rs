// ABOUTME: Maps a performance classification to a directional adaptation strategy
// ABOUTME: Decision table over status and exercise category, total over every status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::types::{
    AdaptationMagnitude, AdaptationPriority, AdaptationStrategy, AdaptationType, PerformanceStatus,
};

/// Stateless decision table turning a [`PerformanceStatus`] into an [`AdaptationStrategy`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptationStrategyEngine;

impl AdaptationStrategyEngine {
    /// Create a strategy engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Choose the strategy for the next session of one exercise
    ///
    /// `current_weight` only matters for a weighted exercise that was far too
    /// easy: without a positive load the strategy falls back to volume.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn determine(
        &self,
        status: PerformanceStatus,
        is_bodyweight: bool,
        current_weight: Option<f64>,
    ) -> AdaptationStrategy {
        match status {
            PerformanceStatus::CrushingIt => Self::crushing_it(is_bodyweight, current_weight),
            PerformanceStatus::Strong => strategy(
                AdaptationType::Intensity,
                if is_bodyweight {
                    AdaptationPriority::Reps
                } else {
                    AdaptationPriority::Weight
                },
                AdaptationMagnitude::Micro,
                "Solid performance: micro-progression to consolidate",
                0.85,
            ),
            PerformanceStatus::Perfect => strategy(
                AdaptationType::Maintain,
                AdaptationPriority::Mixed,
                AdaptationMagnitude::Micro,
                "Ideal progression zone: hold the prescription to consolidate",
                1.0,
            ),
            PerformanceStatus::Challenging => strategy(
                AdaptationType::Maintain,
                AdaptationPriority::Mixed,
                AdaptationMagnitude::Micro,
                "Hard but manageable: hold and reassess over the next sessions",
                0.7,
            ),
            PerformanceStatus::Struggling => strategy(
                AdaptationType::Deload,
                if is_bodyweight {
                    AdaptationPriority::Reps
                } else {
                    AdaptationPriority::Weight
                },
                AdaptationMagnitude::Normal,
                "Too hard: reduce to restore technique",
                0.8,
            ),
            PerformanceStatus::Overreaching => strategy(
                AdaptationType::Deload,
                AdaptationPriority::Mixed,
                AdaptationMagnitude::Macro,
                "Signs of overreaching: substantial deload required",
                0.95,
            ),
        }
    }

    fn crushing_it(is_bodyweight: bool, current_weight: Option<f64>) -> AdaptationStrategy {
        if is_bodyweight {
            return strategy(
                AdaptationType::Volume,
                AdaptationPriority::Mixed,
                AdaptationMagnitude::Normal,
                "Excellent performance: increase volume",
                0.9,
            );
        }

        if current_weight.is_some_and(|w| w > 0.0) {
            strategy(
                AdaptationType::Intensity,
                AdaptationPriority::Weight,
                AdaptationMagnitude::Normal,
                "Excellent performance: increase the load",
                0.9,
            )
        } else {
            strategy(
                AdaptationType::Volume,
                AdaptationPriority::Reps,
                AdaptationMagnitude::Normal,
                "Excellent performance: no load to raise, increase volume",
                0.9,
            )
        }
    }
}

fn strategy(
    adaptation_type: AdaptationType,
    priority: AdaptationPriority,
    magnitude: AdaptationMagnitude,
    reasoning: &str,
    confidence: f64,
) -> AdaptationStrategy {
    AdaptationStrategy {
        adaptation_type,
        priority,
        magnitude,
        reasoning: reasoning.to_owned(),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGINE: AdaptationStrategyEngine = AdaptationStrategyEngine::new();

    fn shape(s: &AdaptationStrategy) -> (AdaptationType, AdaptationPriority, AdaptationMagnitude) {
        (s.adaptation_type, s.priority, s.magnitude)
    }

    #[test]
    fn test_crushing_it_depends_on_load() {
        let loaded = ENGINE.determine(PerformanceStatus::CrushingIt, false, Some(50.0));
        assert_eq!(
            shape(&loaded),
            (
                AdaptationType::Intensity,
                AdaptationPriority::Weight,
                AdaptationMagnitude::Normal
            )
        );

        for weight in [None, Some(0.0)] {
            let unloaded = ENGINE.determine(PerformanceStatus::CrushingIt, false, weight);
            assert_eq!(
                shape(&unloaded),
                (
                    AdaptationType::Volume,
                    AdaptationPriority::Reps,
                    AdaptationMagnitude::Normal
                )
            );
        }

        let bodyweight = ENGINE.determine(PerformanceStatus::CrushingIt, true, None);
        assert_eq!(
            shape(&bodyweight),
            (
                AdaptationType::Volume,
                AdaptationPriority::Mixed,
                AdaptationMagnitude::Normal
            )
        );
        assert!((bodyweight.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_priority_follows_category() {
        for status in [PerformanceStatus::Strong, PerformanceStatus::Struggling] {
            assert_eq!(
                ENGINE.determine(status, true, None).priority,
                AdaptationPriority::Reps
            );
            assert_eq!(
                ENGINE.determine(status, false, Some(40.0)).priority,
                AdaptationPriority::Weight
            );
        }
    }

    #[test]
    fn test_decision_table() {
        let expected = [
            (PerformanceStatus::Strong, AdaptationType::Intensity, AdaptationMagnitude::Micro, 0.85),
            (PerformanceStatus::Perfect, AdaptationType::Maintain, AdaptationMagnitude::Micro, 1.0),
            (PerformanceStatus::Challenging, AdaptationType::Maintain, AdaptationMagnitude::Micro, 0.7),
            (PerformanceStatus::Struggling, AdaptationType::Deload, AdaptationMagnitude::Normal, 0.8),
            (PerformanceStatus::Overreaching, AdaptationType::Deload, AdaptationMagnitude::Macro, 0.95),
        ];

        for (status, adaptation_type, magnitude, confidence) in expected {
            for is_bodyweight in [true, false] {
                let s = ENGINE.determine(status, is_bodyweight, Some(60.0));
                assert_eq!(s.adaptation_type, adaptation_type, "{status}");
                assert_eq!(s.magnitude, magnitude, "{status}");
                assert!((s.confidence - confidence).abs() < f64::EPSILON, "{status}");
                assert!(!s.reasoning.is_empty());
            }
        }
    }

    #[test]
    fn test_every_status_has_confidence_in_unit_range() {
        for status in PerformanceStatus::ALL {
            for is_bodyweight in [true, false] {
                let s = ENGINE.determine(status, is_bodyweight, Some(20.0));
                assert!((0.0..=1.0).contains(&s.confidence));
            }
        }
    }
}
