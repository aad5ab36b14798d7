// ABOUTME: Heuristic success-probability estimation blending user context and archetype
// ABOUTME: Baseline plus independent additive adjustments, clamped to a bounded range

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Success-probability estimation.
//!
//! This is a heuristic estimate of how likely the user is to complete and
//! benefit from a recommendation, not a calibrated probability. Adjustments
//! apply independently and are summed before clamping, so no combination of
//! inputs can leave the [0.40, 0.98] band.

use momentum_core::constants::probability::{
    BASELINE, COMPLETION_BONUS, EXPERIENCED_SESSIONS, EXPERIENCE_BONUS, HIGH_COMPLETION_RATE,
    MAX_PROBABILITY, MIN_PROBABILITY, PREFERENCE_BONUS, STREAK_BONUS, STREAK_THRESHOLD,
};
use momentum_core::models::{Archetype, Category, UserContext};

/// Estimate the probability that the user completes and benefits from a
/// recommendation of the given archetype for the given category.
#[must_use]
pub fn estimate(context: &UserContext, archetype: Archetype, category: &Category) -> f64 {
    let mut probability = BASELINE;

    if context.completion_rate > HIGH_COMPLETION_RATE {
        probability += COMPLETION_BONUS;
    }
    if context.current_streak > STREAK_THRESHOLD {
        probability += STREAK_BONUS;
    }
    if context.total_sessions > EXPERIENCED_SESSIONS {
        probability += EXPERIENCE_BONUS;
    }
    if context.category_preferences.contains(category) {
        probability += PREFERENCE_BONUS;
    }

    probability += archetype.probability_adjustment();

    probability.clamp(MIN_PROBABILITY, MAX_PROBABILITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_context_yields_baseline_plus_archetype() {
        let ctx = UserContext::default();
        let category = Category::new("mind");
        let p = estimate(&ctx, Archetype::Maintenance, &category);
        assert!((p - 0.70).abs() < f64::EPSILON);

        let p = estimate(&ctx, Archetype::Breakthrough, &category);
        assert!((p - 0.55).abs() < f64::EPSILON);
    }

    #[test]
    fn all_bonuses_clamp_at_upper_bound() {
        let category = Category::new("mind");
        let ctx = UserContext {
            total_sessions: 100,
            current_streak: 30,
            completion_rate: 0.95,
            category_preferences: HashSet::from([category.clone()]),
            ..UserContext::default()
        };
        // 0.70 + 0.15 + 0.10 + 0.05 + 0.10 + 0.10 = 1.20 -> clamp
        let p = estimate(&ctx, Archetype::ConsistencyBuilding, &category);
        assert!((p - 0.98).abs() < f64::EPSILON);
    }

    #[test]
    fn stays_in_bounds_for_every_archetype() {
        let category = Category::new("body");
        let contexts = [
            UserContext::default(),
            UserContext {
                total_sessions: 500,
                current_streak: 100,
                completion_rate: 1.0,
                ..UserContext::default()
            },
        ];
        let archetypes = [
            Archetype::Recovery,
            Archetype::Optimization,
            Archetype::Maintenance,
            Archetype::ConsistencyBuilding,
            Archetype::Breakthrough,
        ];
        for ctx in &contexts {
            for archetype in archetypes {
                let p = estimate(ctx, archetype, &category);
                assert!((0.40..=0.98).contains(&p), "{archetype:?} -> {p}");
            }
        }
    }
}
