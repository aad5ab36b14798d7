// ABOUTME: Archetype rule engine mapping behavioral patterns to ranked recommendations
// ABOUTME: Five rules (recovery, optimization, mastery, consistency, breakthrough) with templates

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Recommendation generation.
//!
//! Rules are applied in priority order and a single category may match more
//! than one rule (a slipping, erratic category legitimately needs both a
//! recovery and a consistency plan). After generation the list is filtered by
//! the confidence floor, ranked by `confidence x success_probability`, and
//! truncated to the configured maximum. Ties rank by id so output order is
//! fully deterministic.

use crate::config::RecommendationLimits;
use crate::probability;
use crate::strategies::StrategyCatalog;
use momentum_core::constants::probability::PRIOR_SUCCESS_THRESHOLD;
use momentum_core::constants::{recommendation as limits, scoring};
use momentum_core::models::{
    Archetype, BehaviorPattern, Category, Priority, Recommendation, Trend, UserContext,
};
use std::cmp::Ordering;
use tracing::debug;

/// Rule engine turning behavioral patterns into ranked recommendations
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    limits: RecommendationLimits,
    catalog: StrategyCatalog,
}

impl RecommendationEngine {
    /// Create a rule engine with the given limits and strategy catalog
    #[must_use]
    pub const fn new(limits: RecommendationLimits, catalog: StrategyCatalog) -> Self {
        Self { limits, catalog }
    }

    /// Generate the ranked recommendation list for one analysis call.
    ///
    /// An empty pattern set yields an empty list; this is a valid, non-error
    /// outcome.
    #[must_use]
    pub fn generate(
        &self,
        patterns: &[BehaviorPattern],
        context: &UserContext,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        for pattern in patterns {
            recommendations.extend(self.recovery_for(pattern, context));
            recommendations.extend(self.optimization_for(pattern, context));
            recommendations.extend(self.mastery_for(pattern, context));
            recommendations.extend(self.consistency_for(pattern, context));
        }
        recommendations.extend(self.breakthrough_for(patterns, context));

        let generated = recommendations.len();
        recommendations.retain(|rec| rec.confidence > self.limits.min_confidence);

        recommendations.sort_by(|a, b| {
            b.ranking_score()
                .partial_cmp(&a.ranking_score())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        recommendations.truncate(self.limits.max_recommendations);

        debug!(
            generated,
            returned = recommendations.len(),
            "recommendation generation complete"
        );
        recommendations
    }

    /// Rule 1: rebuild a declining or low-scoring category
    fn recovery_for(
        &self,
        pattern: &BehaviorPattern,
        context: &UserContext,
    ) -> Option<Recommendation> {
        if pattern.trend != Trend::Declining && pattern.score >= scoring::RECOVERY_SCORE_THRESHOLD {
            return None;
        }

        let strategy = self.catalog.resolve(&pattern.category);
        let priority = if pattern.score < scoring::CRITICAL_SCORE_THRESHOLD {
            Priority::Critical
        } else {
            Priority::High
        };

        let mut reason = format!(
            "Your {} score sits at {:.0} and {}",
            pattern.category,
            pattern.score,
            trend_phrase(pattern.trend),
        );
        if previously_succeeded(context, &pattern.category) {
            reason.push_str(" - you have turned this category around before");
        }

        Some(Self::build(
            Archetype::Recovery,
            &pattern.category,
            format!("Rebuild your {} routine", strategy.focus_label),
            format!(
                "A short structured reset restores {} before the slide compounds. \
                 Start small, lock in completions, then scale back up.",
                strategy.focus_label
            ),
            priority,
            limits::RECOVERY_CONFIDENCE,
            strategy.plan_for(Archetype::Recovery).to_vec(),
            limits::RECOVERY_IMPACT_CAP.min(90.0 - pattern.score),
            "1-2 weeks",
            reason,
            "Behavioral activation: small guaranteed wins restore engagement faster \
             than ambitious restarts",
            context,
        ))
    }

    /// Rule 2: push an improving, already-strong category further
    fn optimization_for(
        &self,
        pattern: &BehaviorPattern,
        context: &UserContext,
    ) -> Option<Recommendation> {
        if pattern.trend != Trend::Improving
            || pattern.score <= scoring::OPTIMIZATION_SCORE_THRESHOLD
        {
            return None;
        }

        let strategy = self.catalog.resolve(&pattern.category);
        let reason = format!(
            "Your {} score of {:.0} is climbing - the right moment to raise the ceiling",
            pattern.category, pattern.score,
        );

        Some(Self::build(
            Archetype::Optimization,
            &pattern.category,
            format!("Optimize your {} gains", strategy.focus_label),
            format!(
                "Momentum in {} is real. Adding deliberate structure now converts \
                 a good streak into a lasting capability.",
                strategy.focus_label
            ),
            Priority::Medium,
            limits::OPTIMIZATION_CONFIDENCE,
            strategy.plan_for(Archetype::Optimization).to_vec(),
            limits::OPTIMIZATION_IMPACT_CAP.min(95.0 - pattern.score),
            "2-4 weeks",
            reason,
            "Progressive overload: incremental demands on an improving system drive \
             continued adaptation",
            context,
        ))
    }

    /// Rule 3: maintain and teach a mastered category
    fn mastery_for(
        &self,
        pattern: &BehaviorPattern,
        context: &UserContext,
    ) -> Option<Recommendation> {
        if pattern.score < scoring::MASTERY_SCORE_THRESHOLD
            || pattern.consistency <= scoring::MASTERY_CONSISTENCY_THRESHOLD
        {
            return None;
        }

        let strategy = self.catalog.resolve(&pattern.category);
        let reason = format!(
            "You hold {} at {:.0} with high consistency - this category is mastered",
            pattern.category, pattern.score,
        );

        Some(Self::build(
            Archetype::Maintenance,
            &pattern.category,
            format!("Maintain your {} mastery", strategy.focus_label),
            format!(
                "{} is a solved problem for you. Protect the baseline with minimal \
                 effort and consolidate it by teaching others.",
                capitalize(&strategy.focus_label)
            ),
            Priority::Low,
            limits::MASTERY_CONFIDENCE,
            strategy.plan_for(Archetype::Maintenance).to_vec(),
            limits::MASTERY_IMPACT,
            "ongoing",
            reason,
            "The protege effect: teaching consolidates expertise and guards against \
             skill decay",
            context,
        ))
    }

    /// Rule 4: build a steadier routine in an erratic category
    fn consistency_for(
        &self,
        pattern: &BehaviorPattern,
        context: &UserContext,
    ) -> Option<Recommendation> {
        if pattern.consistency >= scoring::LOW_CONSISTENCY_THRESHOLD {
            return None;
        }

        let strategy = self.catalog.resolve(&pattern.category);
        let reason = format!(
            "Your {} scores swing widely between sessions - routine, not effort, is \
             the missing piece",
            pattern.category,
        );

        Some(Self::build(
            Archetype::ConsistencyBuilding,
            &pattern.category,
            format!("Stabilize your {} routine", strategy.focus_label),
            format!(
                "Results in {} track how regularly you show up more than how hard \
                 any single session goes. Reduce friction and fix the schedule.",
                strategy.focus_label
            ),
            Priority::High,
            limits::CONSISTENCY_CONFIDENCE,
            strategy.plan_for(Archetype::ConsistencyBuilding).to_vec(),
            limits::CONSISTENCY_IMPACT,
            "3-4 weeks",
            reason,
            "Habit formation research: fixed cues and reduced friction outweigh \
             motivation for routine building",
            context,
        ))
    }

    /// Rule 5 (cross-category, evaluated once): capitalize on across-the-board
    /// high performance
    fn breakthrough_for(
        &self,
        patterns: &[BehaviorPattern],
        context: &UserContext,
    ) -> Option<Recommendation> {
        if patterns.is_empty() {
            return None;
        }

        let mean = patterns.iter().map(|p| p.score).sum::<f64>() / patterns.len() as f64;
        if mean <= scoring::BREAKTHROUGH_MEAN_THRESHOLD {
            return None;
        }

        let category = Category::new("overall");
        let reason = format!(
            "You are averaging {:.0} across {} categories - a strong base for an \
             ambitious push",
            mean,
            patterns.len(),
        );

        let peak_window = if context.preferred_time.is_empty() {
            "Schedule the hardest block in your peak-energy window".into()
        } else {
            format!(
                "Schedule the hardest block during your {} peak window",
                context.preferred_time
            )
        };

        Some(Self::build(
            Archetype::Breakthrough,
            &category,
            "Attempt a breakthrough challenge".into(),
            "Every tracked category is performing. Windows like this are rare: \
             set one ambitious cross-domain goal while the foundation holds."
                .into(),
            Priority::Critical,
            limits::BREAKTHROUGH_CONFIDENCE,
            vec![
                "Choose one ambitious goal that spans several life areas".into(),
                "Design a four-week plan with weekly checkpoints".into(),
                peak_window,
                "Tell one person who will hold you to it".into(),
                "Review and raise targets at each weekly checkpoint".into(),
            ],
            limits::BREAKTHROUGH_IMPACT,
            "1-3 months",
            reason,
            "Momentum effects: broad gains across domains create a window for \
             compounding behavior change",
            context,
        ))
    }

    /// Assemble a recommendation with its deterministic id and success
    /// probability
    #[allow(clippy::too_many_arguments)] // Rule sites read better flat than through a params struct
    fn build(
        archetype: Archetype,
        category: &Category,
        title: String,
        description: String,
        priority: Priority,
        confidence: f64,
        action_plan: Vec<String>,
        estimated_impact: f64,
        time_to_result: &str,
        personalized_reason: String,
        scientific_basis: &str,
        context: &UserContext,
    ) -> Recommendation {
        Recommendation {
            id: format!("{}-{category}", archetype.slug()),
            title,
            description,
            category: category.clone(),
            priority,
            confidence,
            action_plan,
            estimated_impact,
            time_to_result: time_to_result.into(),
            difficulty: archetype.default_difficulty(),
            archetype,
            personalized_reason,
            scientific_basis: scientific_basis.into(),
            success_probability: probability::estimate(context, archetype, category),
        }
    }
}

/// Human phrasing for a trend, used in personalized reasons
fn trend_phrase(trend: Trend) -> &'static str {
    match trend {
        Trend::Improving => "is climbing",
        Trend::Stable => "is holding steady",
        Trend::Declining => "has been declining across recent sessions",
    }
}

/// Whether the user has previously succeeded in this category
fn previously_succeeded(context: &UserContext, category: &Category) -> bool {
    context
        .previous_success
        .get(category)
        .is_some_and(|rate| *rate >= PRIOR_SUCCESS_THRESHOLD)
}

/// Uppercase the first character of a label
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
