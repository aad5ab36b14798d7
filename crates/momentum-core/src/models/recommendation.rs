// ABOUTME: Recommendation model with archetype, priority, and success-probability fields
// ABOUTME: Archetype carries the per-shape probability adjustments and default difficulty

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

use super::Category;
use serde::{Deserialize, Serialize};

/// The recommendation "shape" driving templated plans and priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Rebuild a slipping category
    Recovery,
    /// Push an already-improving category further
    Optimization,
    /// Maintain (and teach from) a mastered category
    Maintenance,
    /// Build a steadier routine in an erratic category
    ConsistencyBuilding,
    /// Capitalize on across-the-board high performance
    Breakthrough,
}

impl Archetype {
    /// Stable identifier used in deterministic recommendation ids
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Recovery => "recovery",
            Self::Optimization => "optimization",
            Self::Maintenance => "maintenance",
            Self::ConsistencyBuilding => "consistency_building",
            Self::Breakthrough => "breakthrough",
        }
    }

    /// Additive success-probability adjustment for this archetype
    #[must_use]
    pub const fn probability_adjustment(self) -> f64 {
        match self {
            Self::Recovery => 0.05,
            Self::Optimization => -0.05,
            Self::Maintenance => 0.0,
            Self::ConsistencyBuilding => 0.10,
            Self::Breakthrough => -0.15,
        }
    }

    /// Default execution difficulty for recommendations of this shape
    #[must_use]
    pub const fn default_difficulty(self) -> Difficulty {
        match self {
            Self::Recovery | Self::ConsistencyBuilding => Difficulty::Moderate,
            Self::Maintenance => Difficulty::Easy,
            Self::Optimization | Self::Breakthrough => Difficulty::Challenging,
        }
    }
}

/// Recommendation urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Nice to have
    Low,
    /// Worth scheduling
    Medium,
    /// Should be acted on soon
    High,
    /// Needs immediate attention
    Critical,
}

impl Priority {
    /// Numeric rank for ordering (higher = more urgent)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

/// How demanding a recommendation is to execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Low-effort habit adjustments
    Easy,
    /// Requires sustained attention for a few weeks
    Moderate,
    /// Demands real behavioral change
    Challenging,
}

/// An actionable recommendation produced by the rule engine.
///
/// Ids are deterministic (`{archetype}-{category}`) so identical inputs yield
/// identical output sets; any cosmetic variation belongs in the presentation
/// layer, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Deterministic identifier, unique within one analysis call
    pub id: String,
    /// Short headline
    pub title: String,
    /// One-paragraph explanation of the situation and the plan
    pub description: String,
    /// Target category (`overall` for cross-category recommendations)
    pub category: Category,
    /// Urgency of acting on this recommendation
    pub priority: Priority,
    /// Rule confidence (0-1); values at or below the engine floor are never returned
    pub confidence: f64,
    /// Ordered, concrete steps to execute
    pub action_plan: Vec<String>,
    /// Estimated score-point impact of completing the plan
    pub estimated_impact: f64,
    /// Expected time horizon for visible results
    pub time_to_result: String,
    /// Execution difficulty
    pub difficulty: Difficulty,
    /// The recommendation shape that produced this entry
    pub archetype: Archetype,
    /// Why this recommendation applies to this user right now
    pub personalized_reason: String,
    /// The behavioral-science grounding for the plan
    pub scientific_basis: String,
    /// Heuristic estimate that the user completes and benefits (0.40-0.98)
    pub success_probability: f64,
}

impl Recommendation {
    /// Ranking score used to order the returned list
    #[must_use]
    pub fn ranking_score(&self) -> f64 {
        self.confidence * self.success_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ranks_are_ordered() {
        assert!(Priority::Critical.rank() > Priority::High.rank());
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn archetype_slugs_are_stable() {
        assert_eq!(Archetype::Recovery.slug(), "recovery");
        assert_eq!(Archetype::ConsistencyBuilding.slug(), "consistency_building");
    }

    #[test]
    fn archetype_serializes_snake_case() {
        let json = serde_json::to_string(&Archetype::ConsistencyBuilding).unwrap();
        assert_eq!(json, "\"consistency_building\"");
    }
}
