// ABOUTME: Core data models for behavioral analysis: categories, sessions, and user context
// ABOUTME: Pattern and recommendation models live in their own submodules

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Core data models shared across the Momentum engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

mod pattern;
mod recommendation;

pub use pattern::{BehaviorPattern, Trend};
pub use recommendation::{Archetype, Difficulty, Priority, Recommendation};

/// A life-optimization dimension being tracked (e.g. `mind`, `body`, `sleep`).
///
/// Categories form an open, extensible identifier set: any normalized name is
/// valid, and the strategy catalog decides how a category is coached. Names
/// are trimmed and lowercased on construction so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from a raw name, normalizing case and whitespace
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_lowercase())
    }

    /// The normalized category name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One per-session observation supplied by the caller.
///
/// The engine treats the session log as chronological (most-recent-last) and
/// read-only; persistence of the log is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// When the session was recorded
    pub recorded_at: DateTime<Utc>,
    /// Per-category scores (0-100) observed in this session
    pub scores: HashMap<Category, f64>,
}

impl SessionRecord {
    /// Create a session record from per-category scores
    #[must_use]
    pub fn new(recorded_at: DateTime<Utc>, scores: HashMap<Category, f64>) -> Self {
        Self {
            recorded_at,
            scores,
        }
    }
}

/// How the user prefers to absorb guidance
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    /// Diagrams, charts, and visual progress cues
    #[default]
    Visual,
    /// Spoken guidance and audio content
    Auditory,
    /// Hands-on practice and physical routines
    Kinesthetic,
    /// Written explanations and long-form reading
    Reading,
}

/// What primarily drives the user to keep going
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MotivationType {
    /// Concrete goals, badges, and milestones
    #[default]
    Achievement,
    /// Visible incremental progress over time
    Progress,
    /// Accountability and shared activity with others
    Social,
    /// Internal standards independent of external feedback
    Intrinsic,
}

/// Behavioral context for one analysis call.
///
/// Supplied by the caller per invocation and immutable within a call. Missing
/// optional information degrades to the `Default` values; the engine never
/// fails on an incomplete context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    /// Lifetime number of completed sessions
    pub total_sessions: u32,
    /// Current consecutive-day streak
    pub current_streak: u32,
    /// Free-form preferred practice window (e.g. "morning")
    pub preferred_time: String,
    /// Fraction of started sessions the user completes (0-1)
    pub completion_rate: f64,
    /// Categories the user has marked as preferred
    pub category_preferences: HashSet<Category>,
    /// Historical success rate per category (0-1), from prior programs
    pub previous_success: HashMap<Category, f64>,
    /// Preferred guidance modality
    pub learning_style: LearningStyle,
    /// Primary motivation driver
    pub motivation_type: MotivationType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_normalizes_case_and_whitespace() {
        assert_eq!(Category::new("  Mind "), Category::new("mind"));
        assert_eq!(Category::new("SLEEP").as_str(), "sleep");
    }

    #[test]
    fn user_context_default_is_empty() {
        let ctx = UserContext::default();
        assert_eq!(ctx.total_sessions, 0);
        assert!(ctx.category_preferences.is_empty());
        assert!((ctx.completion_rate - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn learning_style_serializes_snake_case() {
        let json = serde_json::to_string(&LearningStyle::Kinesthetic).unwrap();
        assert_eq!(json, "\"kinesthetic\"");
    }
}
