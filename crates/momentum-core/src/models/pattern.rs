// ABOUTME: Behavioral pattern model combining trend classification with stability metrics
// ABOUTME: One pattern is assembled per tracked category on every analysis call

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

use super::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse directional classification of a category's recent score trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Scores are trending upward
    Improving,
    /// Scores are holding steady (or there is too little data to tell)
    Stable,
    /// Scores are trending downward
    Declining,
}

/// Analyzed behavioral pattern for one category.
///
/// Created fresh on every analysis call from the current score snapshot and
/// the category's recent history; never persisted by the engine itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorPattern {
    /// The category this pattern describes
    pub category: Category,
    /// Current snapshot score (0-100)
    pub score: f64,
    /// Directional trend over the recent score series
    pub trend: Trend,
    /// Inverse-variance steadiness of the series (0-1, 1 = perfectly steady)
    pub consistency: f64,
    /// Short-window average rate of change (score points per session, +/-10)
    pub velocity: f64,
    /// Inverse-fluctuation measure over a longer window (0-1)
    pub stability: f64,
    /// When this pattern was assembled
    pub last_updated: DateTime<Utc>,
}
