// ABOUTME: Per-category behavioral pattern assembly from snapshot scores and history
// ABOUTME: Runs the trend classifier and stability metrics over window-bounded series

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Pattern extraction.
//!
//! For every category in the current score snapshot, the extractor bounds the
//! category's history to the configured window, runs the trend classifier and
//! stability metrics, and assembles a [`BehaviorPattern`]. Extraction is
//! deterministic for identical input: categories are processed in sorted
//! order and results preserve that order.

use crate::config::EngineConfig;
use crate::score_history;
use crate::trend_analysis::TrendAnalyzer;
use chrono::Utc;
use momentum_core::constants::scoring::MAX_SCORE;
use momentum_core::models::{BehaviorPattern, Category, SessionRecord};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::trace;

/// Assembles per-category behavioral patterns
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    analyzer: TrendAnalyzer,
    history_window: usize,
}

impl PatternExtractor {
    /// Create an extractor from engine configuration
    #[must_use]
    pub const fn new(config: &EngineConfig) -> Self {
        Self {
            analyzer: TrendAnalyzer::new(config.windows, config.thresholds),
            history_window: config.windows.history_window,
        }
    }

    /// Extract one pattern per category in the snapshot.
    ///
    /// An empty snapshot yields an empty pattern set; categories without
    /// history degrade to the neutral analyzer defaults. Never fails.
    #[must_use]
    pub fn extract(
        &self,
        scores: &HashMap<Category, f64>,
        history: &[SessionRecord],
    ) -> Vec<BehaviorPattern> {
        let now = Utc::now();

        let mut snapshot: Vec<(&Category, f64)> =
            scores.iter().map(|(category, score)| (category, *score)).collect();
        snapshot.sort_by(|a, b| a.0.cmp(b.0));

        snapshot
            .par_iter()
            .map(|&(category, raw_score)| {
                let series =
                    score_history::series_for(history, category, self.history_window);
                let score = if raw_score.is_finite() {
                    raw_score.clamp(0.0, MAX_SCORE)
                } else {
                    0.0
                };

                let pattern = BehaviorPattern {
                    category: category.clone(),
                    score,
                    trend: self.analyzer.classify(&series),
                    consistency: self.analyzer.consistency(&series),
                    velocity: self.analyzer.velocity(&series),
                    stability: self.analyzer.stability(&series),
                    last_updated: now,
                };
                trace!(
                    category = %pattern.category,
                    score = pattern.score,
                    trend = ?pattern.trend,
                    observations = series.len(),
                    "extracted pattern"
                );
                pattern
            })
            .collect()
    }
}
