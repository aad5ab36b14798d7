// ABOUTME: Top-level engine orchestration: extract patterns, generate recommendations, record runs
// ABOUTME: Caller-owned struct with the learning history as an owned, internally-guarded field

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Engine orchestration.
//!
//! [`IntelligenceEngine`] is constructed by the caller and passed by
//! reference; there is no global state. `analyze` is the primary entry
//! point: pattern extraction, recommendation generation, and the learning
//! history side effect in one synchronous call. `insights` is the secondary,
//! state-free entry point.

use crate::config::EngineConfig;
use crate::insights;
use crate::learning_history::{LearningHistory, LearningRecord, LearningStats};
use crate::pattern_extraction::PatternExtractor;
use crate::recommendation_engine::RecommendationEngine;
use crate::strategies::StrategyCatalog;
use momentum_core::errors::ConfigError;
use momentum_core::models::{Category, Recommendation, SessionRecord, UserContext};
use std::collections::HashMap;
use tracing::debug;

/// Behavioral-pattern analysis and recommendation engine
#[derive(Debug)]
pub struct IntelligenceEngine {
    config: EngineConfig,
    extractor: PatternExtractor,
    recommender: RecommendationEngine,
    learning: LearningHistory,
}

impl Default for IntelligenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IntelligenceEngine {
    /// Create an engine with the default configuration and strategy catalog
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_catalog(config, StrategyCatalog::with_defaults())
    }

    /// Create an engine with a custom configuration and strategy catalog
    #[must_use]
    pub fn with_catalog(config: EngineConfig, catalog: StrategyCatalog) -> Self {
        Self {
            extractor: PatternExtractor::new(&config),
            recommender: RecommendationEngine::new(config.limits, catalog),
            learning: LearningHistory::new(config.history),
            config,
        }
    }

    /// Create an engine from environment-variable configuration overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override is unparseable or the resulting
    /// configuration fails validation.
    pub fn from_environment() -> Result<Self, ConfigError> {
        Ok(Self::with_config(EngineConfig::from_environment()?))
    }

    /// The configuration this engine was built with
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze the current snapshot against the session log and return the
    /// ranked recommendation list.
    ///
    /// Pure computation plus one side effect: the run is appended to the
    /// learning history. Never fails; empty or malformed input degrades to an
    /// empty result.
    pub fn analyze(
        &self,
        scores: &HashMap<Category, f64>,
        history: &[SessionRecord],
        context: &UserContext,
    ) -> Vec<Recommendation> {
        let patterns = self.extractor.extract(scores, history);
        let recommendations = self.recommender.generate(&patterns, context);

        debug!(
            categories = patterns.len(),
            recommendations = recommendations.len(),
            "analysis complete"
        );

        self.learning.append(LearningRecord::new(
            patterns,
            recommendations.clone(),
            context.clone(),
        ));

        recommendations
    }

    /// Derive at most two short insight strings from the user context alone
    #[must_use]
    pub fn insights(&self, context: &UserContext) -> Vec<String> {
        insights::generate_insights(context)
    }

    /// Descriptive statistics over the recorded run history
    #[must_use]
    pub fn learning_stats(&self) -> LearningStats {
        self.learning.stats()
    }

    /// Clone out the recorded run history for inspection
    #[must_use]
    pub fn learning_snapshot(&self) -> Vec<LearningRecord> {
        self.learning.snapshot()
    }
}
