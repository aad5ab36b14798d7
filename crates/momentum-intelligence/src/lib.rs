// ABOUTME: Behavioral pattern analysis and recommendation engine for Momentum
// ABOUTME: Trend classification, stability metrics, archetype rules, and learning history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

#![deny(unsafe_code)]

//! # Momentum Intelligence
//!
//! Behavioral-pattern analysis and recommendation engine. Given per-category
//! historical scores and a user's behavioral context, the engine classifies
//! trends, computes stability metrics, and emits a ranked list of actionable
//! recommendations with confidence and success-probability estimates.
//!
//! The engine is synchronous, performs no I/O, and never fails on malformed
//! input: insufficient data degrades to documented neutral defaults. Its one
//! mutable resource is the bounded learning history, guarded internally so
//! `analyze` takes `&self` even under multi-threaded hosts.
//!
//! ```
//! use momentum_core::models::{Category, UserContext};
//! use momentum_intelligence::IntelligenceEngine;
//! use std::collections::HashMap;
//!
//! let engine = IntelligenceEngine::new();
//! let scores = HashMap::from([(Category::new("mind"), 55.0)]);
//! let recommendations = engine.analyze(&scores, &[], &UserContext::default());
//! assert!(recommendations.len() <= 5);
//! ```

/// Engine configuration with environment overrides and validation
pub mod config;

/// Top-level engine orchestration
pub mod engine;

/// Context-derived insight strings
pub mod insights;

/// Bounded learning history store
pub mod learning_history;

/// Per-category pattern assembly
pub mod pattern_extraction;

/// Success-probability estimation
pub mod probability;

/// Archetype rule engine
pub mod recommendation_engine;

/// Score series extraction from the session log
pub mod score_history;

/// Per-category strategy catalog
pub mod strategies;

/// Trend classification and stability metrics
pub mod trend_analysis;

pub use config::EngineConfig;
pub use engine::IntelligenceEngine;
pub use learning_history::{LearningHistory, LearningMaturity, LearningRecord, LearningStats};
pub use pattern_extraction::PatternExtractor;
pub use recommendation_engine::RecommendationEngine;
pub use strategies::{CategoryStrategy, StrategyCatalog};
pub use trend_analysis::TrendAnalyzer;
