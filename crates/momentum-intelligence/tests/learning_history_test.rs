// ABOUTME: Integration tests for learning history retention through the engine
// ABOUTME: Validates batch trimming, snapshot reads, and maturity bucketing

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use momentum_core::models::{Category, UserContext};
use momentum_intelligence::config::EngineConfig;
use momentum_intelligence::{IntelligenceEngine, LearningMaturity};
use std::collections::HashMap;

#[test]
fn engine_trims_history_with_configured_limits() {
    let mut config = EngineConfig::default();
    config.history.max_records = 6;
    config.history.trim_to = 3;
    config.validate().unwrap();

    let engine = IntelligenceEngine::with_config(config);
    let scores = HashMap::from([(Category::new("mind"), 65.0)]);

    for _ in 0..6 {
        engine.analyze(&scores, &[], &UserContext::default());
    }
    assert_eq!(engine.learning_stats().analyses_recorded, 6);

    // The seventh run exceeds the cap and triggers one batch trim
    engine.analyze(&scores, &[], &UserContext::default());
    assert_eq!(engine.learning_stats().analyses_recorded, 3);
}

#[test]
fn snapshot_records_carry_the_run_contents() {
    let engine = IntelligenceEngine::new();
    let scores = HashMap::from([(Category::new("mind"), 55.0)]);
    let ctx = UserContext {
        total_sessions: 12,
        ..UserContext::default()
    };

    let returned = engine.analyze(&scores, &[], &ctx);
    let snapshot = engine.learning_snapshot();

    assert_eq!(snapshot.len(), 1);
    let record = &snapshot[0];
    assert_eq!(record.context.total_sessions, 12);
    assert_eq!(record.patterns.len(), 1);
    assert_eq!(record.recommendations.len(), returned.len());
    assert_eq!(record.recommendations[0].id, returned[0].id);
}

#[test]
fn maturity_follows_recorded_run_count() {
    let engine = IntelligenceEngine::new();
    let scores = HashMap::from([(Category::new("mind"), 80.0)]);

    assert_eq!(
        engine.learning_stats().maturity,
        LearningMaturity::Calibrating
    );

    for _ in 0..10 {
        engine.analyze(&scores, &[], &UserContext::default());
    }
    assert_eq!(
        engine.learning_stats().maturity,
        LearningMaturity::Developing
    );

    for _ in 0..40 {
        engine.analyze(&scores, &[], &UserContext::default());
    }
    assert_eq!(
        engine.learning_stats().maturity,
        LearningMaturity::Established
    );
}

#[test]
fn serialized_records_round_trip() {
    let engine = IntelligenceEngine::new();
    let scores = HashMap::from([(Category::new("mind"), 55.0)]);
    engine.analyze(&scores, &[], &UserContext::default());

    let snapshot = engine.learning_snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: Vec<momentum_intelligence::LearningRecord> =
        serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].record_id, snapshot[0].record_id);
    assert_eq!(
        restored[0].recommendations[0].id,
        snapshot[0].recommendations[0].id
    );
}
