// ABOUTME: Criterion benchmarks for the behavioral intelligence engine
// ABOUTME: Measures pattern extraction and full analysis over synthetic session logs

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Criterion benchmarks for the intelligence engine.
//!
//! Measures full `analyze` calls and isolated pattern extraction over
//! deterministic synthetic session logs of increasing size.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use momentum_core::models::{Category, SessionRecord, UserContext};
use momentum_intelligence::config::EngineConfig;
use momentum_intelligence::{IntelligenceEngine, PatternExtractor};
use std::collections::HashMap;

const CATEGORIES: [&str; 5] = ["mind", "body", "sleep", "nutrition", "social"];

/// Generate a deterministic synthetic session log
fn generate_sessions(count: usize) -> Vec<SessionRecord> {
    let base_date = Utc::now() - Duration::days(count as i64);
    (0..count)
        .map(|index| {
            let scores: HashMap<Category, f64> = CATEGORIES
                .iter()
                .enumerate()
                .map(|(slot, name)| {
                    let score = 40.0 + ((index * 13 + slot * 29) % 55) as f64;
                    (Category::new(*name), score)
                })
                .collect();
            SessionRecord::new(base_date + Duration::days(index as i64), scores)
        })
        .collect()
}

fn snapshot() -> HashMap<Category, f64> {
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(slot, name)| (Category::new(*name), 45.0 + (slot * 11) as f64))
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let scores = snapshot();
    let context = UserContext {
        total_sessions: 80,
        current_streak: 9,
        completion_rate: 0.85,
        ..UserContext::default()
    };

    for session_count in [10_usize, 50, 200] {
        let history = generate_sessions(session_count);
        group.throughput(Throughput::Elements(session_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(session_count),
            &history,
            |b, history| {
                let engine = IntelligenceEngine::new();
                b.iter(|| black_box(engine.analyze(&scores, history, &context)));
            },
        );
    }
    group.finish();
}

fn bench_pattern_extraction(c: &mut Criterion) {
    let scores = snapshot();
    let history = generate_sessions(200);
    let extractor = PatternExtractor::new(&EngineConfig::default());

    c.bench_function("pattern_extraction_200_sessions", |b| {
        b.iter(|| black_box(extractor.extract(&scores, &history)));
    });
}

criterion_group!(benches, bench_analyze, bench_pattern_extraction);
criterion_main!(benches);
