// ABOUTME: Score series extraction from the caller-supplied session log
// ABOUTME: Pulls the last N finite observations for one category, oldest first

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Score history access.
//!
//! The session log is opaque to the rest of the engine; this module is the
//! only place that knows its shape. Sessions missing a category are skipped,
//! and non-finite observations are discarded so downstream math never sees
//! NaN or infinity.

use momentum_core::models::{Category, SessionRecord};

/// Extract the most recent `window` observations for one category.
///
/// The session log is treated as chronological (most-recent-last); the
/// returned series preserves that order. Always succeeds: an empty log, an
/// unknown category, or all-malformed observations yield an empty series.
#[must_use]
pub fn series_for(history: &[SessionRecord], category: &Category, window: usize) -> Vec<f64> {
    let observations: Vec<f64> = history
        .iter()
        .filter_map(|session| session.scores.get(category).copied())
        .filter(|score| score.is_finite())
        .collect();

    let start = observations.len().saturating_sub(window);
    observations[start..].to_vec()
}
