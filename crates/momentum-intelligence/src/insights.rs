// ABOUTME: Short context-derived insight strings for caller-side display
// ABOUTME: Deterministic, engine-state-free, capped at two entries

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Insight generation.
//!
//! Produces at most two short descriptive strings from user-context fields
//! alone. No engine state is consulted, so the same context always yields the
//! same strings; any cosmetic variation belongs in the presentation layer.

use momentum_core::constants::probability::{HIGH_COMPLETION_RATE, STREAK_THRESHOLD};
use momentum_core::models::{MotivationType, UserContext};

/// Maximum insight strings returned per call
const MAX_INSIGHTS: usize = 2;

/// Completion rate below which shorter sessions are suggested
const LOW_COMPLETION_RATE: f64 = 0.3;

/// Derive at most two short insight strings from the user context.
///
/// Candidates are collected in priority order (streak, completion behavior,
/// schedule, motivation) and the first two win. A blank context yields an
/// empty list.
#[must_use]
pub fn generate_insights(context: &UserContext) -> Vec<String> {
    let mut insights = Vec::new();

    if context.current_streak > STREAK_THRESHOLD {
        insights.push(format!(
            "You're on a {}-day streak; keep the chain unbroken and the routine locks in",
            context.current_streak
        ));
    }

    if context.total_sessions > 0 {
        if context.completion_rate > HIGH_COMPLETION_RATE {
            insights.push(format!(
                "You complete {:.0}% of sessions you start, a strong base for more ambitious plans",
                context.completion_rate * 100.0
            ));
        } else if context.completion_rate < LOW_COMPLETION_RATE {
            insights.push(
                "Try shorter sessions: finishing small beats abandoning big".into(),
            );
        }
    }

    if !context.preferred_time.is_empty() {
        insights.push(format!(
            "Your {} sessions are the ones that happen; schedule the important work there",
            context.preferred_time
        ));
    }

    if context.total_sessions > 0 {
        insights.push(motivation_insight(context.motivation_type).into());
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

/// Motivation-specific nudge
const fn motivation_insight(motivation: MotivationType) -> &'static str {
    match motivation {
        MotivationType::Achievement => {
            "Set a concrete two-week milestone; you work best with a finish line in sight"
        }
        MotivationType::Progress => {
            "Review your weekly score deltas; visible progress is what keeps you moving"
        }
        MotivationType::Social => {
            "Share this week's plan with someone; accountability is your multiplier"
        }
        MotivationType::Intrinsic => {
            "Reconnect with why each routine matters to you; that is what sustains your practice"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_context_yields_no_insights() {
        assert!(generate_insights(&UserContext::default()).is_empty());
    }

    #[test]
    fn never_more_than_two_insights() {
        let ctx = UserContext {
            total_sessions: 80,
            current_streak: 12,
            completion_rate: 0.9,
            preferred_time: "morning".into(),
            ..UserContext::default()
        };
        let insights = generate_insights(&ctx);
        assert_eq!(insights.len(), 2);
        assert!(insights[0].contains("12-day streak"));
        assert!(insights[1].contains("90%"));
    }

    #[test]
    fn identical_context_yields_identical_insights() {
        let ctx = UserContext {
            total_sessions: 5,
            completion_rate: 0.2,
            ..UserContext::default()
        };
        assert_eq!(generate_insights(&ctx), generate_insights(&ctx));
    }
}
