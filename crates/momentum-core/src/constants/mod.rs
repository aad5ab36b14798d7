// ABOUTME: Analysis constants for behavioral pattern detection and recommendation generation
// ABOUTME: Default windows, thresholds, and probability adjustments organized by domain

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Application-wide analysis constants.
//!
//! These are the defaults behind `EngineConfig`; callers tune behavior through
//! configuration rather than by editing these values.

/// Observation windows for trend and stability analysis
pub mod analysis {
    /// Maximum observations per category considered by one analysis call
    pub const HISTORY_WINDOW: usize = 20;

    /// Observations used for velocity (short-window rate of change)
    pub const VELOCITY_WINDOW: usize = 5;

    /// Observations used for stability (fluctuation measure)
    pub const STABILITY_WINDOW: usize = 10;

    /// Minimum observations required before a trend can be classified
    pub const MIN_TREND_POINTS: usize = 3;

    /// Least-squares slope above which a series is classified as improving
    pub const IMPROVING_SLOPE: f64 = 0.5;

    /// Least-squares slope below which a series is classified as declining
    pub const DECLINING_SLOPE: f64 = -0.5;

    /// Standard-deviation divisor mapping score spread onto consistency [0, 1]
    pub const CONSISTENCY_STDEV_DIVISOR: f64 = 30.0;

    /// Mean-fluctuation divisor mapping successive jumps onto stability [0, 1]
    pub const STABILITY_FLUCTUATION_DIVISOR: f64 = 20.0;

    /// Velocity is clamped to +/- this bound (score points per session)
    pub const VELOCITY_CLAMP: f64 = 10.0;
}

/// Score thresholds driving archetype rule selection
pub mod scoring {
    /// Upper bound of the score scale
    pub const MAX_SCORE: f64 = 100.0;

    /// Scores below this trigger a recovery recommendation
    pub const RECOVERY_SCORE_THRESHOLD: f64 = 70.0;

    /// Scores below this escalate recovery priority to critical
    pub const CRITICAL_SCORE_THRESHOLD: f64 = 60.0;

    /// Improving scores above this trigger an optimization recommendation
    pub const OPTIMIZATION_SCORE_THRESHOLD: f64 = 75.0;

    /// Scores at or above this (with high consistency) trigger mastery
    pub const MASTERY_SCORE_THRESHOLD: f64 = 90.0;

    /// Consistency required alongside the mastery score threshold
    pub const MASTERY_CONSISTENCY_THRESHOLD: f64 = 0.8;

    /// Consistency below this triggers a consistency-building recommendation
    pub const LOW_CONSISTENCY_THRESHOLD: f64 = 0.5;

    /// Mean snapshot score above which the breakthrough rule fires
    pub const BREAKTHROUGH_MEAN_THRESHOLD: f64 = 85.0;
}

/// Fixed archetype confidences and impact caps
pub mod recommendation {
    /// Maximum recommendations returned per analysis call
    pub const MAX_RECOMMENDATIONS: usize = 5;

    /// Recommendations at or below this confidence are never returned
    pub const MIN_CONFIDENCE: f64 = 0.6;

    /// Fixed confidence of recovery recommendations
    pub const RECOVERY_CONFIDENCE: f64 = 0.92;

    /// Fixed confidence of optimization recommendations
    pub const OPTIMIZATION_CONFIDENCE: f64 = 0.88;

    /// Fixed confidence of mastery (maintenance) recommendations
    pub const MASTERY_CONFIDENCE: f64 = 0.95;

    /// Fixed confidence of consistency-building recommendations
    pub const CONSISTENCY_CONFIDENCE: f64 = 0.85;

    /// Fixed confidence of the cross-category breakthrough recommendation
    pub const BREAKTHROUGH_CONFIDENCE: f64 = 0.96;

    /// Cap on estimated impact of a recovery recommendation
    pub const RECOVERY_IMPACT_CAP: f64 = 25.0;

    /// Cap on estimated impact of an optimization recommendation
    pub const OPTIMIZATION_IMPACT_CAP: f64 = 15.0;

    /// Fixed estimated impact of a mastery recommendation
    pub const MASTERY_IMPACT: f64 = 5.0;

    /// Fixed estimated impact of a consistency-building recommendation
    pub const CONSISTENCY_IMPACT: f64 = 18.0;

    /// Fixed estimated impact of the breakthrough recommendation
    pub const BREAKTHROUGH_IMPACT: f64 = 30.0;
}

/// Success-probability baseline and additive adjustments
pub mod probability {
    /// Baseline success probability before adjustments
    pub const BASELINE: f64 = 0.70;

    /// Lower clamp of the final probability
    pub const MIN_PROBABILITY: f64 = 0.40;

    /// Upper clamp of the final probability
    pub const MAX_PROBABILITY: f64 = 0.98;

    /// Completion rate above which the completion bonus applies
    pub const HIGH_COMPLETION_RATE: f64 = 0.8;

    /// Streak length above which the streak bonus applies
    pub const STREAK_THRESHOLD: u32 = 7;

    /// Session count above which the experience bonus applies
    pub const EXPERIENCED_SESSIONS: u32 = 50;

    /// Bonus for a completion rate above `HIGH_COMPLETION_RATE`
    pub const COMPLETION_BONUS: f64 = 0.15;

    /// Bonus for a streak above `STREAK_THRESHOLD`
    pub const STREAK_BONUS: f64 = 0.10;

    /// Bonus for more than `EXPERIENCED_SESSIONS` total sessions
    pub const EXPERIENCE_BONUS: f64 = 0.05;

    /// Bonus when the category is among the user's stated preferences
    pub const PREFERENCE_BONUS: f64 = 0.10;

    /// Previous-success rate treated as evidence of a prior turnaround
    pub const PRIOR_SUCCESS_THRESHOLD: f64 = 0.7;
}

/// Learning history retention limits
pub mod history {
    /// Record count above which the store trims in one batch
    pub const MAX_RECORDS: usize = 200;

    /// Record count retained after a batch trim
    pub const TRIM_TO: usize = 100;

    /// Record count below which learning maturity is still calibrating
    pub const CALIBRATING_BELOW: usize = 10;

    /// Record count below which learning maturity is developing
    pub const DEVELOPING_BELOW: usize = 50;
}
