// ABOUTME: Trend classification and stability metrics over per-category score series
// ABOUTME: Least-squares slope detection plus variance-derived consistency/velocity/stability

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Trend classification and stability metrics.
//!
//! All functions are pure and total: insufficient data resolves to the
//! documented neutral defaults (stable trend, consistency 1.0, velocity 0,
//! stability 0.5) rather than an error. Callers can feed empty, short, or
//! noisy series without a failure path.

#![allow(clippy::cast_precision_loss)] // Safe: series lengths are small window-bounded counts

use crate::config::{AnalysisWindows, TrendThresholds};
use momentum_core::models::Trend;

/// Minimum observations for variance-based metrics (consistency, velocity)
const MIN_VARIANCE_POINTS: usize = 2;

/// Minimum observations for the fluctuation-based stability metric
const MIN_STABILITY_POINTS: usize = 3;

/// Slope denominators below this are treated as degenerate
const DEGENERATE_DENOMINATOR: f64 = 1e-10;

/// Trend and stability analyzer for one category's score series
#[derive(Debug, Clone, Copy)]
pub struct TrendAnalyzer {
    windows: AnalysisWindows,
    thresholds: TrendThresholds,
}

impl TrendAnalyzer {
    /// Create an analyzer with the given windows and thresholds
    #[must_use]
    pub const fn new(windows: AnalysisWindows, thresholds: TrendThresholds) -> Self {
        Self {
            windows,
            thresholds,
        }
    }

    /// Classify the directional trend of a score series.
    ///
    /// Fits an ordinary least-squares line against index positions 0..n-1 and
    /// buckets the slope. Series shorter than the configured minimum (and
    /// degenerate fits) classify as `Stable`.
    #[must_use]
    pub fn classify(&self, series: &[f64]) -> Trend {
        if series.len() < self.windows.min_trend_points {
            return Trend::Stable;
        }

        let n = series.len() as f64;
        let sum_x: f64 = (0..series.len()).map(|i| i as f64).sum();
        let sum_y: f64 = series.iter().sum();
        let sum_xy: f64 = series.iter().enumerate().map(|(i, y)| i as f64 * y).sum();
        let sum_xx: f64 = (0..series.len()).map(|i| (i as f64).powi(2)).sum();

        let denominator = n.mul_add(sum_xx, -sum_x.powi(2));
        if denominator.abs() < DEGENERATE_DENOMINATOR {
            return Trend::Stable;
        }

        let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;

        if slope > self.thresholds.improving_slope {
            Trend::Improving
        } else if slope < self.thresholds.declining_slope {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }

    /// Inverse-variance consistency of a series, in [0, 1].
    ///
    /// Fewer than two points count as perfectly consistent: there is no
    /// evidence of variability yet.
    #[must_use]
    pub fn consistency(&self, series: &[f64]) -> f64 {
        if series.len() < MIN_VARIANCE_POINTS {
            return 1.0;
        }

        let n = series.len() as f64;
        let mean = series.iter().sum::<f64>() / n;
        let variance = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let stdev = variance.sqrt();

        (1.0 - stdev / self.thresholds.consistency_stdev_divisor).max(0.0)
    }

    /// Short-window average rate of change, clamped to the configured bound.
    ///
    /// Averages successive differences over the last `velocity_window`
    /// observations; fewer than two points yield zero velocity.
    #[must_use]
    pub fn velocity(&self, series: &[f64]) -> f64 {
        if series.len() < MIN_VARIANCE_POINTS {
            return 0.0;
        }

        let start = series.len().saturating_sub(self.windows.velocity_window);
        let recent = &series[start..];
        let deltas: Vec<f64> = recent.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let average = deltas.iter().sum::<f64>() / deltas.len() as f64;

        average.clamp(-self.thresholds.velocity_clamp, self.thresholds.velocity_clamp)
    }

    /// Inverse-fluctuation stability over the last `stability_window`
    /// observations, in [0, 1]. Fewer than three points yield the neutral 0.5.
    #[must_use]
    pub fn stability(&self, series: &[f64]) -> f64 {
        if series.len() < MIN_STABILITY_POINTS {
            return 0.5;
        }

        let start = series.len().saturating_sub(self.windows.stability_window);
        let recent = &series[start..];
        let fluctuation = recent
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).abs())
            .sum::<f64>()
            / (recent.len() - 1) as f64;

        (1.0 - fluctuation / self.thresholds.stability_fluctuation_divisor).max(0.0)
    }
}
