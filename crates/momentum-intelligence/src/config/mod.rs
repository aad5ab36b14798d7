// ABOUTME: Configuration-driven parameters for behavioral analysis replacing magic numbers
// ABOUTME: Type-safe, environment-configurable windows, thresholds, and limits

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Engine configuration.
//!
//! Defaults reproduce the documented analysis contract exactly; deployments
//! can override individual values through `MOMENTUM_*` environment variables.

use momentum_core::constants::{analysis, history, recommendation};
use momentum_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Observation windows for trend and stability analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalysisWindows {
    /// Maximum observations per category considered by one analysis call
    pub history_window: usize,

    /// Observations used for velocity (short-window rate of change)
    pub velocity_window: usize,

    /// Observations used for stability (fluctuation measure)
    pub stability_window: usize,

    /// Minimum observations required before a trend can be classified
    pub min_trend_points: usize,
}

/// Thresholds for trend classification and metric scaling
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Least-squares slope above which a series is improving
    pub improving_slope: f64,

    /// Least-squares slope below which a series is declining
    pub declining_slope: f64,

    /// Standard-deviation divisor mapping score spread onto consistency
    pub consistency_stdev_divisor: f64,

    /// Mean-fluctuation divisor mapping successive jumps onto stability
    pub stability_fluctuation_divisor: f64,

    /// Velocity is clamped to +/- this bound
    pub velocity_clamp: f64,
}

/// Limits on recommendation generation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Maximum recommendations returned per analysis call
    pub max_recommendations: usize,

    /// Recommendations at or below this confidence are dropped
    pub min_confidence: f64,
}

/// Learning history retention limits
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistoryLimits {
    /// Record count above which the store trims in one batch
    pub max_records: usize,

    /// Record count retained after a batch trim
    pub trim_to: usize,
}

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Observation windows
    pub windows: AnalysisWindows,
    /// Classification thresholds
    pub thresholds: TrendThresholds,
    /// Recommendation limits
    pub limits: RecommendationLimits,
    /// Learning history retention
    pub history: HistoryLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            windows: AnalysisWindows {
                history_window: analysis::HISTORY_WINDOW,
                velocity_window: analysis::VELOCITY_WINDOW,
                stability_window: analysis::STABILITY_WINDOW,
                min_trend_points: analysis::MIN_TREND_POINTS,
            },
            thresholds: TrendThresholds {
                improving_slope: analysis::IMPROVING_SLOPE,
                declining_slope: analysis::DECLINING_SLOPE,
                consistency_stdev_divisor: analysis::CONSISTENCY_STDEV_DIVISOR,
                stability_fluctuation_divisor: analysis::STABILITY_FLUCTUATION_DIVISOR,
                velocity_clamp: analysis::VELOCITY_CLAMP,
            },
            limits: RecommendationLimits {
                max_recommendations: recommendation::MAX_RECOMMENDATIONS,
                min_confidence: recommendation::MIN_CONFIDENCE,
            },
            history: HistoryLimits {
                max_records: history::MAX_RECORDS,
                trim_to: history::TRIM_TO,
            },
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an invalid value
    /// or the resulting configuration fails validation.
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(val) = env_parse("MOMENTUM_HISTORY_WINDOW")? {
            config.windows.history_window = val;
        }
        if let Some(val) = env_parse("MOMENTUM_VELOCITY_WINDOW")? {
            config.windows.velocity_window = val;
        }
        if let Some(val) = env_parse("MOMENTUM_STABILITY_WINDOW")? {
            config.windows.stability_window = val;
        }
        if let Some(val) = env_parse("MOMENTUM_MIN_TREND_POINTS")? {
            config.windows.min_trend_points = val;
        }
        if let Some(val) = env_parse("MOMENTUM_MAX_RECOMMENDATIONS")? {
            config.limits.max_recommendations = val;
        }
        if let Some(val) = env_parse("MOMENTUM_MIN_CONFIDENCE")? {
            config.limits.min_confidence = val;
        }
        if let Some(val) = env_parse("MOMENTUM_HISTORY_MAX_RECORDS")? {
            config.history.max_records = val;
        }
        if let Some(val) = env_parse("MOMENTUM_HISTORY_TRIM_TO")? {
            config.history.trim_to = val;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is out of range or the
    /// windows/limits are mutually inconsistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.windows.history_window == 0 {
            return Err(ConfigError::InvalidWindow(
                "history_window must be > 0".into(),
            ));
        }

        if self.windows.velocity_window < 2 {
            return Err(ConfigError::InvalidWindow(
                "velocity_window must be >= 2".into(),
            ));
        }

        if self.windows.stability_window < 2 {
            return Err(ConfigError::InvalidWindow(
                "stability_window must be >= 2".into(),
            ));
        }

        if self.windows.min_trend_points < 2 {
            return Err(ConfigError::InvalidWindow(
                "min_trend_points must be >= 2".into(),
            ));
        }

        if self.thresholds.improving_slope <= self.thresholds.declining_slope {
            return Err(ConfigError::InvalidThreshold(
                "improving_slope must be > declining_slope".into(),
            ));
        }

        if self.thresholds.consistency_stdev_divisor <= 0.0 {
            return Err(ConfigError::InvalidThreshold(
                "consistency_stdev_divisor must be > 0".into(),
            ));
        }

        if self.thresholds.stability_fluctuation_divisor <= 0.0 {
            return Err(ConfigError::InvalidThreshold(
                "stability_fluctuation_divisor must be > 0".into(),
            ));
        }

        if self.thresholds.velocity_clamp <= 0.0 {
            return Err(ConfigError::InvalidThreshold(
                "velocity_clamp must be > 0".into(),
            ));
        }

        if self.limits.max_recommendations == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_recommendations must be > 0".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.limits.min_confidence) {
            return Err(ConfigError::InvalidLimit(
                "min_confidence must be between 0 and 1".into(),
            ));
        }

        if self.history.max_records == 0 {
            return Err(ConfigError::InvalidLimit("max_records must be > 0".into()));
        }

        if self.history.trim_to > self.history.max_records {
            return Err(ConfigError::InvalidLimit(
                "trim_to must be <= max_records".into(),
            ));
        }

        Ok(())
    }
}

/// Parse an environment variable override, distinguishing absent from invalid
fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvironment {
                key: key.into(),
                value: val,
            }),
        Err(_) => Ok(None),
    }
}
