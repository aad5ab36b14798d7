// ABOUTME: Bounded in-memory history of analysis runs for caller-side introspection
// ABOUTME: RwLock-guarded append-only store with batch trimming and maturity stats

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Learning history store.
//!
//! Records each analysis run so callers can render "the engine has seen N
//! analyses" style insight text. This is presentation data, not a feedback
//! loop: the classifier and estimator never read from this store.
//!
//! The store is the engine's one mutable resource. Appends take the write
//! lock; readers clone a snapshot out so rendering can proceed concurrently
//! with later analysis calls.

use crate::config::HistoryLimits;
use chrono::{DateTime, Utc};
use momentum_core::constants::history;
use momentum_core::models::{BehaviorPattern, Recommendation, UserContext};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};
use tracing::debug;
use uuid::Uuid;

/// One recorded analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningRecord {
    /// Unique id of this record
    pub record_id: Uuid,
    /// When the analysis ran
    pub recorded_at: DateTime<Utc>,
    /// Patterns extracted during the run
    pub patterns: Vec<BehaviorPattern>,
    /// Recommendations returned to the caller
    pub recommendations: Vec<Recommendation>,
    /// Snapshot of the user context supplied for the run
    pub context: UserContext,
}

impl LearningRecord {
    /// Create a record for an analysis run that just completed
    #[must_use]
    pub fn new(
        patterns: Vec<BehaviorPattern>,
        recommendations: Vec<Recommendation>,
        context: UserContext,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            patterns,
            recommendations,
            context,
        }
    }
}

/// Rough maturity bucket for how much run history the engine has accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningMaturity {
    /// Fewer than ten analyses recorded
    Calibrating,
    /// Enough runs for early patterns, still settling
    Developing,
    /// A substantial run history
    Established,
}

impl LearningMaturity {
    /// Bucket a record count into a maturity level
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        if count < history::CALIBRATING_BELOW {
            Self::Calibrating
        } else if count < history::DEVELOPING_BELOW {
            Self::Developing
        } else {
            Self::Established
        }
    }

    /// Human-readable description for insight text
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Calibrating => "still calibrating to your patterns",
            Self::Developing => "developing a picture of your patterns",
            Self::Established => "working from an established pattern history",
        }
    }
}

/// Descriptive statistics over the stored run history
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LearningStats {
    /// Number of analysis runs currently retained
    pub analyses_recorded: usize,
    /// Maturity bucket for the retained history
    pub maturity: LearningMaturity,
}

/// Bounded, thread-safe store of analysis runs
#[derive(Debug)]
pub struct LearningHistory {
    records: RwLock<Vec<LearningRecord>>,
    limits: HistoryLimits,
}

impl Default for LearningHistory {
    fn default() -> Self {
        Self::new(HistoryLimits {
            max_records: history::MAX_RECORDS,
            trim_to: history::TRIM_TO,
        })
    }
}

impl LearningHistory {
    /// Create a store with the given retention limits
    #[must_use]
    pub const fn new(limits: HistoryLimits) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            limits,
        }
    }

    /// Append a record, trimming in one batch once the cap is exceeded.
    ///
    /// Trimming retains the most recent `trim_to` records; eviction is
    /// deliberately batched rather than per-item so appends stay O(1)
    /// amortized.
    pub fn append(&self, record: LearningRecord) {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        records.push(record);

        if records.len() > self.limits.max_records {
            let excess = records.len() - self.limits.trim_to;
            records.drain(..excess);
            debug!(retained = records.len(), "trimmed learning history");
        }
    }

    /// Number of retained records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clone the retained records out for concurrent reading
    #[must_use]
    pub fn snapshot(&self) -> Vec<LearningRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Descriptive statistics for caller-side insight text
    #[must_use]
    pub fn stats(&self) -> LearningStats {
        let count = self.len();
        LearningStats {
            analyses_recorded: count,
            maturity: LearningMaturity::from_count(count),
        }
    }
}
