// ABOUTME: Configuration error types for the Momentum engine
// ABOUTME: Validation and environment-parsing failures surfaced via thiserror

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

use thiserror::Error;

/// Engine configuration errors
///
/// The analysis path itself never fails: insufficient or malformed input
/// degrades to documented neutral defaults. Errors exist only at the
/// configuration boundary, before an engine is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An analysis window is out of its valid range
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// A classification or scoring threshold is out of its valid range
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// A recommendation or history limit is out of its valid range
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    /// An environment variable override could not be parsed
    #[error("Invalid environment value for {key}: {value}")]
    InvalidEnvironment {
        /// The environment variable name
        key: String,
        /// The unparseable value
        value: String,
    },
}
