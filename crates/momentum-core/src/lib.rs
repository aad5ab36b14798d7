// ABOUTME: Core types and constants for the Momentum behavioral intelligence platform
// ABOUTME: Foundation crate with data models, error types, and analysis constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

#![deny(unsafe_code)]

//! # Momentum Core
//!
//! Foundation crate providing shared types and constants for the Momentum
//! behavioral intelligence platform. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Core data models (`Category`, `SessionRecord`, `UserContext`,
//!   `BehaviorPattern`, `Recommendation`)
//! - **errors**: Configuration error types
//! - **constants**: Analysis constants organized by domain

/// Analysis constants and default thresholds organized by domain
pub mod constants;

/// Configuration error types
pub mod errors;

/// Core data models (`Category`, patterns, recommendations, user context)
pub mod models;

pub use errors::ConfigError;
pub use models::{
    Archetype, BehaviorPattern, Category, Difficulty, LearningStyle, MotivationType, Priority,
    Recommendation, SessionRecord, Trend, UserContext,
};
