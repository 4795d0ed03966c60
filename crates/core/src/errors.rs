//! Core error types for the Pennywise savings engine.
//!
//! Calculators that work on a single goal are strict and surface
//! [`Error::InvalidGoalState`] to the caller. Portfolio-level aggregation never
//! returns these errors; it excludes the offending goal instead.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the savings engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid goal state: {0}")]
    InvalidGoalState(#[from] GoalStateError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// A goal is missing data its kind requires, or carries values no schedule
/// can be computed from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GoalStateError {
    #[error("goal '{goal_id}' is missing required field '{field}'")]
    MissingField { goal_id: String, field: &'static str },

    #[error("goal '{goal_id}' has a non-positive period ({start} to {end})")]
    NonPositiveSpan {
        goal_id: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("goal '{goal_id}' has a non-positive {field}: {value}")]
    NonPositiveAmount {
        goal_id: String,
        field: &'static str,
        value: Decimal,
    },

    #[error("goal '{goal_id}' has unknown kind '{kind}'")]
    UnknownKind { goal_id: String, kind: String },
}

impl GoalStateError {
    pub fn missing(goal_id: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            goal_id: goal_id.into(),
            field,
        }
    }

    pub fn non_positive(goal_id: impl Into<String>, field: &'static str, value: Decimal) -> Self {
        Self::NonPositiveAmount {
            goal_id: goal_id.into(),
            field,
            value,
        }
    }
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Goal kind cannot change from {from} to {to}")]
    KindChange { from: String, to: String },
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}
