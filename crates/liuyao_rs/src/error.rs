//! Error types for the convenience wrapper.

use liuyao_config::ConfigError;
use thiserror::Error;

/// Rejected raw input, caught before any computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InputError {
    /// A number field did not hold an integer.
    #[error("{field} must be an integer, got {value:?}")]
    NotAnInteger { field: &'static str, value: String },
    /// The date was not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    /// The hour slot was outside 0..=11.
    #[error("hour slot {0} out of range 0..=11")]
    HourSlotOutOfRange(i64),
    /// The clock hour was outside 0..=23.
    #[error("clock hour {0} out of range 0..=23")]
    ClockHourOutOfRange(i64),
}

/// Any failure surfaced by the wrapper.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LiuyaoError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot serialize reading: {0}")]
    Json(#[from] serde_json::Error),
}
