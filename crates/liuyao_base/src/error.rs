//! Error types for validated construction of base values.

use thiserror::Error;

/// Errors from constructing base values out of raw numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Hour slot outside 0..=11.
    #[error("hour slot {0} out of range 0..=11")]
    InvalidHourSlot(i64),
    /// Clock hour outside 0..=23.
    #[error("clock hour {0} out of range 0..=23")]
    InvalidClockHour(u32),
    /// Line position outside 1..=6.
    #[error("line position {0} out of range 1..=6")]
    InvalidLinePosition(i64),
}
