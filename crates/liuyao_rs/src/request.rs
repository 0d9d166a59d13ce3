//! Raw-input validation.
//!
//! Form fields arrive as text. They are checked here, before any
//! computation, so the engine only ever sees well-typed values.

use chrono::NaiveDate;
use liuyao_base::HourSlot;
use liuyao_reading::{Reading, ReadingConfig, Topic, compute_reading};

use crate::error::InputError;

/// Date format accepted for query dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated reading request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRequest {
    pub n1: i64,
    pub n2: i64,
    pub n3: i64,
    pub date: NaiveDate,
    pub hour_slot: HourSlot,
    pub topic: Option<Topic>,
    /// Free-text question, carried through to the prompt.
    pub question: Option<String>,
}

impl ReadingRequest {
    /// Validate the five raw fields.
    pub fn parse(
        n1: &str,
        n2: &str,
        n3: &str,
        date: &str,
        hour_slot: &str,
    ) -> Result<Self, InputError> {
        Ok(Self {
            n1: parse_number("n1", n1)?,
            n2: parse_number("n2", n2)?,
            n3: parse_number("n3", n3)?,
            date: parse_date(date)?,
            hour_slot: parse_hour_slot(hour_slot)?,
            topic: None,
            question: None,
        })
    }

    /// Attach a topic.
    pub fn with_topic(mut self, topic: Option<Topic>) -> Self {
        self.topic = topic;
        self
    }

    /// Attach a question; blank text counts as none.
    pub fn with_question(mut self, question: Option<&str>) -> Self {
        self.question = question
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        self
    }

    /// Compute the reading for this request.
    pub fn reading(&self, config: &ReadingConfig) -> Reading {
        compute_reading(
            self.n1,
            self.n2,
            self.n3,
            self.date,
            self.hour_slot,
            self.topic,
            config,
        )
    }
}

/// Parse a whole integer, surrounding whitespace allowed.
pub fn parse_number(field: &'static str, value: &str) -> Result<i64, InputError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotAnInteger {
            field,
            value: value.to_string(),
        })
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(value.to_string()))
}

/// Parse an hour slot 0..=11.
pub fn parse_hour_slot(value: &str) -> Result<HourSlot, InputError> {
    let slot = parse_number("hour_slot", value)?;
    HourSlot::new(slot).map_err(|_| InputError::HourSlotOutOfRange(slot))
}

/// Hour slot for a clock hour 0..=23.
pub fn slot_for_clock_hour(hour: i64) -> Result<HourSlot, InputError> {
    u32::try_from(hour)
        .ok()
        .and_then(|h| HourSlot::from_clock_hour(h).ok())
        .ok_or(InputError::ClockHourOutOfRange(hour))
}
