//! Convenience wrapper for the liuyao divination engine.
//!
//! Validates raw text input, casts readings and renders them as a text
//! chart, JSON or a consultation prompt. Everything a caller needs is
//! re-exported here.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use liuyao_rs::*;
//!
//! let request = ReadingRequest::parse("6", "4", "14", "2024-02-10", "4")?
//!     .with_topic(Some(Topic::Wealth))
//!     .with_question(Some("今年財運如何"));
//! let reading = request.reading(&ReadingConfig::default());
//! println!("{}", format_prompt(&reading, request.question.as_deref()));
//! ```

pub mod chart;
pub mod convenience;
pub mod error;
pub mod prompt;
pub mod request;

pub use chart::format_chart;
pub use convenience::{cast, cast_str, render, run, to_json};
pub use error::{InputError, LiuyaoError};
pub use prompt::{NO_QUESTION, format_prompt};
pub use request::{
    DATE_FORMAT, ReadingRequest, parse_date, parse_hour_slot, parse_number, slot_for_clock_hour,
};

// Re-export engine types so callers only need this crate.
pub use liuyao_base::{
    Branch, BranchInteraction, Element, ElementInteraction, FourPillars, Hexagram, HourSlot,
    LinePosition, MonthRule, PalaceGeneration, PalaceInfo, Pillar, Polarity, SixBeast,
    SixRelative, SolarTerm, Stem, Trigram, VoidMethod, YearBoundary,
};
pub use liuyao_config::{ConfigError, ConfigOverrides, LiuyaoConfig, OutputFormat};
pub use liuyao_reading::{
    AnnotatedLine, ChangedLine, Diviner, HexagramSummary, Reading, ReadingConfig, Topic,
    compute_reading,
};
