//! Annotated six-line readings.
//!
//! This crate provides:
//! - The line annotator (relatives, beasts, World/Response, void, changes)
//! - `compute_reading`, the single entry point from numbers and a moment
//! - Topics and their useful-spirit relatives
//! - `Diviner`, a pillar-memoizing engine for batches
//!
//! Logging goes through `tracing`; no subscriber is installed here.

pub mod annotate;
pub mod diviner;
pub mod error;
pub mod reading;
pub mod reading_types;
pub mod topic;

pub use annotate::{annotate_lines, changed_line};
pub use diviner::Diviner;
pub use error::ReadingError;
pub use reading::{compute_reading, reading_with_pillars};
pub use reading_types::{AnnotatedLine, ChangedLine, HexagramSummary, Reading, ReadingConfig};
pub use topic::{ALL_TOPICS, Topic, topic_from_keyword};
