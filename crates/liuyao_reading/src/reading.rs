//! Reading orchestration: pillars, derivation and annotation in one call.

use chrono::NaiveDate;
use liuyao_base::{FourPillars, HourSlot, derive_hexagrams, four_pillars};
use tracing::debug;

use crate::annotate::annotate_lines;
use crate::reading_types::{HexagramSummary, Reading, ReadingConfig};
use crate::topic::Topic;

/// Compute a complete reading.
///
/// The same inputs always produce the same reading.
pub fn compute_reading(
    n1: i64,
    n2: i64,
    n3: i64,
    date: NaiveDate,
    hour_slot: HourSlot,
    topic: Option<Topic>,
    config: &ReadingConfig,
) -> Reading {
    let pillars = four_pillars(date, hour_slot, &config.pillar_config());
    reading_with_pillars([n1, n2, n3], date, hour_slot, pillars, topic)
}

/// Compute a reading from pillars already resolved for `(date, hour_slot)`.
pub fn reading_with_pillars(
    numbers: [i64; 3],
    date: NaiveDate,
    hour_slot: HourSlot,
    pillars: FourPillars,
    topic: Option<Topic>,
) -> Reading {
    let [n1, n2, n3] = numbers;
    let derived = derive_hexagrams(n1, n2, n3);
    let palace = derived.original.palace();
    debug!(
        original = %derived.original.key(),
        transformed = %derived.transformed.key(),
        moving = derived.moving_line.get(),
        palace = %palace.label(),
        world = palace.world,
        "derived hexagrams"
    );

    let useful_spirit = topic.map(Topic::useful_spirit);
    let lines = annotate_lines(&derived, &palace, &pillars, useful_spirit);
    let original = HexagramSummary::new(derived.original);
    let moving_line_text = original.text.line(derived.moving_line.get());
    debug!(
        day = %pillars.day,
        void = ?pillars.void.map(|b| b.name()),
        useful = ?useful_spirit.map(|r| r.name()),
        "annotated reading"
    );

    Reading {
        numbers,
        date,
        hour_slot,
        original,
        transformed: HexagramSummary::new(derived.transformed),
        palace,
        transformed_palace: derived.transformed.palace(),
        lines,
        moving_line: derived.moving_line,
        moving_line_text,
        pillars,
        topic,
        useful_spirit,
    }
}
