//! Memoized readings for batch use.
//!
//! Pillars depend only on the date, the hour slot and the config, so a
//! batch of casts for the same moment resolves them once.

use std::collections::HashMap;

use chrono::NaiveDate;
use liuyao_base::{FourPillars, HourSlot, four_pillars};
use tracing::trace;

use crate::reading::reading_with_pillars;
use crate::reading_types::{Reading, ReadingConfig};
use crate::topic::Topic;

/// Owned, single-threaded reading engine with a pillar memo.
///
/// The memo keeps one entry per distinct (date, hour slot) and is never
/// evicted on its own; call [`Diviner::clear`] between long batches.
#[derive(Debug, Default)]
pub struct Diviner {
    config: ReadingConfig,
    pillars: HashMap<(NaiveDate, HourSlot), FourPillars>,
}

impl Diviner {
    /// Engine for one config.
    pub fn new(config: ReadingConfig) -> Self {
        Self {
            config,
            pillars: HashMap::new(),
        }
    }

    /// Active config.
    pub fn config(&self) -> &ReadingConfig {
        &self.config
    }

    /// Replace the config, dropping memoized pillars when it changes.
    pub fn set_config(&mut self, config: ReadingConfig) {
        if config != self.config {
            self.pillars.clear();
            self.config = config;
        }
    }

    /// Pillars for a moment, computed once.
    pub fn pillars(&mut self, date: NaiveDate, hour_slot: HourSlot) -> FourPillars {
        let config = self.config.pillar_config();
        *self.pillars.entry((date, hour_slot)).or_insert_with(|| {
            trace!(%date, slot = hour_slot.index(), "pillar memo miss");
            four_pillars(date, hour_slot, &config)
        })
    }

    /// Cast one reading.
    pub fn cast(
        &mut self,
        n1: i64,
        n2: i64,
        n3: i64,
        date: NaiveDate,
        hour_slot: HourSlot,
        topic: Option<Topic>,
    ) -> Reading {
        let pillars = self.pillars(date, hour_slot);
        reading_with_pillars([n1, n2, n3], date, hour_slot, pillars, topic)
    }

    /// Drop every memoized moment, keeping the config.
    pub fn clear(&mut self) {
        self.pillars.clear();
    }

    /// Number of memoized moments.
    pub fn memoized(&self) -> usize {
        self.pillars.len()
    }
}
