//! Symbol tables and pure primitives for six-line (六爻) hexagram readings.
//!
//! This crate provides:
//! - Stems, branches, elements, trigrams and the six relatives
//! - Na-Jia branch assignment and the eight-palace World/Response table
//! - The 64-hexagram text table
//! - Year/month/day/hour pillars over an approximate solar-term table
//! - Hexagram derivation from three numbers
//! - Branch interactions, Six Beasts and void branches
//!
//! Everything here is immutable data or a pure function of its inputs.

pub mod element;
pub mod error;
pub mod ganzhi;
pub mod hexagram;
pub mod hexagram_text;
pub mod interaction;
pub mod najia;
pub mod palace;
pub mod pillar;
pub mod relation;
pub mod six_beast;
pub mod solar_term;
pub mod trigram;
pub mod void;

pub use element::{
    ALL_ELEMENTS, Element, ElementInteraction, branch_element, element_interaction,
};
pub use error::BaseError;
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, Stem, sexagenary_index};
pub use hexagram::{
    ALL_POSITIONS, DerivedHexagrams, Hexagram, LinePosition, Polarity, derive_hexagrams,
};
pub use hexagram_text::{
    HEXAGRAM_TABLE, HexagramEntry, HexagramText, hexagram_by_king_wen, hexagram_entry,
    hexagram_entry_by_key, hexagram_entry_for_ids, hexagram_key, hexagram_text,
    hexagram_text_for_ids,
};
pub use interaction::{BranchInteraction, branch_interaction};
pub use najia::{NaJia, hexagram_branches, najia};
pub use palace::{PALACE_TABLE, PalaceGeneration, PalaceInfo, palace_of, response_line};
pub use pillar::{
    FourPillars, HourSlot, MonthRule, Pillar, PillarConfig, YearBoundary, day_pillar,
    four_pillars, hour_pillar, month_pillar, year_pillar,
};
pub use relation::{ALL_RELATIVES, SixRelative, six_relative};
pub use six_beast::{ALL_BEASTS, SixBeast, six_beasts};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, jie_day, lunar_month_index, month_branch, solar_month_index,
};
pub use trigram::{ALL_TRIGRAMS, Trigram};
pub use void::{VoidMethod, void_branches, void_pair, xun_void_branches};
