//! Eight palaces (八宮) with World (世) and Response (應) lines.
//!
//! Every hexagram belongs to exactly one palace, headed by one of the
//! eight doubled trigrams. The palace membership and World line come from
//! a lookup table; the Response line is always three positions from the
//! World line.

use serde::Serialize;

use crate::element::Element;
use crate::trigram::Trigram::{self, *};

/// Position of a hexagram within its palace sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PalaceGeneration {
    /// The doubled head trigram (本宮).
    #[serde(rename = "本宮")]
    Head,
    #[serde(rename = "一世")]
    First,
    #[serde(rename = "二世")]
    Second,
    #[serde(rename = "三世")]
    Third,
    #[serde(rename = "四世")]
    Fourth,
    #[serde(rename = "五世")]
    Fifth,
    /// Wandering soul (遊魂).
    #[serde(rename = "遊魂")]
    Wandering,
    /// Returning soul (歸魂).
    #[serde(rename = "歸魂")]
    Returning,
}

/// Generations in palace order.
pub const ALL_GENERATIONS: [PalaceGeneration; 8] = [
    PalaceGeneration::Head,
    PalaceGeneration::First,
    PalaceGeneration::Second,
    PalaceGeneration::Third,
    PalaceGeneration::Fourth,
    PalaceGeneration::Fifth,
    PalaceGeneration::Wandering,
    PalaceGeneration::Returning,
];

impl PalaceGeneration {
    /// Chinese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "本宮",
            Self::First => "一世",
            Self::Second => "二世",
            Self::Third => "三世",
            Self::Fourth => "四世",
            Self::Fifth => "五世",
            Self::Wandering => "遊魂",
            Self::Returning => "歸魂",
        }
    }

    /// World line (1..=6) held by hexagrams of this generation.
    pub const fn world_line(self) -> u8 {
        match self {
            Self::Head => 6,
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Wandering => 4,
            Self::Returning => 3,
        }
    }
}

/// Response line for a World line: `shi + 3`, wrapped into 1..=6.
pub const fn response_line(world: u8) -> u8 {
    ((world + 3 - 1) % 6) + 1
}

/// Palace membership of one hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PalaceInfo {
    /// Head trigram of the palace.
    pub palace: Trigram,
    /// Ruling element of the palace.
    pub element: Element,
    /// Position within the palace.
    pub generation: PalaceGeneration,
    /// World (世) line, 1..=6.
    pub world: u8,
    /// Response (應) line, 1..=6.
    pub response: u8,
}

impl PalaceInfo {
    const fn new(palace: Trigram, generation: PalaceGeneration) -> Self {
        let world = generation.world_line();
        Self {
            palace,
            element: palace.element(),
            generation,
            world,
            response: response_line(world),
        }
    }

    /// Palace label such as `乾宮`.
    pub fn label(&self) -> String {
        format!("{}宮", self.palace.name())
    }
}

/// Hexagrams of each palace as (upper, lower), in generation order.
pub const PALACE_TABLE: [(Trigram, [(Trigram, Trigram); 8]); 8] = [
    (Qian, [(Qian, Qian), (Qian, Xun), (Qian, Gen), (Qian, Kun), (Xun, Kun), (Gen, Kun), (Li, Kun), (Li, Qian)]),
    (Dui, [(Dui, Dui), (Dui, Kan), (Dui, Kun), (Dui, Gen), (Kan, Gen), (Kun, Gen), (Zhen, Gen), (Zhen, Dui)]),
    (Li, [(Li, Li), (Li, Gen), (Li, Xun), (Li, Kan), (Gen, Kan), (Xun, Kan), (Qian, Kan), (Qian, Li)]),
    (Zhen, [(Zhen, Zhen), (Zhen, Kun), (Zhen, Kan), (Zhen, Xun), (Kun, Xun), (Kan, Xun), (Dui, Xun), (Dui, Zhen)]),
    (Xun, [(Xun, Xun), (Xun, Qian), (Xun, Li), (Xun, Zhen), (Qian, Zhen), (Li, Zhen), (Gen, Zhen), (Gen, Xun)]),
    (Kan, [(Kan, Kan), (Kan, Dui), (Kan, Zhen), (Kan, Li), (Dui, Li), (Zhen, Li), (Kun, Li), (Kun, Kan)]),
    (Gen, [(Gen, Gen), (Gen, Li), (Gen, Qian), (Gen, Dui), (Li, Dui), (Qian, Dui), (Xun, Dui), (Xun, Gen)]),
    (Kun, [(Kun, Kun), (Kun, Zhen), (Kun, Dui), (Kun, Qian), (Zhen, Qian), (Dui, Qian), (Kan, Qian), (Kan, Kun)]),
];

/// Returned for a pair missing from the table. Unreachable with the
/// complete table, kept so lookups stay total.
const FALLBACK: PalaceInfo = PalaceInfo::new(Qian, PalaceGeneration::First);

/// Lookup indexed by `[upper id][lower id]`, built once from [`PALACE_TABLE`].
const PALACE_INDEX: [[Option<PalaceInfo>; 8]; 8] = build_palace_index();

const fn build_palace_index() -> [[Option<PalaceInfo>; 8]; 8] {
    let mut index = [[None; 8]; 8];
    let mut p = 0;
    while p < PALACE_TABLE.len() {
        let (head, members) = PALACE_TABLE[p];
        let mut g = 0;
        while g < members.len() {
            let (upper, lower) = members[g];
            index[upper.id() as usize][lower.id() as usize] =
                Some(PalaceInfo::new(head, ALL_GENERATIONS[g]));
            g += 1;
        }
        p += 1;
    }
    index
}

/// Palace, generation, and World/Response lines of a hexagram.
pub const fn palace_of(upper: Trigram, lower: Trigram) -> PalaceInfo {
    match PALACE_INDEX[upper.id() as usize][lower.id() as usize] {
        Some(info) => info,
        None => FALLBACK,
    }
}
