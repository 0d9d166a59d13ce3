//! Hexagram derivation from three numbers.
//!
//! The first two numbers pick the upper and lower trigrams (mod 8), the
//! third picks the moving line (mod 6, with 0 read as 6). The transformed
//! hexagram flips exactly that line.
//!
//! Line 1 is the bottom line. Lines 1..=3 belong to the lower trigram and
//! 4..=6 to the upper; within a trigram the pattern's least significant
//! bit is its bottom line.

use serde::Serialize;

use crate::error::BaseError;
use crate::ganzhi::Branch;
use crate::hexagram_text::{self, HexagramText};
use crate::najia;
use crate::palace::{self, PalaceInfo};
use crate::trigram::Trigram;

/// Line polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    /// Broken line (陰).
    #[serde(rename = "陰")]
    Yin,
    /// Solid line (陽).
    #[serde(rename = "陽")]
    Yang,
}

impl Polarity {
    /// Polarity of a pattern bit.
    pub const fn from_solid(solid: bool) -> Self {
        if solid { Self::Yang } else { Self::Yin }
    }

    /// 1 for yang, 0 for yin.
    pub const fn bit(self) -> u8 {
        match self {
            Self::Yin => 0,
            Self::Yang => 1,
        }
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yin => "陰",
            Self::Yang => "陽",
        }
    }

    /// Opposite polarity.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }
}

// ---------------------------------------------------------------------------
// Line position
// ---------------------------------------------------------------------------

/// A line position 1 (bottom) ..= 6 (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LinePosition(u8);

/// All six positions, bottom to top.
pub const ALL_POSITIONS: [LinePosition; 6] = [
    LinePosition(1),
    LinePosition(2),
    LinePosition(3),
    LinePosition(4),
    LinePosition(5),
    LinePosition(6),
];

impl LinePosition {
    /// Validated position.
    pub fn new(position: i64) -> Result<Self, BaseError> {
        if (1..=6).contains(&position) {
            Ok(Self(position as u8))
        } else {
            Err(BaseError::InvalidLinePosition(position))
        }
    }

    /// Moving line for a raw number: `n mod 6`, with 0 read as 6.
    pub const fn moving_from(n: i64) -> Self {
        match n.rem_euclid(6) {
            0 => Self(6),
            r => Self(r as u8),
        }
    }

    /// Position 1..=6.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index (0 = line 1).
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Whether the position lies in the lower trigram.
    pub const fn is_inner(self) -> bool {
        self.0 <= 3
    }

    /// Position within its trigram, 1..=3.
    pub const fn trigram_position(self) -> u8 {
        if self.is_inner() { self.0 } else { self.0 - 3 }
    }

    /// Traditional label, 初爻 .. 上爻.
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "初爻",
            2 => "二爻",
            3 => "三爻",
            4 => "四爻",
            5 => "五爻",
            _ => "上爻",
        }
    }
}

// ---------------------------------------------------------------------------
// Hexagram
// ---------------------------------------------------------------------------

/// An (upper, lower) trigram pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hexagram {
    /// Upper (outer) trigram, lines 4..=6.
    pub upper: Trigram,
    /// Lower (inner) trigram, lines 1..=3.
    pub lower: Trigram,
}

impl Hexagram {
    /// Stack two trigrams.
    pub const fn new(upper: Trigram, lower: Trigram) -> Self {
        Self { upper, lower }
    }

    /// Hexagram from two raw numbers, each taken mod 8.
    pub const fn from_numbers(n1: i64, n2: i64) -> Self {
        Self::new(Trigram::from_id(n1), Trigram::from_id(n2))
    }

    /// Table key `"<upper>-<lower>"`.
    pub fn key(&self) -> String {
        hexagram_text::hexagram_key(self.upper.id(), self.lower.id())
    }

    /// Polarity of the line at `position`.
    pub const fn line(&self, position: LinePosition) -> Polarity {
        let trigram = if position.is_inner() { self.lower } else { self.upper };
        Polarity::from_solid(trigram.is_solid(position.trigram_position()))
    }

    /// All six polarities, index 0 = line 1.
    pub const fn lines(&self) -> [Polarity; 6] {
        let mut out = [Polarity::Yin; 6];
        let mut i = 0;
        while i < 6 {
            out[i] = self.line(ALL_POSITIONS[i]);
            i += 1;
        }
        out
    }

    /// The hexagram with one line flipped.
    pub const fn with_line_flipped(&self, position: LinePosition) -> Self {
        let p = position.trigram_position();
        if position.is_inner() {
            Self::new(self.upper, self.lower.with_line_flipped(p))
        } else {
            Self::new(self.upper.with_line_flipped(p), self.lower)
        }
    }

    /// Na-Jia branches, index 0 = line 1.
    pub const fn branches(&self) -> [Branch; 6] {
        najia::hexagram_branches(self.upper, self.lower)
    }

    /// Palace membership and World/Response lines.
    pub const fn palace(&self) -> PalaceInfo {
        palace::palace_of(self.upper, self.lower)
    }

    /// Name and texts from the hexagram table.
    pub fn text(&self) -> HexagramText {
        hexagram_text::hexagram_text(self.upper, self.lower)
    }

    /// Image pair of the two trigrams, e.g. `水雷`.
    pub fn nature_pair(&self) -> String {
        format!("{}{}", self.upper.nature(), self.lower.nature())
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Original and transformed hexagrams for one cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedHexagrams {
    /// Hexagram picked by the first two numbers.
    pub original: Hexagram,
    /// Hexagram after the moving line flips.
    pub transformed: Hexagram,
    /// The single moving line.
    pub moving_line: LinePosition,
}

/// Derive both hexagrams from three raw numbers.
pub const fn derive_hexagrams(n1: i64, n2: i64, n3: i64) -> DerivedHexagrams {
    let original = Hexagram::from_numbers(n1, n2);
    let moving_line = LinePosition::moving_from(n3);
    DerivedHexagrams {
        original,
        transformed: original.with_line_flipped(moving_line),
        moving_line,
    }
}
