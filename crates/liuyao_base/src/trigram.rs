//! The eight trigrams (八卦).
//!
//! Trigram ids follow the numeric-casting convention: the remainder of a
//! number modulo 8 selects the trigram, with 0 standing for 坤 (the eighth).
//!
//! Each trigram stores a 3-bit line pattern. Bit 2 (most significant) is
//! the top line, bit 0 the bottom line; 1 is solid (yang), 0 broken (yin).
//! Written most-significant-bit first, 兌 is `011`: broken on top.

use serde::Serialize;

use crate::element::Element;

/// The eight trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trigram {
    #[serde(rename = "坤")]
    Kun,
    #[serde(rename = "乾")]
    Qian,
    #[serde(rename = "兌")]
    Dui,
    #[serde(rename = "離")]
    Li,
    #[serde(rename = "震")]
    Zhen,
    #[serde(rename = "巽")]
    Xun,
    #[serde(rename = "坎")]
    Kan,
    #[serde(rename = "艮")]
    Gen,
}

/// All 8 trigrams indexed by id (0 = 坤, 1 = 乾 .. 7 = 艮).
pub const ALL_TRIGRAMS: [Trigram; 8] = [
    Trigram::Kun,
    Trigram::Qian,
    Trigram::Dui,
    Trigram::Li,
    Trigram::Zhen,
    Trigram::Xun,
    Trigram::Kan,
    Trigram::Gen,
];

impl Trigram {
    /// Numeric id (0..=7).
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Trigram for any integer, reduced into [0, 8).
    pub const fn from_id(n: i64) -> Self {
        ALL_TRIGRAMS[n.rem_euclid(8) as usize]
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kun => "坤",
            Self::Qian => "乾",
            Self::Dui => "兌",
            Self::Li => "離",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Kan => "坎",
            Self::Gen => "艮",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Kun => "kun",
            Self::Qian => "qian",
            Self::Dui => "dui",
            Self::Li => "li",
            Self::Zhen => "zhen",
            Self::Xun => "xun",
            Self::Kan => "kan",
            Self::Gen => "gen",
        }
    }

    /// Natural image (地天澤火雷風水山).
    pub const fn nature(self) -> &'static str {
        match self {
            Self::Kun => "地",
            Self::Qian => "天",
            Self::Dui => "澤",
            Self::Li => "火",
            Self::Zhen => "雷",
            Self::Xun => "風",
            Self::Kan => "水",
            Self::Gen => "山",
        }
    }

    /// English gloss of the natural image.
    pub const fn english_nature(self) -> &'static str {
        match self {
            Self::Kun => "Earth",
            Self::Qian => "Heaven",
            Self::Dui => "Lake",
            Self::Li => "Fire",
            Self::Zhen => "Thunder",
            Self::Xun => "Wind",
            Self::Kan => "Water",
            Self::Gen => "Mountain",
        }
    }

    /// Unicode trigram symbol.
    pub const fn symbol(self) -> char {
        match self {
            Self::Kun => '☷',
            Self::Qian => '☰',
            Self::Dui => '☱',
            Self::Li => '☲',
            Self::Zhen => '☳',
            Self::Xun => '☴',
            Self::Kan => '☵',
            Self::Gen => '☶',
        }
    }

    /// 3-bit line pattern, top line in bit 2.
    pub const fn pattern(self) -> u8 {
        match self {
            Self::Kun => 0b000,
            Self::Qian => 0b111,
            Self::Dui => 0b011,
            Self::Li => 0b101,
            Self::Zhen => 0b001,
            Self::Xun => 0b110,
            Self::Kan => 0b010,
            Self::Gen => 0b100,
        }
    }

    /// Pattern as a `"111"`-style string, top line first.
    pub fn pattern_string(self) -> String {
        format!("{:03b}", self.pattern())
    }

    /// Ruling element of the trigram (and of the palace it heads).
    pub const fn element(self) -> Element {
        match self {
            Self::Qian | Self::Dui => Element::Metal,
            Self::Li => Element::Fire,
            Self::Zhen | Self::Xun => Element::Wood,
            Self::Kan => Element::Water,
            Self::Gen | Self::Kun => Element::Earth,
        }
    }

    /// Whether the line at `position` (1 = bottom .. 3 = top) is solid.
    ///
    /// Positions outside 1..=3 return `false`.
    pub const fn is_solid(self, position: u8) -> bool {
        if position < 1 || position > 3 {
            return false;
        }
        (self.pattern() >> (position - 1)) & 1 == 1
    }

    /// Trigram whose pattern matches the low 3 bits of `pattern`.
    pub const fn from_pattern(pattern: u8) -> Self {
        ALL_TRIGRAMS[PATTERN_INDEX[(pattern & 0b111) as usize] as usize]
    }

    /// Trigram with the line at `position` (1..=3) flipped.
    ///
    /// Positions outside 1..=3 leave the trigram unchanged.
    pub const fn with_line_flipped(self, position: u8) -> Self {
        if position < 1 || position > 3 {
            return self;
        }
        Self::from_pattern(self.pattern() ^ (1 << (position - 1)))
    }

    /// Look up a trigram by Chinese name or pinyin.
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        ALL_TRIGRAMS
            .iter()
            .copied()
            .find(|t| t.name() == trimmed || t.pinyin().eq_ignore_ascii_case(trimmed))
    }
}

/// Reverse index: pattern -> trigram id, built once from the forward table.
const PATTERN_INDEX: [u8; 8] = build_pattern_index();

const fn build_pattern_index() -> [u8; 8] {
    let mut index = [0u8; 8];
    let mut i = 0;
    while i < ALL_TRIGRAMS.len() {
        let t = ALL_TRIGRAMS[i];
        index[t.pattern() as usize] = t.id();
        i += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_sequential() {
        for (i, t) in ALL_TRIGRAMS.iter().enumerate() {
            assert_eq!(t.id() as usize, i);
        }
    }

    #[test]
    fn patterns_are_a_bijection() {
        let mut seen = [false; 8];
        for t in ALL_TRIGRAMS {
            assert!(!seen[t.pattern() as usize], "duplicate pattern for {}", t.name());
            seen[t.pattern() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn reverse_lookup_round_trips() {
        for t in ALL_TRIGRAMS {
            assert_eq!(Trigram::from_pattern(t.pattern()), t);
        }
    }

    #[test]
    fn from_id_normalizes_negative() {
        assert_eq!(Trigram::from_id(9), Trigram::Qian);
        assert_eq!(Trigram::from_id(8), Trigram::Kun);
        assert_eq!(Trigram::from_id(-1), Trigram::Gen);
        assert_eq!(Trigram::from_id(-8), Trigram::Kun);
    }

    #[test]
    fn dui_is_open_on_top() {
        assert!(Trigram::Dui.is_solid(1));
        assert!(Trigram::Dui.is_solid(2));
        assert!(!Trigram::Dui.is_solid(3));
        assert_eq!(Trigram::Dui.pattern_string(), "011");
    }

    #[test]
    fn flip_top_of_qian_gives_dui() {
        assert_eq!(Trigram::Qian.with_line_flipped(3), Trigram::Dui);
        assert_eq!(Trigram::Qian.with_line_flipped(1), Trigram::Xun);
        assert_eq!(Trigram::Qian.with_line_flipped(2), Trigram::Li);
    }

    #[test]
    fn flip_is_involution() {
        for t in ALL_TRIGRAMS {
            for p in 1..=3 {
                assert_eq!(t.with_line_flipped(p).with_line_flipped(p), t);
            }
        }
    }

    #[test]
    fn elements() {
        assert_eq!(Trigram::Qian.element(), Element::Metal);
        assert_eq!(Trigram::Kan.element(), Element::Water);
        assert_eq!(Trigram::Kun.element(), Element::Earth);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Trigram::from_name("離"), Some(Trigram::Li));
        assert_eq!(Trigram::from_name("gen"), Some(Trigram::Gen));
        assert_eq!(Trigram::from_name("?"), None);
    }
}
