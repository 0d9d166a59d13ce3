//! Heavenly Stems (天干) and Earthly Branches (地支).
//!
//! The two cyclic symbol sets of the Stem-Branch calendar: 10 stems and
//! 12 branches. Both are indexed from 0 (甲, 子) and every signed offset
//! wraps with Euclidean remainder, so arithmetic on pillars never needs
//! to special-case negative day counts.

use serde::Serialize;

use crate::element::Element;

/// The 10 Heavenly Stems, starting from 甲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

/// All 10 stems in cycle order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at any signed cycle position, wrapped into [0, 10).
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Odd-numbered stems (甲丙戊庚壬) are yang.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Element of the stem: 甲乙木 丙丁火 戊己土 庚辛金 壬癸水.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Look up a stem by its Chinese character.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_STEMS.iter().copied().find(|s| s.name() == name)
    }
}

/// The 12 Earthly Branches, starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// All 12 branches in cycle order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanization.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at any signed cycle position, wrapped into [0, 12).
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Element of the branch (see [`crate::element::branch_element`]).
    pub const fn element(self) -> Element {
        crate::element::branch_element(self)
    }

    /// Look up a branch by its Chinese character or pinyin.
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name() == trimmed || b.pinyin().eq_ignore_ascii_case(trimmed))
    }
}

/// Position in the 60-term sexagenary cycle for a stem/branch pair.
///
/// Returns `None` for mismatched parity (a yang stem never pairs with a
/// yin branch), otherwise the 0-based position (甲子=0 .. 癸亥=59).
pub const fn sexagenary_index(stem: Stem, branch: Branch) -> Option<u8> {
    let s = stem.index() as i64;
    let b = branch.index() as i64;
    if (s - b).rem_euclid(2) != 0 {
        return None;
    }
    // x ≡ s (mod 10), x ≡ b (mod 12)  =>  x = s + 10k with 10k ≡ b - s (mod 12)
    let mut k = 0;
    while k < 6 {
        let x = s + 10 * k;
        if x % 12 == b {
            return Some(x as u8);
        }
        k += 1;
    }
    None
}
