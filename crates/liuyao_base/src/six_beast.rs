//! Six Beasts (六獸), assigned bottom to top starting from a Day Stem offset.

use serde::Serialize;

use crate::ganzhi::Stem;

/// The six beasts in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SixBeast {
    #[serde(rename = "青龍")]
    AzureDragon,
    #[serde(rename = "朱雀")]
    VermilionBird,
    #[serde(rename = "勾陳")]
    HookedSnake,
    #[serde(rename = "螣蛇")]
    FlyingSerpent,
    #[serde(rename = "白虎")]
    WhiteTiger,
    #[serde(rename = "玄武")]
    BlackTortoise,
}

/// All six beasts in cycle order (青龍 first).
pub const ALL_BEASTS: [SixBeast; 6] = [
    SixBeast::AzureDragon,
    SixBeast::VermilionBird,
    SixBeast::HookedSnake,
    SixBeast::FlyingSerpent,
    SixBeast::WhiteTiger,
    SixBeast::BlackTortoise,
];

impl SixBeast {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龍",
            Self::VermilionBird => "朱雀",
            Self::HookedSnake => "勾陳",
            Self::FlyingSerpent => "螣蛇",
            Self::WhiteTiger => "白虎",
            Self::BlackTortoise => "玄武",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::AzureDragon => "Azure Dragon",
            Self::VermilionBird => "Vermilion Bird",
            Self::HookedSnake => "Hooked Snake",
            Self::FlyingSerpent => "Flying Serpent",
            Self::WhiteTiger => "White Tiger",
            Self::BlackTortoise => "Black Tortoise",
        }
    }
}

/// Beast on line 1 for a Day Stem, as an offset into [`ALL_BEASTS`].
///
/// 甲乙 青龍, 丙丁 朱雀, 戊 勾陳, 己 螣蛇, 庚辛 白虎, 壬癸 玄武.
pub const fn beast_offset(day_stem: Stem) -> u8 {
    match day_stem {
        Stem::Jia | Stem::Yi => 0,
        Stem::Bing | Stem::Ding => 1,
        Stem::Wu => 2,
        Stem::Ji => 3,
        Stem::Geng | Stem::Xin => 4,
        Stem::Ren | Stem::Gui => 5,
    }
}

/// Beasts for lines 1..=6 (index 0 = line 1).
pub const fn six_beasts(day_stem: Stem) -> [SixBeast; 6] {
    let start = beast_offset(day_stem) as usize;
    let mut out = [SixBeast::AzureDragon; 6];
    let mut i = 0;
    while i < 6 {
        out[i] = ALL_BEASTS[(start + i) % 6];
        i += 1;
    }
    out
}
