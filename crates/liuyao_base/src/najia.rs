//! Na-Jia (納甲) branch assignment.
//!
//! Each trigram contributes three branches when it sits in the inner
//! (lower) position and a different three when it sits in the outer
//! (upper) position. Lists run bottom to top.

use crate::ganzhi::Branch::{self, *};
use crate::trigram::Trigram;

/// Inner/outer branch triples of one trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaJia {
    /// Branches for lines 1..=3 when the trigram is the lower trigram.
    pub inner: [Branch; 3],
    /// Branches for lines 4..=6 when the trigram is the upper trigram.
    pub outer: [Branch; 3],
}

/// Na-Jia table indexed by trigram id.
const NAJIA_TABLE: [NaJia; 8] = [
    // 0 坤
    NaJia { inner: [Wei, Si, Mao], outer: [Chou, Hai, You] },
    // 1 乾
    NaJia { inner: [Zi, Yin, Chen], outer: [Wu, Shen, Xu] },
    // 2 兌
    NaJia { inner: [Si, Mao, Chou], outer: [Hai, You, Wei] },
    // 3 離
    NaJia { inner: [Mao, Chou, Hai], outer: [You, Wei, Si] },
    // 4 震
    NaJia { inner: [Zi, Yin, Chen], outer: [Wu, Shen, Xu] },
    // 5 巽
    NaJia { inner: [Chou, Hai, You], outer: [Wei, Si, Mao] },
    // 6 坎
    NaJia { inner: [Yin, Chen, Wu], outer: [Shen, Xu, Zi] },
    // 7 艮
    NaJia { inner: [Chen, Wu, Shen], outer: [Xu, Zi, Yin] },
];

/// Na-Jia entry for a trigram.
pub const fn najia(trigram: Trigram) -> NaJia {
    NAJIA_TABLE[trigram.id() as usize]
}

/// Branches of all six lines (index 0 = line 1) for a stacked pair.
pub const fn hexagram_branches(upper: Trigram, lower: Trigram) -> [Branch; 6] {
    let inner = najia(lower).inner;
    let outer = najia(upper).outer;
    [inner[0], inner[1], inner[2], outer[0], outer[1], outer[2]]
}
