//! Void (空亡) branches of the current ten-day cycle.
//!
//! Two methods are provided. [`void_branches`] keys a fixed 12-entry
//! table on the Day Branch alone. [`xun_void_branches`] locates the full
//! Day pillar in its ten-day cycle (旬): the two branches left unpaired by
//! the cycle's ten stems are void.

use serde::{Deserialize, Serialize};

use crate::ganzhi::Branch::{self, *};
use crate::ganzhi::Stem;

/// Day Branch -> void pair, indexed by branch index.
const VOID_TABLE: [[Branch; 2]; 12] = [
    [Xu, Hai],    // 子
    [Xu, Hai],    // 丑
    [Zi, Chou],   // 寅
    [Zi, Chou],   // 卯
    [Yin, Mao],   // 辰
    [Yin, Mao],   // 巳
    [Chen, Si],   // 午
    [Chen, Si],   // 未
    [Wu, Wei],    // 申
    [Wu, Wei],    // 酉
    [Shen, You],  // 戌
    [Shen, You],  // 亥
];

/// How the void pair is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoidMethod {
    /// Fixed table keyed on the Day Branch only.
    #[default]
    BranchTable,
    /// Ten-day cycle of the full Day pillar.
    Xun,
}

/// Void pair for a Day Branch from the fixed table.
pub const fn void_branches(day_branch: Branch) -> [Branch; 2] {
    VOID_TABLE[day_branch.index() as usize]
}

/// Head branch of the ten-day cycle containing a Day pillar (the branch
/// paired with 甲).
pub const fn xun_head(day_stem: Stem, day_branch: Branch) -> Branch {
    Branch::from_index(day_branch.index() as i64 - day_stem.index() as i64)
}

/// Void pair from the ten-day cycle of a Day pillar.
pub const fn xun_void_branches(day_stem: Stem, day_branch: Branch) -> [Branch; 2] {
    let head = xun_head(day_stem, day_branch).index() as i64;
    [Branch::from_index(head + 10), Branch::from_index(head + 11)]
}

/// Void pair by the chosen method.
pub const fn void_pair(method: VoidMethod, day_stem: Stem, day_branch: Branch) -> [Branch; 2] {
    match method {
        VoidMethod::BranchTable => void_branches(day_branch),
        VoidMethod::Xun => xun_void_branches(day_stem, day_branch),
    }
}

/// Whether `branch` is one of the void pair.
pub fn is_void(pair: &[Branch; 2], branch: Branch) -> bool {
    pair.contains(&branch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_BRANCHES;

    #[test]
    fn zi_day_voids_xu_hai() {
        assert_eq!(void_branches(Zi), [Xu, Hai]);
    }

    #[test]
    fn pairs_are_distinct_and_adjacent() {
        for b in ALL_BRANCHES {
            let [a, c] = void_branches(b);
            assert_ne!(a, c);
            assert_eq!((a.index() + 1) % 12, c.index());
        }
    }

    #[test]
    fn xun_heads() {
        assert_eq!(xun_head(Stem::Jia, Zi), Zi);
        assert_eq!(xun_head(Stem::Gui, You), Zi);
        assert_eq!(xun_head(Stem::Wu, Wu), Yin);
    }

    #[test]
    fn xun_voids() {
        // 甲子旬 voids 戌亥
        assert_eq!(xun_void_branches(Stem::Jia, Zi), [Xu, Hai]);
        // 戊午 falls in 甲寅旬, void 子丑
        assert_eq!(xun_void_branches(Stem::Wu, Wu), [Zi, Chou]);
        // 甲戌旬 voids 申酉
        assert_eq!(xun_void_branches(Stem::Yi, Hai), [Shen, You]);
    }

    #[test]
    fn method_dispatch() {
        assert_eq!(void_pair(VoidMethod::BranchTable, Stem::Wu, Wu), [Chen, Si]);
        assert_eq!(void_pair(VoidMethod::Xun, Stem::Wu, Wu), [Zi, Chou]);
    }

    #[test]
    fn membership() {
        let pair = void_branches(Zi);
        assert!(is_void(&pair, Hai));
        assert!(!is_void(&pair, Zi));
    }
}
