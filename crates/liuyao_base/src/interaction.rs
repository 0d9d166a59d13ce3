//! Branch interactions (刑沖合) between a moving line and its change.
//!
//! Rules are checked in fixed priority order and the first match wins:
//! clash, six-combination, triple-combination, punishment, then
//! self-punishment. All pair rules are symmetric.

use serde::Serialize;

use crate::element::Element;
use crate::ganzhi::Branch::{self, *};

/// Special relationship between an original and a transformed branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub enum BranchInteraction {
    /// Opposite branches (六沖).
    SixClash,
    /// Paired combination (六合).
    SixCombination,
    /// Both branches in one of the four triple frames (三合局).
    TripleCombination {
        /// Element of the frame.
        element: Element,
    },
    /// Mutual punishment (相刑).
    Punishment,
    /// 子卯 punishment (無禮之刑).
    RudePunishment,
    /// A branch punishing itself (自刑).
    SelfPunishment,
}

impl BranchInteraction {
    /// Chinese label, e.g. `六沖` or `三合水局`.
    pub fn label(self) -> &'static str {
        match self {
            Self::SixClash => "六沖",
            Self::SixCombination => "六合",
            Self::TripleCombination { element } => match element {
                Element::Water => "三合水局",
                Element::Wood => "三合木局",
                Element::Fire => "三合火局",
                Element::Metal => "三合金局",
                Element::Earth => "三合土局",
            },
            Self::Punishment => "相刑",
            Self::RudePunishment => "無禮之刑",
            Self::SelfPunishment => "自刑",
        }
    }

    /// Whether the interaction is a clash.
    pub fn is_clash(self) -> bool {
        matches!(self, Self::SixClash)
    }

    /// Whether the interaction is a combination of any kind.
    pub fn is_combination(self) -> bool {
        matches!(self, Self::SixCombination | Self::TripleCombination { .. })
    }
}

const SIX_CLASHES: [(Branch, Branch); 6] = [
    (Zi, Wu),
    (Chou, Wei),
    (Yin, Shen),
    (Mao, You),
    (Chen, Xu),
    (Si, Hai),
];

const SIX_COMBINATIONS: [(Branch, Branch); 6] = [
    (Zi, Chou),
    (Yin, Hai),
    (Mao, Xu),
    (Chen, You),
    (Si, Shen),
    (Wu, Wei),
];

const TRIPLE_FRAMES: [([Branch; 3], Element); 4] = [
    ([Shen, Zi, Chen], Element::Water),
    ([Hai, Mao, Wei], Element::Wood),
    ([Yin, Wu, Xu], Element::Fire),
    ([Si, You, Chou], Element::Metal),
];

const PUNISHMENTS: [(Branch, Branch, BranchInteraction); 7] = [
    (Yin, Si, BranchInteraction::Punishment),
    (Si, Shen, BranchInteraction::Punishment),
    (Shen, Yin, BranchInteraction::Punishment),
    (Chou, Xu, BranchInteraction::Punishment),
    (Xu, Wei, BranchInteraction::Punishment),
    (Wei, Chou, BranchInteraction::Punishment),
    (Zi, Mao, BranchInteraction::RudePunishment),
];

const SELF_PUNISHING: [Branch; 4] = [Chen, Wu, You, Hai];

fn is_pair(a: Branch, b: Branch, pair: (Branch, Branch)) -> bool {
    (a, b) == pair || (b, a) == pair
}

/// Whether two branches clash (六沖).
pub fn is_clash(a: Branch, b: Branch) -> bool {
    SIX_CLASHES.iter().any(|p| is_pair(a, b, *p))
}

/// Whether two branches form a six-combination (六合).
pub fn is_six_combination(a: Branch, b: Branch) -> bool {
    SIX_COMBINATIONS.iter().any(|p| is_pair(a, b, *p))
}

/// Element of the triple frame holding two distinct branches, if any.
pub fn triple_frame(a: Branch, b: Branch) -> Option<Element> {
    if a == b {
        return None;
    }
    TRIPLE_FRAMES
        .iter()
        .find(|(members, _)| members.contains(&a) && members.contains(&b))
        .map(|(_, element)| *element)
}

/// Classify how `changed` relates to `original`.
pub fn branch_interaction(original: Branch, changed: Branch) -> Option<BranchInteraction> {
    if is_clash(original, changed) {
        return Some(BranchInteraction::SixClash);
    }
    if is_six_combination(original, changed) {
        return Some(BranchInteraction::SixCombination);
    }
    if let Some(element) = triple_frame(original, changed) {
        return Some(BranchInteraction::TripleCombination { element });
    }
    if let Some((_, _, kind)) = PUNISHMENTS
        .iter()
        .find(|(a, b, _)| is_pair(original, changed, (*a, *b)))
    {
        return Some(*kind);
    }
    if original == changed && SELF_PUNISHING.contains(&original) {
        return Some(BranchInteraction::SelfPunishment);
    }
    None
}
