//! Five Elements (五行) and their generative/destructive cycles.
//!
//! Generation: 木→火→土→金→水→木. Destruction: 木→土→水→火→金→木.
//! The interaction matrix is directional: `element_interaction(me, other)`
//! answers "what does `me` do to `other`".

use serde::Serialize;

use crate::ganzhi::Branch;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "水")]
    Water,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
}

/// All 5 elements in table order (金木水火土).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Fire,
    Element::Earth,
];

impl Element {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Metal => "Metal",
            Self::Wood => "Wood",
            Self::Water => "Water",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
        }
    }

    /// 0-based table index (金=0, 木=1, 水=2, 火=3, 土=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The element this one generates.
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes.
    pub const fn overcomes(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }
}

/// Element of each branch.
///
/// 子亥水, 寅卯木, 巳午火, 申酉金, 辰戌丑未土.
pub const fn branch_element(branch: Branch) -> Element {
    match branch {
        Branch::Zi | Branch::Hai => Element::Water,
        Branch::Yin | Branch::Mao => Element::Wood,
        Branch::Si | Branch::Wu => Element::Fire,
        Branch::Shen | Branch::You => Element::Metal,
        Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Element::Earth,
    }
}

/// How one element acts upon another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementInteraction {
    /// Same element (比和).
    #[serde(rename = "比和")]
    Peer,
    /// `me` generates `other` (生).
    #[serde(rename = "生")]
    Generates,
    /// `me` overcomes `other` (剋).
    #[serde(rename = "剋")]
    Overcomes,
    /// `other` generates `me` (被生).
    #[serde(rename = "被生")]
    GeneratedBy,
    /// `other` overcomes `me` (被剋).
    #[serde(rename = "被剋")]
    OvercomeBy,
}

impl ElementInteraction {
    /// Chinese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "比和",
            Self::Generates => "生",
            Self::Overcomes => "剋",
            Self::GeneratedBy => "被生",
            Self::OvercomeBy => "被剋",
        }
    }

    /// The same relation seen from the other side.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Peer => Self::Peer,
            Self::Generates => Self::GeneratedBy,
            Self::GeneratedBy => Self::Generates,
            Self::Overcomes => Self::OvercomeBy,
            Self::OvercomeBy => Self::Overcomes,
        }
    }
}

use ElementInteraction::{Generates as G, GeneratedBy as GB, OvercomeBy as OB, Overcomes as O, Peer as P};

/// Row = `me`, column = `other`, both in [`ALL_ELEMENTS`] order.
const INTERACTION_MATRIX: [[ElementInteraction; 5]; 5] = [
    //  金  木  水  火  土
    [P, O, G, OB, GB],  // 金
    [OB, P, GB, G, O],  // 木
    [GB, G, P, O, OB],  // 水
    [O, GB, OB, P, G],  // 火
    [G, OB, O, GB, P],  // 土
];

/// Directional interaction of `me` upon `other`.
pub const fn element_interaction(me: Element, other: Element) -> ElementInteraction {
    INTERACTION_MATRIX[me.index() as usize][other.index() as usize]
}
