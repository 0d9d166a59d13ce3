//! Six relatives (六親).
//!
//! A line's relative is the Element-cycle position of its element as seen
//! from the palace element: the palace is always the subject.

use serde::Serialize;

use crate::element::{Element, ElementInteraction, element_interaction};

/// The five relative categories (traditionally called "six relatives").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SixRelative {
    /// Same element as the palace (兄弟).
    #[serde(rename = "兄弟")]
    Sibling,
    /// Generated by the palace (子孫).
    #[serde(rename = "子孫")]
    Offspring,
    /// Overcome by the palace (妻財).
    #[serde(rename = "妻財")]
    Wealth,
    /// Overcomes the palace (官鬼).
    #[serde(rename = "官鬼")]
    Official,
    /// Generates the palace (父母).
    #[serde(rename = "父母")]
    Parent,
}

/// All relatives in traditional listing order.
pub const ALL_RELATIVES: [SixRelative; 5] = [
    SixRelative::Parent,
    SixRelative::Sibling,
    SixRelative::Offspring,
    SixRelative::Wealth,
    SixRelative::Official,
];

impl SixRelative {
    /// Chinese label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sibling => "兄弟",
            Self::Offspring => "子孫",
            Self::Wealth => "妻財",
            Self::Official => "官鬼",
            Self::Parent => "父母",
        }
    }

    /// English label.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Sibling => "Sibling",
            Self::Offspring => "Offspring",
            Self::Wealth => "Wealth",
            Self::Official => "Official",
            Self::Parent => "Parent",
        }
    }

    /// Relative for a given palace-upon-line element interaction.
    pub const fn from_interaction(interaction: ElementInteraction) -> Self {
        match interaction {
            ElementInteraction::Peer => Self::Sibling,
            ElementInteraction::Generates => Self::Offspring,
            ElementInteraction::Overcomes => Self::Wealth,
            ElementInteraction::GeneratedBy => Self::Parent,
            ElementInteraction::OvercomeBy => Self::Official,
        }
    }
}

/// Relative of a line element with respect to the palace element.
pub const fn six_relative(palace: Element, line: Element) -> SixRelative {
    SixRelative::from_interaction(element_interaction(palace, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ALL_ELEMENTS;

    #[test]
    fn self_relation_is_sibling() {
        for e in ALL_ELEMENTS {
            assert_eq!(six_relative(e, e), SixRelative::Sibling);
        }
    }

    #[test]
    fn metal_palace_row() {
        use Element::*;
        assert_eq!(six_relative(Metal, Wood), SixRelative::Wealth);
        assert_eq!(six_relative(Metal, Water), SixRelative::Offspring);
        assert_eq!(six_relative(Metal, Fire), SixRelative::Official);
        assert_eq!(six_relative(Metal, Earth), SixRelative::Parent);
    }

    #[test]
    fn each_palace_sees_all_five() {
        for palace in ALL_ELEMENTS {
            let mut seen: Vec<SixRelative> =
                ALL_ELEMENTS.iter().map(|e| six_relative(palace, *e)).collect();
            seen.sort_by_key(|r| r.name());
            seen.dedup();
            assert_eq!(seen.len(), 5);
        }
    }

    #[test]
    fn earth_palace_row() {
        use Element::*;
        assert_eq!(six_relative(Earth, Metal), SixRelative::Offspring);
        assert_eq!(six_relative(Earth, Wood), SixRelative::Official);
        assert_eq!(six_relative(Earth, Water), SixRelative::Wealth);
        assert_eq!(six_relative(Earth, Fire), SixRelative::Parent);
    }
}
