//! Question topics and the relative each one looks for (用神).

use std::str::FromStr;

use liuyao_base::SixRelative;
use serde::{Deserialize, Serialize};

use crate::error::ReadingError;

/// What the question is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "財運")]
    Wealth,
    #[serde(rename = "感情")]
    Romance,
    #[serde(rename = "事業")]
    Career,
    #[serde(rename = "官司")]
    Litigation,
    #[serde(rename = "健康")]
    Health,
    #[serde(rename = "學業")]
    Study,
    #[serde(rename = "出行")]
    Travel,
}

/// All topics in menu order.
pub const ALL_TOPICS: [Topic; 7] = [
    Topic::Wealth,
    Topic::Romance,
    Topic::Career,
    Topic::Health,
    Topic::Study,
    Topic::Litigation,
    Topic::Travel,
];

impl Topic {
    /// Chinese keyword.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wealth => "財運",
            Self::Romance => "感情",
            Self::Career => "事業",
            Self::Litigation => "官司",
            Self::Health => "健康",
            Self::Study => "學業",
            Self::Travel => "出行",
        }
    }

    /// Lowercase English keyword.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wealth => "wealth",
            Self::Romance => "romance",
            Self::Career => "career",
            Self::Litigation => "litigation",
            Self::Health => "health",
            Self::Study => "study",
            Self::Travel => "travel",
        }
    }

    /// The relative that stands for the matter asked about.
    pub const fn useful_spirit(self) -> SixRelative {
        match self {
            Self::Wealth | Self::Romance => SixRelative::Wealth,
            Self::Career | Self::Litigation => SixRelative::Official,
            Self::Health | Self::Study | Self::Travel => SixRelative::Parent,
        }
    }
}

impl FromStr for Topic {
    type Err = ReadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_TOPICS
            .iter()
            .copied()
            .find(|t| t.name() == trimmed || t.english_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ReadingError::UnknownTopic(trimmed.to_string()))
    }
}

/// Lenient topic lookup: unknown keywords, `其他` and blank input give `None`.
pub fn topic_from_keyword(keyword: &str) -> Option<Topic> {
    keyword.parse().ok()
}
