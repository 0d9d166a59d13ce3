//! Types for annotated readings.

use chrono::NaiveDate;
use liuyao_base::{
    Branch, BranchInteraction, Element, ElementInteraction, FourPillars, Hexagram, HexagramText,
    HourSlot, LinePosition, MonthRule, PalaceInfo, PillarConfig, Polarity, SixBeast,
    SixRelative, VoidMethod, YearBoundary,
};
use serde::{Deserialize, Serialize};

use crate::topic::Topic;

/// Options for computing a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReadingConfig {
    /// Where the year pillar turns over.
    pub year_boundary: YearBoundary,
    /// How the month pillar is counted.
    pub month_rule: MonthRule,
    /// How the void pair is derived.
    pub void_method: VoidMethod,
}

impl ReadingConfig {
    /// Pillar options carried by this config.
    pub const fn pillar_config(&self) -> PillarConfig {
        PillarConfig {
            year_boundary: self.year_boundary,
            month_rule: self.month_rule,
            void_method: self.void_method,
        }
    }
}

/// A hexagram together with its table text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramSummary {
    /// Trigram pair.
    pub hexagram: Hexagram,
    /// Name, judgment and line texts.
    pub text: HexagramText,
}

impl HexagramSummary {
    /// Look up the text for a hexagram.
    pub fn new(hexagram: Hexagram) -> Self {
        Self {
            text: hexagram.text(),
            hexagram,
        }
    }

    /// Table name, e.g. `乾為天`.
    pub fn name(&self) -> &str {
        &self.text.name
    }
}

/// What the moving line changes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangedLine {
    /// Polarity after the flip.
    pub polarity: Polarity,
    /// Na-Jia branch taken from the transformed hexagram.
    pub branch: Branch,
    /// Element of the new branch.
    pub element: Element,
    /// Relative of the new element to the original palace element.
    pub relative: SixRelative,
    /// How the new element acts on the original line's element.
    pub interaction: ElementInteraction,
    /// Clash, combination or punishment between the two branches.
    pub branch_interaction: Option<BranchInteraction>,
}

/// One fully annotated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnnotatedLine {
    /// Position 1 (bottom) ..= 6 (top).
    pub position: LinePosition,
    pub polarity: Polarity,
    pub branch: Branch,
    pub element: Element,
    /// Relative of the line's element to the palace element.
    pub relative: SixRelative,
    pub beast: SixBeast,
    /// World (世) line.
    pub is_world: bool,
    /// Response (應) line.
    pub is_response: bool,
    pub is_moving: bool,
    /// Branch is in the day's void pair.
    pub is_void: bool,
    /// Relative matches the topic's useful spirit.
    pub is_useful_spirit: bool,
    /// Present on the moving line only.
    pub changed: Option<ChangedLine>,
}

impl AnnotatedLine {
    /// Markers in display order: 世, 應, 空.
    pub fn markers(&self) -> String {
        let mut out = String::new();
        if self.is_world {
            out.push('世');
        }
        if self.is_response {
            out.push('應');
        }
        if self.is_void {
            out.push('空');
        }
        out
    }
}

/// A complete reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    /// The three numbers as cast.
    pub numbers: [i64; 3],
    /// Query date.
    pub date: NaiveDate,
    /// Query hour slot.
    pub hour_slot: HourSlot,
    /// Hexagram picked by the first two numbers.
    pub original: HexagramSummary,
    /// Hexagram after the moving line flips.
    pub transformed: HexagramSummary,
    /// Palace of the original hexagram; rules all six relatives.
    pub palace: PalaceInfo,
    /// Palace of the transformed hexagram, for display.
    pub transformed_palace: PalaceInfo,
    /// Lines, index 0 = line 1.
    pub lines: [AnnotatedLine; 6],
    pub moving_line: LinePosition,
    /// Original hexagram's text for the moving line, empty when absent.
    pub moving_line_text: &'static str,
    pub pillars: FourPillars,
    pub topic: Option<Topic>,
    /// Relative looked for by the topic.
    pub useful_spirit: Option<SixRelative>,
}

impl Reading {
    /// The moving line.
    pub fn moving(&self) -> &AnnotatedLine {
        &self.lines[self.moving_line.index()]
    }

    /// The World line.
    pub fn world(&self) -> &AnnotatedLine {
        &self.lines[(self.palace.world.clamp(1, 6) - 1) as usize]
    }

    /// The Response line.
    pub fn response(&self) -> &AnnotatedLine {
        &self.lines[(self.palace.response.clamp(1, 6) - 1) as usize]
    }

    /// Lines from the top (line 6) down, the order they are drawn in.
    pub fn lines_top_down(&self) -> impl Iterator<Item = &AnnotatedLine> {
        self.lines.iter().rev()
    }

    /// Lines carrying the useful spirit.
    pub fn useful_spirit_lines(&self) -> impl Iterator<Item = &AnnotatedLine> {
        self.lines.iter().filter(|l| l.is_useful_spirit)
    }
}
