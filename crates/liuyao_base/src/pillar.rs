//! Year, month, day and hour pillars (四柱) for a query moment.
//!
//! All four pillars are pure arithmetic on calendar fields:
//!
//! - Year: offset from 1984 (甲子).
//! - Month: month index from the fixed 節 table, stem from the year stem
//!   under the configured [`MonthRule`].
//! - Day: signed day count from 2000-01-01 (戊午).
//! - Hour: two-hour slot branch, stem by the five-rats rule.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::ganzhi::{Branch, Stem};
use crate::solar_term::{self, SolarTerm};
use crate::void::{VoidMethod, void_pair};

/// Year whose pillar is 甲子.
pub const YEAR_ANCHOR: i32 = 1984;

/// Stem and branch indices of the day-pillar anchor date.
pub const DAY_ANCHOR_STEM: i64 = 4;
/// Branch index of the day-pillar anchor date.
pub const DAY_ANCHOR_BRANCH: i64 = 6;

/// The day-pillar anchor, 2000-01-01 (戊午).
pub fn day_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Pillar
// ---------------------------------------------------------------------------

/// One stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    /// Heavenly stem.
    pub stem: Stem,
    /// Earthly branch.
    pub branch: Branch,
}

impl Pillar {
    /// Pillar from two signed indices, each normalized into range.
    pub const fn from_indices(stem: i64, branch: i64) -> Self {
        Self {
            stem: Stem::from_index(stem),
            branch: Branch::from_index(branch),
        }
    }

    /// Two-character label such as `戊午`.
    pub fn label(&self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

// ---------------------------------------------------------------------------
// Hour slot
// ---------------------------------------------------------------------------

/// Two-hour window index, 0 = 子 (23:00-01:00) .. 11 = 亥 (21:00-23:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HourSlot(u8);

impl HourSlot {
    /// Validated slot.
    pub fn new(slot: i64) -> Result<Self, BaseError> {
        if (0..12).contains(&slot) {
            Ok(Self(slot as u8))
        } else {
            Err(BaseError::InvalidHourSlot(slot))
        }
    }

    /// Slot containing a clock hour: 23 -> 0, otherwise ceil(h / 2) mod 12.
    pub fn from_clock_hour(hour: u32) -> Result<Self, BaseError> {
        match hour {
            23 => Ok(Self(0)),
            0..=22 => Ok(Self((hour.div_ceil(2) % 12) as u8)),
            _ => Err(BaseError::InvalidClockHour(hour)),
        }
    }

    /// Slot index 0..=11.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Branch ruling the slot.
    pub const fn branch(self) -> Branch {
        Branch::from_index(self.0 as i64)
    }

    /// Clock window, e.g. `23-01` or `01-03`.
    pub fn window(self) -> String {
        if self.0 == 0 {
            "23-01".to_string()
        } else {
            let start = self.0 as u32 * 2 - 1;
            format!("{:02}-{:02}", start, start + 2)
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Where the year pillar turns over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearBoundary {
    /// Gregorian new year.
    #[default]
    Calendar,
    /// 立春 (approximate Feb 4).
    SpringCommencement,
}

/// How the month pillar is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthRule {
    /// Calendar month from January (寅), stepped back before the month's 節.
    /// Stem start `(2 * (year stem index mod 5) + 1) mod 10`, 甲 = 0.
    #[default]
    CalendarMonth,
    /// Solar months from 立春 (寅) and the five-tigers stem start
    /// (甲己 丙寅, 乙庚 戊寅, 丙辛 庚寅, 丁壬 壬寅, 戊癸 甲寅).
    FiveTigers,
}

impl MonthRule {
    /// Month index (0 = 寅) of a calendar date.
    pub const fn month_index(self, month: u32, day: u32) -> u8 {
        match self {
            Self::CalendarMonth => solar_term::lunar_month_index(month, day),
            Self::FiveTigers => solar_term::solar_month_index(month, day),
        }
    }
}

/// Options for [`four_pillars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PillarConfig {
    /// Year turnover rule.
    pub year_boundary: YearBoundary,
    /// Month counting rule.
    pub month_rule: MonthRule,
    /// Void pair method.
    pub void_method: VoidMethod,
}

// ---------------------------------------------------------------------------
// Individual pillars
// ---------------------------------------------------------------------------

/// Year pillar for a pillar year (already adjusted for the boundary rule).
pub const fn year_pillar(year: i32) -> Pillar {
    let offset = year as i64 - YEAR_ANCHOR as i64;
    Pillar::from_indices(offset, offset)
}

/// Year used for the year pillar of `date` under `boundary`.
pub fn pillar_year(date: NaiveDate, boundary: YearBoundary) -> i32 {
    match boundary {
        YearBoundary::Calendar => date.year(),
        YearBoundary::SpringCommencement => {
            let spring = SolarTerm::StartOfSpring;
            if (date.month(), date.day()) < (spring.month(), spring.day()) {
                date.year() - 1
            } else {
                date.year()
            }
        }
    }
}

/// Signed day count from the anchor date.
pub fn day_offset(date: NaiveDate) -> i64 {
    date.signed_duration_since(day_anchor()).num_days()
}

/// Day pillar.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let offset = day_offset(date);
    Pillar::from_indices(DAY_ANCHOR_STEM + offset, DAY_ANCHOR_BRANCH + offset)
}

/// Stem of month index 0 (寅) in a year.
pub const fn first_month_stem(rule: MonthRule, year_stem: Stem) -> Stem {
    let start = (2 * (year_stem.index() as i64 % 5) + 1) % 10;
    match rule {
        MonthRule::CalendarMonth => Stem::from_index(start),
        MonthRule::FiveTigers => Stem::from_index(start + 1),
    }
}

/// Month pillar for a month index (0 = 寅) within a year stem.
pub const fn month_pillar(rule: MonthRule, year_stem: Stem, lunar_month: u8) -> Pillar {
    let start = first_month_stem(rule, year_stem).index() as i64;
    Pillar {
        stem: Stem::from_index(start + lunar_month as i64),
        branch: solar_term::month_branch(lunar_month),
    }
}

/// First hour stem of a day (the stem of its 子 hour).
///
/// Five rats: 甲己 甲子, 乙庚 丙子, 丙辛 戊子, 丁壬 庚子, 戊癸 壬子.
pub const fn first_hour_stem(day_stem: Stem) -> Stem {
    Stem::from_index(2 * (day_stem.index() as i64 % 5))
}

/// Hour pillar.
pub const fn hour_pillar(day_stem: Stem, slot: HourSlot) -> Pillar {
    let start = first_hour_stem(day_stem).index() as i64;
    Pillar {
        stem: Stem::from_index(start + slot.index() as i64),
        branch: slot.branch(),
    }
}

// ---------------------------------------------------------------------------
// Four pillars
// ---------------------------------------------------------------------------

/// The temporal signature of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    /// Year pillar.
    pub year: Pillar,
    /// Month pillar.
    pub month: Pillar,
    /// Day pillar.
    pub day: Pillar,
    /// Hour pillar.
    pub hour: Pillar,
    /// Month index under the configured rule, 0 = 寅.
    pub lunar_month: u8,
    /// Most recent solar term.
    pub solar_term: SolarTerm,
    /// The two void branches for the day.
    pub void: [Branch; 2],
}

impl FourPillars {
    /// Whether a branch is void for this day.
    pub fn is_void(&self, branch: Branch) -> bool {
        self.void.contains(&branch)
    }
}

/// Compute all four pillars and the void pair.
pub fn four_pillars(date: NaiveDate, slot: HourSlot, config: &PillarConfig) -> FourPillars {
    let year = year_pillar(pillar_year(date, config.year_boundary));
    let lunar_month = config.month_rule.month_index(date.month(), date.day());
    let month = month_pillar(config.month_rule, year.stem, lunar_month);
    let day = day_pillar(date);
    let hour = hour_pillar(day.stem, slot);
    FourPillars {
        year,
        month,
        day,
        hour,
        lunar_month,
        solar_term: solar_term::current_term(date.month(), date.day()),
        void: void_pair(config.void_method, day.stem, day.branch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_STEMS;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_day_is_wu_wu() {
        let p = day_pillar(date(2000, 1, 1));
        assert_eq!((p.stem.index(), p.branch.index()), (4, 6));
        assert_eq!(p.label(), "戊午");
    }

    #[test]
    fn day_before_anchor_normalizes() {
        let p = day_pillar(date(1999, 12, 31));
        assert_eq!(p.label(), "丁巳");
        let p = day_pillar(date(1999, 12, 27));
        assert_eq!(p.label(), "癸丑");
    }

    #[test]
    fn sixty_day_cycle() {
        assert_eq!(day_pillar(date(2000, 3, 1)), day_pillar(date(2000, 1, 1)));
        assert_eq!(day_offset(date(2000, 3, 1)), 60);
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(1984).label(), "甲子");
        assert_eq!(year_pillar(2024).label(), "甲辰");
        assert_eq!(year_pillar(2025).label(), "乙巳");
        assert_eq!(year_pillar(1983).label(), "癸亥");
    }

    #[test]
    fn calendar_month_stems() {
        let expected = ["乙", "丁", "己", "辛", "癸"];
        for stem in ALL_STEMS {
            let first = first_month_stem(MonthRule::CalendarMonth, stem);
            assert_eq!(first.name(), expected[stem.index() as usize % 5], "{}", stem.name());
        }
        // (2 * (0 mod 5) + 1) mod 10 = 1
        assert_eq!(first_month_stem(MonthRule::CalendarMonth, Stem::Jia).index(), 1);
        assert_eq!(month_pillar(MonthRule::CalendarMonth, Stem::Jia, 0).label(), "乙寅");
        assert_eq!(month_pillar(MonthRule::CalendarMonth, Stem::Jia, 2).label(), "丁辰");
    }

    #[test]
    fn five_tigers() {
        let expected = ["丙", "戊", "庚", "壬", "甲"];
        for stem in ALL_STEMS {
            let first = first_month_stem(MonthRule::FiveTigers, stem);
            assert_eq!(first.name(), expected[stem.index() as usize % 5], "{}", stem.name());
        }
        assert_eq!(month_pillar(MonthRule::FiveTigers, Stem::Jia, 0).label(), "丙寅");
        assert_eq!(month_pillar(MonthRule::FiveTigers, Stem::Jia, 11).label(), "丁丑");
    }

    #[test]
    fn five_rats() {
        let zi = HourSlot::new(0).unwrap();
        assert_eq!(hour_pillar(Stem::Jia, zi).label(), "甲子");
        assert_eq!(hour_pillar(Stem::Yi, zi).label(), "丙子");
        assert_eq!(hour_pillar(Stem::Wu, zi).label(), "壬子");
        let hai = HourSlot::new(11).unwrap();
        assert_eq!(hour_pillar(Stem::Ji, hai).label(), "乙亥");
    }

    #[test]
    fn hour_slot_validation() {
        assert!(HourSlot::new(12).is_err());
        assert_eq!(HourSlot::new(-1), Err(BaseError::InvalidHourSlot(-1)));
        assert_eq!(HourSlot::from_clock_hour(23).unwrap().index(), 0);
        assert_eq!(HourSlot::from_clock_hour(0).unwrap().index(), 0);
        assert_eq!(HourSlot::from_clock_hour(1).unwrap().index(), 1);
        assert_eq!(HourSlot::from_clock_hour(2).unwrap().index(), 1);
        assert_eq!(HourSlot::from_clock_hour(22).unwrap().index(), 11);
        assert!(HourSlot::from_clock_hour(24).is_err());
    }

    #[test]
    fn hour_slot_windows() {
        assert_eq!(HourSlot::new(0).unwrap().window(), "23-01");
        assert_eq!(HourSlot::new(1).unwrap().window(), "01-03");
        assert_eq!(HourSlot::new(11).unwrap().window(), "21-23");
    }

    #[test]
    fn spring_commencement_boundary() {
        let before = date(2024, 2, 3);
        let after = date(2024, 2, 4);
        assert_eq!(pillar_year(before, YearBoundary::Calendar), 2024);
        assert_eq!(pillar_year(before, YearBoundary::SpringCommencement), 2023);
        assert_eq!(pillar_year(after, YearBoundary::SpringCommencement), 2024);
    }

    #[test]
    fn four_pillars_default_config() {
        let fp = four_pillars(date(2024, 3, 10), HourSlot::new(6).unwrap(), &PillarConfig::default());
        assert_eq!(fp.year.label(), "甲辰");
        // March after 驚蟄 is month index 2
        assert_eq!(fp.lunar_month, 2);
        assert_eq!(fp.month.label(), "丁辰");
        assert_eq!(fp.solar_term, SolarTerm::AwakeningOfInsects);
        assert_eq!(fp.hour.branch, Branch::Wu);
        assert_eq!(fp.void, crate::void::void_branches(fp.day.branch));
    }

    #[test]
    fn four_pillars_five_tigers() {
        let config = PillarConfig {
            month_rule: MonthRule::FiveTigers,
            ..PillarConfig::default()
        };
        let fp = four_pillars(date(2024, 3, 10), HourSlot::new(6).unwrap(), &config);
        // 驚蟄 passed: 卯 month of a 甲 year
        assert_eq!(fp.lunar_month, 1);
        assert_eq!(fp.month.label(), "丁卯");
    }
}
