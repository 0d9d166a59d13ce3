//! The 24 solar terms (節氣) on fixed approximate calendar dates.
//!
//! Each Gregorian month holds one 節 (jie) and one 氣 (qi). The 節 marks
//! the start of a solar month, so month pillars turn on the 節 dates. The
//! dates are fixed calendar approximations and can be off by a day from
//! the true solar longitude crossing in a given year.

use serde::Serialize;

use crate::ganzhi::Branch;

/// One of the 24 solar terms, in calendar order from 小寒.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    #[serde(rename = "小寒")]
    MinorCold,
    #[serde(rename = "大寒")]
    MajorCold,
    #[serde(rename = "立春")]
    StartOfSpring,
    #[serde(rename = "雨水")]
    RainWater,
    #[serde(rename = "驚蟄")]
    AwakeningOfInsects,
    #[serde(rename = "春分")]
    SpringEquinox,
    #[serde(rename = "清明")]
    PureBrightness,
    #[serde(rename = "穀雨")]
    GrainRain,
    #[serde(rename = "立夏")]
    StartOfSummer,
    #[serde(rename = "小滿")]
    GrainBuds,
    #[serde(rename = "芒種")]
    GrainInEar,
    #[serde(rename = "夏至")]
    SummerSolstice,
    #[serde(rename = "小暑")]
    MinorHeat,
    #[serde(rename = "大暑")]
    MajorHeat,
    #[serde(rename = "立秋")]
    StartOfAutumn,
    #[serde(rename = "處暑")]
    EndOfHeat,
    #[serde(rename = "白露")]
    WhiteDew,
    #[serde(rename = "秋分")]
    AutumnEquinox,
    #[serde(rename = "寒露")]
    ColdDew,
    #[serde(rename = "霜降")]
    FrostDescent,
    #[serde(rename = "立冬")]
    StartOfWinter,
    #[serde(rename = "小雪")]
    MinorSnow,
    #[serde(rename = "大雪")]
    MajorSnow,
    #[serde(rename = "冬至")]
    WinterSolstice,
}

/// All 24 terms in calendar order (index 0 = 小寒, early January).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::PureBrightness,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
];

/// Approximate day of month for (jie, qi), indexed by month - 1.
const TERM_DAYS: [(u32, u32); 12] = [
    (6, 20), // Jan 小寒 大寒
    (4, 19), // Feb 立春 雨水
    (6, 21), // Mar 驚蟄 春分
    (5, 20), // Apr 清明 穀雨
    (6, 21), // May 立夏 小滿
    (6, 22), // Jun 芒種 夏至
    (7, 23), // Jul 小暑 大暑
    (8, 23), // Aug 立秋 處暑
    (8, 23), // Sep 白露 秋分
    (8, 24), // Oct 寒露 霜降
    (8, 22), // Nov 立冬 小雪
    (7, 22), // Dec 大雪 冬至
];

impl SolarTerm {
    /// Index in calendar order (0 = 小寒).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MinorCold => "小寒",
            Self::MajorCold => "大寒",
            Self::StartOfSpring => "立春",
            Self::RainWater => "雨水",
            Self::AwakeningOfInsects => "驚蟄",
            Self::SpringEquinox => "春分",
            Self::PureBrightness => "清明",
            Self::GrainRain => "穀雨",
            Self::StartOfSummer => "立夏",
            Self::GrainBuds => "小滿",
            Self::GrainInEar => "芒種",
            Self::SummerSolstice => "夏至",
            Self::MinorHeat => "小暑",
            Self::MajorHeat => "大暑",
            Self::StartOfAutumn => "立秋",
            Self::EndOfHeat => "處暑",
            Self::WhiteDew => "白露",
            Self::AutumnEquinox => "秋分",
            Self::ColdDew => "寒露",
            Self::FrostDescent => "霜降",
            Self::StartOfWinter => "立冬",
            Self::MinorSnow => "小雪",
            Self::MajorSnow => "大雪",
            Self::WinterSolstice => "冬至",
        }
    }

    /// Whether this term is a 節 (month boundary) rather than a 氣.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Gregorian month (1..=12) the term falls in.
    pub const fn month(self) -> u32 {
        (self.index() / 2) as u32 + 1
    }

    /// Approximate day of month.
    pub const fn day(self) -> u32 {
        let (jie, qi) = TERM_DAYS[(self.index() / 2) as usize];
        if self.is_jie() { jie } else { qi }
    }
}

/// Day of month on which the 節 of `month` (1..=12) falls.
///
/// Months outside 1..=12 wrap.
pub const fn jie_day(month: u32) -> u32 {
    TERM_DAYS[(month.wrapping_sub(1) % 12) as usize].0
}

/// Month index counted from the calendar month, 0 = January (寅) to
/// 11 = December (丑).
///
/// A date before its month's 節 belongs to the previous calendar month.
pub const fn lunar_month_index(month: u32, day: u32) -> u8 {
    let m = month.wrapping_sub(1) % 12;
    if day >= jie_day(m + 1) {
        m as u8
    } else {
        ((m + 11) % 12) as u8
    }
}

/// Solar month index, 0 = 寅 month (from 立春) to 11 = 丑 month (from 小寒).
///
/// A date before its month's 節 still belongs to the previous solar month.
pub const fn solar_month_index(month: u32, day: u32) -> u8 {
    (lunar_month_index(month, day) + 11) % 12
}

/// Branch of a month index (0 = 寅).
pub const fn month_branch(lunar_month: u8) -> Branch {
    Branch::from_index(lunar_month as i64 + 2)
}

/// Most recent term on or before the given date.
pub const fn current_term(month: u32, day: u32) -> SolarTerm {
    let m = (month.wrapping_sub(1) % 12) + 1;
    let (jie, qi) = TERM_DAYS[(m - 1) as usize];
    let base = ((m - 1) * 2) as usize;
    if day >= qi {
        ALL_SOLAR_TERMS[base + 1]
    } else if day >= jie {
        ALL_SOLAR_TERMS[base]
    } else {
        // before this month's 節: the previous month's 氣
        ALL_SOLAR_TERMS[(base + 23) % 24]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jie_and_qi_alternate() {
        for (i, term) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(term.index() as usize, i);
            assert_eq!(term.is_jie(), i % 2 == 0, "{}", term.name());
        }
        assert!(SolarTerm::StartOfSpring.is_jie());
        assert!(!SolarTerm::WinterSolstice.is_jie());
    }

    #[test]
    fn dates_are_ordered_within_month() {
        for pair in ALL_SOLAR_TERMS.chunks(2) {
            assert_eq!(pair[0].month(), pair[1].month());
            assert!(pair[0].day() < pair[1].day());
        }
    }

    #[test]
    fn calendar_month_steps_back_before_jie() {
        assert_eq!(lunar_month_index(1, 6), 0);
        assert_eq!(lunar_month_index(1, 5), 11);
        assert_eq!(lunar_month_index(2, 3), 0);
        assert_eq!(lunar_month_index(2, 4), 1);
        assert_eq!(lunar_month_index(3, 10), 2);
        assert_eq!(lunar_month_index(12, 7), 11);
        assert_eq!(lunar_month_index(12, 6), 10);
        assert_eq!(month_branch(lunar_month_index(1, 10)), Branch::Yin);
        assert_eq!(month_branch(lunar_month_index(3, 10)), Branch::Chen);
    }

    #[test]
    fn start_of_spring_opens_yin_solar_month() {
        assert_eq!(SolarTerm::StartOfSpring.month(), 2);
        assert_eq!(SolarTerm::StartOfSpring.day(), 4);
        assert_eq!(solar_month_index(2, 4), 0);
        assert_eq!(solar_month_index(2, 3), 11);
        assert_eq!(month_branch(0), Branch::Yin);
        assert_eq!(month_branch(11), Branch::Chou);
    }

    #[test]
    fn january_straddles_zi_and_chou_solar_months() {
        assert_eq!(month_branch(solar_month_index(1, 5)), Branch::Zi);
        assert_eq!(month_branch(solar_month_index(1, 6)), Branch::Chou);
    }

    #[test]
    fn december_after_major_snow_is_zi_solar_month() {
        assert_eq!(month_branch(solar_month_index(12, 7)), Branch::Zi);
        assert_eq!(month_branch(solar_month_index(12, 6)), Branch::Hai);
    }

    #[test]
    fn every_month_index_reachable() {
        let rules: [fn(u32, u32) -> u8; 2] = [lunar_month_index, solar_month_index];
        for index in rules {
            let mut seen = [false; 12];
            for m in 1..=12 {
                seen[index(m, 1) as usize] = true;
                seen[index(m, 28) as usize] = true;
            }
            assert!(seen.iter().all(|s| *s));
        }
    }

    #[test]
    fn current_term_lookup() {
        assert_eq!(current_term(1, 1), SolarTerm::WinterSolstice);
        assert_eq!(current_term(2, 4), SolarTerm::StartOfSpring);
        assert_eq!(current_term(2, 18), SolarTerm::StartOfSpring);
        assert_eq!(current_term(2, 19), SolarTerm::RainWater);
        assert_eq!(current_term(6, 22), SolarTerm::SummerSolstice);
    }
}
