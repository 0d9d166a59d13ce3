//! Integration tests for full readings against hand-checked charts.

use chrono::NaiveDate;
use liuyao_base::{
    Branch, BranchInteraction, Element, ElementInteraction, HourSlot, MonthRule,
    PalaceGeneration, SixRelative, Trigram, VoidMethod, YearBoundary,
};
use liuyao_reading::{Diviner, ReadingConfig, Topic, compute_reading};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// 水雷屯 with the second line moving
// ---------------------------------------------------------------------------

#[test]
fn zhun_chart() {
    // 6 坎 over 4 震, 14 mod 6 = 2
    let slot = HourSlot::new(4).unwrap();
    let r = compute_reading(
        6,
        4,
        14,
        date(2024, 2, 10),
        slot,
        Some(Topic::Wealth),
        &ReadingConfig::default(),
    );
    assert_eq!(r.original.name(), "水雷屯");
    assert_eq!(r.palace.palace, Trigram::Kan);
    assert_eq!(r.palace.generation, PalaceGeneration::Second);
    assert_eq!((r.palace.world, r.palace.response), (2, 5));

    let branches: Vec<Branch> = r.lines.iter().map(|l| l.branch).collect();
    use Branch::*;
    assert_eq!(branches, vec![Zi, Yin, Chen, Shen, Xu, Zi]);

    let relatives: Vec<&str> = r.lines.iter().map(|l| l.relative.name()).collect();
    // 坎 palace is water
    assert_eq!(relatives, vec!["兄弟", "子孫", "官鬼", "父母", "官鬼", "兄弟"]);

    // 震 line 2 broken -> solid: 011 = 兌, so 水澤節
    assert_eq!(r.transformed.name(), "水澤節");
    let moving = r.moving();
    assert!(moving.is_world);
    let changed = moving.changed.unwrap();
    assert_eq!(changed.branch, Mao);
    assert_eq!(changed.element, Element::Wood);
    assert_eq!(changed.relative, SixRelative::Offspring);
    assert_eq!(changed.interaction, ElementInteraction::Peer);
    assert_eq!(changed.branch_interaction, None);

    // 甲辰 day: beasts start at 青龍, void 寅卯
    assert_eq!(r.lines[0].beast.name(), "青龍");
    assert!(r.lines[1].is_void);

    // water palace: fire is wealth, none present
    assert_eq!(r.useful_spirit, Some(SixRelative::Wealth));
    assert_eq!(r.useful_spirit_lines().count(), 0);
}

#[test]
fn combination_on_change() {
    // 乾 line 1 broken: 110 = 巽, and the inner 子 becomes 丑
    let slot = HourSlot::new(0).unwrap();
    let r = compute_reading(1, 1, 1, date(2024, 6, 1), slot, None, &ReadingConfig::default());
    assert_eq!(r.transformed.name(), "天風姤");
    let changed = r.moving().changed.unwrap();
    assert_eq!(r.moving().branch, Branch::Zi);
    assert_eq!(changed.branch, Branch::Chou);
    assert_eq!(changed.branch_interaction, Some(BranchInteraction::SixCombination));
}

#[test]
fn markers_and_json_shape() {
    let slot = HourSlot::new(0).unwrap();
    let r = compute_reading(1, 1, 6, date(2000, 1, 1), slot, None, &ReadingConfig::default());
    assert_eq!(r.lines[5].markers(), "世");
    assert_eq!(r.lines[2].markers(), "應空");

    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["original"]["text"]["name"], "乾為天");
    assert_eq!(json["moving_line"], 6);
    assert_eq!(json["lines"][5]["branch"], "戌");
    assert_eq!(json["lines"][5]["changed"]["branch"], "未");
    assert_eq!(json["lines"][5]["changed"]["branch_interaction"]["kind"], "Punishment");
    assert_eq!(json["pillars"]["day"]["stem"], "戊");
    assert_eq!(json["date"], "2000-01-01");
}

#[test]
fn config_variants_change_only_pillars() {
    let slot = HourSlot::new(2).unwrap();
    let plain = compute_reading(3, 7, 9, date(2024, 2, 1), slot, None, &ReadingConfig::default());
    let tuned = compute_reading(
        3,
        7,
        9,
        date(2024, 2, 1),
        slot,
        None,
        &ReadingConfig {
            year_boundary: YearBoundary::SpringCommencement,
            month_rule: MonthRule::FiveTigers,
            void_method: VoidMethod::Xun,
        },
    );
    assert_eq!(plain.original, tuned.original);
    assert_eq!(plain.transformed, tuned.transformed);
    assert_eq!(plain.pillars.year.label(), "甲辰");
    assert_eq!(tuned.pillars.year.label(), "癸卯");
    assert_eq!(plain.pillars.month.label(), "乙寅");
    assert_eq!(tuned.pillars.month.label(), "乙丑");
}

#[test]
fn diviner_batch_matches() {
    let slot = HourSlot::new(9).unwrap();
    let mut diviner = Diviner::new(ReadingConfig::default());
    for (n1, n2, n3) in [(1, 2, 3), (40, -3, 0), (7, 7, 7)] {
        let batch = diviner.cast(n1, n2, n3, date(2026, 10, 18), slot, None);
        let single =
            compute_reading(n1, n2, n3, date(2026, 10, 18), slot, None, &ReadingConfig::default());
        assert_eq!(batch, single);
    }
    assert_eq!(diviner.memoized(), 1);
}

// ---------------------------------------------------------------------------
// Invariants over arbitrary casts
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn one_moving_line_and_world_response_apart(
        n1 in any::<i64>(),
        n2 in any::<i64>(),
        n3 in any::<i64>(),
        days in 0i64..40_000,
        slot in 0i64..12,
    ) {
        let d = date(1950, 1, 1) + chrono::Days::new(days as u64);
        let slot = HourSlot::new(slot).unwrap();
        let r = compute_reading(n1, n2, n3, d, slot, None, &ReadingConfig::default());
        prop_assert_eq!(r.lines.iter().filter(|l| l.is_moving).count(), 1);
        prop_assert_eq!(r.lines.iter().filter(|l| l.is_world).count(), 1);
        prop_assert_eq!(r.lines.iter().filter(|l| l.is_response).count(), 1);
        prop_assert_eq!(((r.palace.world + 3 - 1) % 6) + 1, r.palace.response);
        for line in &r.lines {
            prop_assert_eq!(line.is_void, r.pillars.is_void(line.branch));
        }
    }
}
