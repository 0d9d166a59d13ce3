//! Integration tests for hexagram derivation and the symbol tables.
//!
//! Pure table lookups, no date input needed.

use liuyao_base::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, ALL_TRIGRAMS, Branch, BranchInteraction,
    ElementInteraction, Hexagram, LinePosition, PalaceGeneration, SixBeast, Trigram,
    branch_interaction, derive_hexagrams, element_interaction, hexagram_text, palace_of,
    six_beasts, void_branches,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Worked casts
// ---------------------------------------------------------------------------

#[test]
fn qian_doubled_with_top_line_moving() {
    let d = derive_hexagrams(1, 1, 6);
    assert_eq!(d.original.upper, Trigram::Qian);
    assert_eq!(d.original.lower, Trigram::Qian);
    assert_eq!(d.original.text().name, "乾為天");
    assert_eq!(d.moving_line.get(), 6);
    // 111 with the top line broken reads 011 = 兌
    assert_eq!(d.transformed, Hexagram::new(Trigram::Dui, Trigram::Qian));
    assert_eq!(d.transformed.text().name, "澤天夬");
}

#[test]
fn zero_third_number_moves_top_line() {
    assert_eq!(derive_hexagrams(3, 4, 0).moving_line.get(), 6);
}

#[test]
fn large_numbers_cast() {
    // 2024 mod 8 = 0 坤, 17 mod 8 = 1 乾, 100 mod 6 = 4
    let d = derive_hexagrams(2024, 17, 100);
    assert_eq!(d.original.text().name, "地天泰");
    assert_eq!(d.moving_line.get(), 4);
    // 坤 bottom line becomes solid: 001 = 震
    assert_eq!(d.transformed, Hexagram::new(Trigram::Zhen, Trigram::Qian));
    assert_eq!(d.transformed.text().name, "雷天大壯");
}

#[test]
fn every_pair_has_text_and_palace() {
    for u in ALL_TRIGRAMS {
        for l in ALL_TRIGRAMS {
            let text = hexagram_text(u, l);
            assert!(!text.placeholder, "{}-{}", u.id(), l.id());
            let info = palace_of(u, l);
            assert!((1..=6).contains(&info.world));
        }
    }
}

#[test]
fn palace_heads_and_souls() {
    let info = palace_of(Trigram::Li, Trigram::Qian);
    assert_eq!(info.palace, Trigram::Qian);
    assert_eq!(info.generation, PalaceGeneration::Returning);
    let info = palace_of(Trigram::Li, Trigram::Kun);
    assert_eq!(info.generation, PalaceGeneration::Wandering);
    assert_eq!(info.world, 4);
    assert_eq!(info.response, 1);
}

// ---------------------------------------------------------------------------
// Relations and overlays
// ---------------------------------------------------------------------------

#[test]
fn zi_day_void() {
    assert_eq!(void_branches(Branch::Zi), [Branch::Xu, Branch::Hai]);
}

#[test]
fn zi_wu_clash_label() {
    let i = branch_interaction(Branch::Zi, Branch::Wu);
    assert_eq!(i, Some(BranchInteraction::SixClash));
    assert_eq!(i.map(|i| i.label()), Some("六沖"));
}

#[test]
fn chen_chen_self_punishment_label() {
    let i = branch_interaction(Branch::Chen, Branch::Chen);
    assert_eq!(i.map(|i| i.label()), Some("自刑"));
}

#[test]
fn element_diagonal_is_peer() {
    for e in ALL_ELEMENTS {
        assert_eq!(element_interaction(e, e), ElementInteraction::Peer);
    }
}

#[test]
fn beasts_rotate_per_day_stem() {
    for stem in ALL_STEMS {
        let beasts = six_beasts(stem);
        let mut names: Vec<&str> = beasts.iter().map(|b| b.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
    assert_eq!(six_beasts(liuyao_base::Stem::Ji)[0], SixBeast::FlyingSerpent);
}

#[test]
fn void_pairs_are_twelve_fixed_outputs() {
    for b in ALL_BRANCHES {
        let pair = void_branches(b);
        assert_eq!(pair.len(), 2);
        assert_ne!(pair[0], pair[1]);
        assert_eq!(pair, void_branches(b));
    }
}

// ---------------------------------------------------------------------------
// Properties over arbitrary integers
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn trigram_ids_in_range(n1 in any::<i64>(), n2 in any::<i64>()) {
        let h = Hexagram::from_numbers(n1, n2);
        prop_assert_eq!(h.upper.id() as i64, ((n1 % 8) + 8) % 8);
        prop_assert_eq!(h.lower.id() as i64, ((n2 % 8) + 8) % 8);
    }

    #[test]
    fn moving_line_in_range(n3 in any::<i64>()) {
        let line = LinePosition::moving_from(n3).get();
        prop_assert!((1..=6).contains(&line));
        if n3 % 6 == 0 {
            prop_assert_eq!(line, 6);
        }
    }

    #[test]
    fn transformation_is_an_involution(n1 in any::<i64>(), n2 in any::<i64>(), n3 in any::<i64>()) {
        let d = derive_hexagrams(n1, n2, n3);
        prop_assert_eq!(d.transformed.with_line_flipped(d.moving_line), d.original);
        let changed = d
            .original
            .lines()
            .iter()
            .zip(d.transformed.lines().iter())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert_eq!(changed, 1);
    }

    #[test]
    fn response_three_from_world(u in 0i64..8, l in 0i64..8) {
        let info = Hexagram::from_numbers(u, l).palace();
        prop_assert_eq!(((info.world + 3 - 1) % 6) + 1, info.response);
    }
}
