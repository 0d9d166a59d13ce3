use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use liuyao_base::{
    Branch, HourSlot, PillarConfig, Trigram, branch_interaction, derive_hexagrams, four_pillars,
    hexagram_text, palace_of,
};

fn derivation_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    group.bench_function("derive_hexagrams", |b| {
        b.iter(|| derive_hexagrams(black_box(123), black_box(-45), black_box(678)))
    });
    group.bench_function("palace_of", |b| {
        b.iter(|| palace_of(black_box(Trigram::Dui), black_box(Trigram::Qian)))
    });
    group.bench_function("hexagram_text", |b| {
        b.iter(|| hexagram_text(black_box(Trigram::Kan), black_box(Trigram::Zhen)))
    });
    group.finish();
}

fn pillar_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let slot = HourSlot::new(6).unwrap();
    let config = PillarConfig::default();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(date), black_box(slot), &config))
    });
    group.finish();
}

fn interaction_bench(c: &mut Criterion) {
    c.bench_function("branch_interaction", |b| {
        b.iter(|| branch_interaction(black_box(Branch::Si), black_box(Branch::Shen)))
    });
}

criterion_group!(benches, derivation_bench, pillar_bench, interaction_bench);
criterion_main!(benches);
