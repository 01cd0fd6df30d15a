use criterion::{Criterion, black_box, criterion_group, criterion_main};
use luopan_base::{
    FlightDirection, Mountain, Pillar, Star, Stem, day_pillar, fly, hour_pillar, month_pillar,
    normalize_360, year_pillar,
};

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sexagenary");
    group.bench_function("year_pillar", |b| b.iter(|| year_pillar(black_box(2024))));
    group.bench_function("month_pillar", |b| {
        b.iter(|| month_pillar(black_box(2024), black_box(7)))
    });
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(2_460_477))));
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(Stem::Xin), black_box(23)))
    });
    group.bench_function("nayin", |b| {
        b.iter(|| Pillar::from_cycle_index(black_box(37)).nayin())
    });
    group.finish();
}

fn ring_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    group.bench_function("sector_scan", |b| {
        b.iter(|| {
            let deg = normalize_360(black_box(-3.25));
            Mountain::all().iter().find(|m| m.sector().contains(deg)).copied()
        })
    });
    group.bench_function("fly_reverse", |b| {
        b.iter(|| fly(black_box(Star::Eight), FlightDirection::Reverse))
    });
    group.finish();
}

criterion_group!(benches, cycle_bench, ring_bench);
criterion_main!(benches);
