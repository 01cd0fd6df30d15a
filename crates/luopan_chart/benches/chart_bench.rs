use criterion::{Criterion, black_box, criterion_group, criterion_main};
use luopan_base::{Mountain, Star};
use luopan_chart::{
    ApparentSunTerms, Gender, LocationResult, Period, SolarTermSource, four_pillars, generate,
    key_positions, locate, patterns,
};
use luopan_time::CivilTime;

fn pillars_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pillars");
    let t: CivilTime = "1984-06-15T12:00".parse().unwrap();
    let terms = ApparentSunTerms::default();
    group.bench_function("solar_month", |b| b.iter(|| terms.solar_month(black_box(&t))));
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(t), Gender::Male, true))
    });
    group.finish();
}

fn plate_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("plate");
    let period = Period::new(9).unwrap();
    let location = LocationResult::centered(Mountain::Zi);
    let plate = generate(period, &location);
    group.bench_function("locate", |b| b.iter(|| locate(black_box(187.25), 0.5)));
    group.bench_function("generate", |b| {
        b.iter(|| generate(black_box(period), black_box(&location)))
    });
    group.bench_function("patterns", |b| b.iter(|| patterns(black_box(&plate))));
    group.bench_function("key_positions", |b| {
        b.iter(|| key_positions(black_box(&plate), Star::Nine, None))
    });
    group.finish();
}

criterion_group!(benches, pillars_bench, plate_bench);
criterion_main!(benches);
