use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::{Pillar, sexagenary_cycle};

fn pillar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pillar");
    group.bench_function("parse_glyphs", |b| {
        b.iter(|| black_box("壬戌").parse::<Pillar>())
    });
    group.bench_function("parse_pinyin", |b| {
        b.iter(|| black_box("ren xu").parse::<Pillar>())
    });
    group.bench_function("from_sexagenary_index", |b| {
        b.iter(|| Pillar::from_sexagenary_index(black_box(58)))
    });
    group.finish();
}

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    group.bench_function("void_and_nayin_all_60", |b| {
        b.iter(|| {
            sexagenary_cycle()
                .map(|p| (p.void_branches(), p.nayin()))
                .count()
        })
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, cycle_bench);
criterion_main!(benches);
