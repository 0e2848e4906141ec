use criterion::{black_box, criterion_group, criterion_main, Criterion};

use conjugar_core::catalog::{Catalog, COMMON_VERBS};
use conjugar_core::conjugation::generate_table;
use conjugar_core::drill::{DrillEngine, DrillFilters};
use conjugar_core::model::ConjugationType;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_table");

    group.bench_function("hablar", |b| {
        b.iter(|| generate_table(black_box("Hablar"), black_box(ConjugationType::First)))
    });

    group.bench_function("full_catalog", |b| {
        b.iter(|| Catalog::from_records(black_box(&COMMON_VERBS)))
    });

    group.finish();
}

fn bench_draw_card(c: &mut Criterion) {
    let catalog = Catalog::default();
    let mut engine = DrillEngine::new(DrillFilters::new(&catalog));
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("draw_card", |b| {
        b.iter(|| engine.draw_card(black_box(&catalog), &mut rng).is_some())
    });
}

criterion_group!(benches, bench_generate_table, bench_draw_card);
criterion_main!(benches);
