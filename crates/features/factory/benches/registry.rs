use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use motif_factory::{CarKind, car_registry};
use std::hint::black_box;

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    let registry = car_registry();

    for name in ["RaceCar", "OffRoadCar", "TownCar"] {
        group.bench_with_input(BenchmarkId::new("registry", name), name, |b, n| {
            b.iter(|| registry.create(black_box(n)).unwrap());
        });

        let kind: CarKind = name.parse().expect("built-in car kind");
        group.bench_with_input(BenchmarkId::new("closed_set", name), &kind, |b, k| {
            b.iter(|| black_box(*k).create());
        });
    }

    group.bench_function("registry_not_found", |b| {
        b.iter(|| registry.create(black_box("Limousine")).unwrap_err());
    });

    group.finish();
}

criterion_group!(benches, bench_create);
criterion_main!(benches);
