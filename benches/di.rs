use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ioc_container::fixtures::car::{CarManager, CarModule};
use ioc_container::fixtures::store::{DataStore, Database};
use ioc_container::*;
use std::sync::Arc;

// ===== Micro Benchmarks =====

fn bench_singleton_hit(c: &mut Criterion) {
    let mut registry = ServiceRegistry::new();
    registry.register::<dyn DataStore, Database>(Lifetime::Singleton);

    c.bench_function("singleton_hit", |b| {
        b.iter(|| {
            let v = registry.resolve::<dyn DataStore>().unwrap();
            black_box(v);
        })
    });
}

fn bench_singleton_cold(c: &mut Criterion) {
    struct ExpensiveToCreate {
        data: Vec<u64>,
    }

    c.bench_function("singleton_cold_expensive", |b| {
        b.iter_batched(
            || {
                let mut registry = ServiceRegistry::new();
                registry.register_factory::<ExpensiveToCreate, _>(Lifetime::Singleton, |_| {
                    Ok(Arc::new(ExpensiveToCreate {
                        data: (0..1000).collect(),
                    }))
                });
                registry
            },
            |registry| {
                let v = registry.resolve::<ExpensiveToCreate>().unwrap();
                black_box(v.data.len());
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_singleton_vs_transient(c: &mut Criterion) {
    let mut group = c.benchmark_group("singleton_vs_transient");

    for lifetime in [Lifetime::Singleton, Lifetime::Transient] {
        let mut registry = ServiceRegistry::new();
        registry.register::<dyn DataStore, Database>(lifetime);

        group.bench_with_input(BenchmarkId::from_parameter(lifetime), &registry, |b, registry| {
            b.iter(|| black_box(registry.resolve::<dyn DataStore>().unwrap()))
        });
    }

    group.finish();
}

fn bench_injected_transient(c: &mut Criterion) {
    let registry = ServiceCollection::new().add_module(CarModule).build();

    c.bench_function("injected_transient", |b| {
        b.iter(|| black_box(registry.resolve::<dyn CarManager>().unwrap()))
    });
}

fn bench_not_registered(c: &mut Criterion) {
    let registry = ServiceRegistry::new();

    c.bench_function("not_registered", |b| {
        b.iter(|| black_box(registry.resolve::<dyn DataStore>().is_err()))
    });
}

fn bench_scope_cycle(c: &mut Criterion) {
    let mut registry = ServiceRegistry::new();

    c.bench_function("scope_enter_resolve_clear", |b| {
        b.iter(|| {
            let scope = ContainerScope::enter(&mut registry, CarModule);
            black_box(scope.resolve::<dyn CarManager>().unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_singleton_hit,
    bench_singleton_cold,
    bench_singleton_vs_transient,
    bench_injected_transient,
    bench_not_registered,
    bench_scope_cycle
);
criterion_main!(benches);
