//! Benchmark for model builds.
//!
//! TARGET: the whole catalog in under 10ms on one thread
//!
//! Run with: cargo bench --package menagerie_models --bench model_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use menagerie_models::{ModelLibrary, ModelSeed, Species};

fn benchmark_each_species(c: &mut Criterion) {
    let library = ModelLibrary::default();

    let mut group = c.benchmark_group("species");
    for species in Species::ALL {
        group.bench_function(species.name(), |b| {
            b.iter(|| black_box(library.build_seeded(species, ModelSeed::DEFAULT)));
        });
    }
    group.finish();
}

fn benchmark_catalog(c: &mut Criterion) {
    let library = ModelLibrary::default();

    let mut group = c.benchmark_group("catalog");
    group.throughput(Throughput::Elements(Species::ALL.len() as u64));

    group.bench_function("sequential", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            for species in Species::ALL {
                black_box(library.build_seeded(species, ModelSeed::new(seed)));
            }
        });
    });

    group.bench_function("parallel", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(library.build_all(ModelSeed::new(seed)))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_each_species, benchmark_catalog);
criterion_main!(benches);
