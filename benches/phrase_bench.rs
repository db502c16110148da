//! Criterion benchmarks for phrase evolution.
//!
//! Full seeded runs on short targets, plus the per-generation operators on
//! a long one, to track engine overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phrase_ga::ga::{GaConfig, GaEngine, GaRunner, Genome, Individual, Selector, Target};
use rand::rngs::StdRng;
use rand::SeedableRng;

const LONG_TARGET: &str =
    "This is a testing string. This is a testing string. This is a testing string.";

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);

    for (target, pop) in [("GA", 100usize), ("Rust", 100), ("Hello", 200)] {
        let config = GaConfig::new(target).with_population_size(pop).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{pop}"), target),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(c)).expect("valid config");
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("generations");
    group.sample_size(10);

    for &pop in &[50usize, 200, 500] {
        let config = GaConfig::new(LONG_TARGET)
            .with_population_size(pop)
            .with_seed(42)
            .with_max_generations(50);
        group.bench_with_input(BenchmarkId::from_parameter(pop), &config, |b, c| {
            b.iter(|| {
                let mut engine = GaEngine::new(black_box(c).clone()).expect("valid config");
                while engine.step().is_some() {}
                black_box(engine.into_result())
            })
        });
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let target = Target::new(LONG_TARGET).expect("printable target");
    let mut rng = StdRng::seed_from_u64(42);
    let a = Genome::random(target.len(), &mut rng);
    let b = Genome::random(target.len(), &mut rng);

    c.bench_function("genome_score", |bench| {
        let mut g = a.clone();
        bench.iter(|| g.score(black_box(&target)))
    });
    c.bench_function("genome_crossover", |bench| {
        bench.iter(|| black_box(a.crossover(black_box(&b), &mut rng)))
    });

    let mut population: Vec<Genome> = (0..200)
        .map(|_| Genome::random(target.len(), &mut rng))
        .collect();
    for g in &mut population {
        g.score(&target);
    }
    let best = population.iter().map(Individual::fitness).fold(0.0, f64::max);
    c.bench_function("select_200", |bench| {
        bench.iter(|| black_box(Selector::default().select(&population, best, &mut rng)))
    });
}

criterion_group!(benches, bench_full_run, bench_generations, bench_operators);
criterion_main!(benches);
