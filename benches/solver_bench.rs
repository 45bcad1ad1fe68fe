//! Criterion benchmarks for the backtracking section solver.
//!
//! Uses seeded random instances so every sample searches the same
//! space; a step budget keeps each run bounded independently of
//! wall-clock speed.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use section_assign::instance;
use section_assign::solver::{is_consistent, Assignment, BacktrackRunner, SearchConfig};

fn bench_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_search");
    group.sample_size(20);

    for (total, leaders, times) in [(8usize, 2usize, 3usize), (10, 3, 4), (12, 3, 4)] {
        let mut rng = StdRng::seed_from_u64(42);
        let problem = instance::random_problem(total, leaders, times, &mut rng);
        let config = SearchConfig::default()
            .with_time_limit(Duration::from_secs(5))
            .with_max_steps(200_000);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{total}x{leaders}x{times}")),
            &problem,
            |b, problem| {
                b.iter(|| {
                    let result = BacktrackRunner::run(black_box(problem), &config).unwrap();
                    black_box(result.steps)
                })
            },
        );
    }

    group.finish();
}

fn bench_consistency_check(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let problem = instance::random_problem(40, 8, 8, &mut rng);
    let mut a = Assignment::new(&problem);
    for leader in 0..problem.leaders {
        a.set_section(leader, Some(leader % problem.times));
    }

    c.bench_function("is_consistent_student", |b| {
        b.iter(|| black_box(is_consistent(&problem, &mut a, 20, black_box(3))))
    });
}

fn bench_set_section(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let problem = instance::random_problem(100, 10, 10, &mut rng);
    let mut a = Assignment::new(&problem);

    c.bench_function("set_section_round_trip", |b| {
        b.iter(|| {
            a.set_section(black_box(50), Some(black_box(5)));
            a.set_section(black_box(50), None);
        })
    });
}

criterion_group!(
    benches,
    bench_full_search,
    bench_consistency_check,
    bench_set_section
);
criterion_main!(benches);
