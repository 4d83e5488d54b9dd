//! # Sequence Combinator Benchmarks
//!
//! Compares the combinators against the explicit loops they replace:
//! - Filtering (`keep` vs push-in-a-loop)
//! - Transformation (`map` / `map2` vs indexed loops)
//! - Selective modification (`modify_at` vs in-place writes on a copy)
//! - Reshaping (`transpose` vs nested loops)
//! - Multi-stage pipelines with metrics vs hand-fused loops

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::Itertools;
use seqops::prelude::*;

/// Test data structure for benchmarking
#[derive(Debug, Clone)]
pub struct BenchmarkPerson {
    pub id: u32,
    pub age: u32,
    pub active: bool,
    pub score: f64,
}

impl BenchmarkPerson {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            age: 20 + (id % 50),
            active: id % 3 == 0,
            score: (id as f64) * 1.5 + 10.0,
        }
    }
}

/// Generate test data for benchmarking
pub fn generate_test_data(size: usize) -> Sequence<BenchmarkPerson> {
    (0..size).map(|i| BenchmarkPerson::new(i as u32)).collect()
}

/// Benchmark: Data filtering performance
pub fn benchmark_data_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_filtering");

    for size in [100, 1000, 10000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("keep", size), &data, |b, data| {
            b.iter(|| black_box(keep(data, |person| person.active && person.age > 25)))
        });

        group.bench_with_input(BenchmarkId::new("imperative", size), &data, |b, data| {
            b.iter(|| {
                let mut result = Vec::new();
                for person in data {
                    if person.active && person.age > 25 {
                        result.push(person.clone());
                    }
                }
                black_box(result)
            })
        });
    }

    group.finish();
}

/// Benchmark: Data transformation performance
pub fn benchmark_data_transformation(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_transformation");

    for size in [100, 1000, 10000].iter() {
        let data = generate_test_data(*size);
        let bonus: Sequence<f64> = (0..*size).map(|i| (i % 7) as f64).collect();

        group.bench_with_input(BenchmarkId::new("map2", size), &data, |b, data| {
            b.iter(|| black_box(map2(data, &bonus, |person, extra| person.score + extra)))
        });

        group.bench_with_input(BenchmarkId::new("imperative", size), &data, |b, data| {
            b.iter(|| {
                let mut result = Vec::with_capacity(data.len());
                for index in 0..data.len() {
                    result.push(data[index].score + bonus[index]);
                }
                black_box(result)
            })
        });
    }

    group.finish();
}

/// Benchmark: Selective modification
pub fn benchmark_selective_modification(c: &mut Criterion) {
    let mut group = c.benchmark_group("selective_modification");

    for size in [100, 1000, 10000].iter() {
        let data: Sequence<i64> = (0..*size as i64).collect();
        let positions: Vec<usize> = (1..=*size).step_by(3).collect();

        group.bench_with_input(BenchmarkId::new("modify_at", size), &data, |b, data| {
            b.iter(|| black_box(modify_at(data, &positions, |_| 0)))
        });

        group.bench_with_input(BenchmarkId::new("imperative", size), &data, |b, data| {
            b.iter(|| {
                let mut copy = data.to_vec();
                for position in &positions {
                    copy[position - 1] = 0;
                }
                black_box(copy)
            })
        });
    }

    group.finish();
}

/// Benchmark: Transposition
pub fn benchmark_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    for rows in [10, 100, 1000].iter() {
        let matrix: Sequence<Sequence<i64>> = (0..*rows as i64)
            .map(|row| (0..20).map(|column| row * 20 + column).collect())
            .collect();

        group.bench_with_input(BenchmarkId::new("transpose", rows), &matrix, |b, matrix| {
            b.iter(|| black_box(transpose(matrix)))
        });

        group.bench_with_input(BenchmarkId::new("imperative", rows), &matrix, |b, matrix| {
            b.iter(|| {
                let mut columns: Vec<Vec<i64>> = vec![Vec::with_capacity(matrix.len()); 20];
                for row in matrix {
                    for (index, cell) in row.iter().enumerate() {
                        columns[index].push(*cell);
                    }
                }
                black_box(columns)
            })
        });
    }

    group.finish();
}

/// Benchmark: Complex multi-stage pipeline
pub fn benchmark_complex_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("complex_pipeline");

    for size in [100, 1000, 10000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("pipeline", size), &data, |b, data| {
            b.iter(|| {
                let total = Pipeline::new(data.clone())
                    .keep(|person| person.active)
                    .map(|person| (person.age / 10, person.score))
                    .fold(0.0, |acc, (_, score)| acc + score);
                black_box(total)
            })
        });

        group.bench_with_input(BenchmarkId::new("itertools", size), &data, |b, data| {
            b.iter(|| {
                let grouped = data
                    .iter()
                    .filter(|person| person.active)
                    .map(|person| (person.age / 10, person.score))
                    .into_group_map();
                black_box(grouped.values().flatten().sum::<f64>())
            })
        });

        group.bench_with_input(BenchmarkId::new("imperative", size), &data, |b, data| {
            b.iter(|| {
                let mut total = 0.0;
                for person in data {
                    if person.active {
                        total += person.score;
                    }
                }
                black_box(total)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_data_filtering,
    benchmark_data_transformation,
    benchmark_selective_modification,
    benchmark_transpose,
    benchmark_complex_pipeline
);

criterion_main!(benches);
