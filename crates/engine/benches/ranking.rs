//! Benchmarks for actor ranking
//!
//! Run with: cargo bench --package engine
//!
//! Exercises the tally-sort on synthetic pools, including a heavy-tie pool
//! where the deterministic tie-break does most of the comparison work.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::ranking::rank;
use engine::types::{ActorRecord, ActorTally};

fn synthetic_tallies(size: usize, distinct_counts: u32) -> Vec<ActorTally> {
    (0..size)
        .map(|i| ActorTally {
            actor: ActorRecord {
                id: format!("actor-{i}"),
                name: format!("Actor {i}"),
            },
            count: (i as u32 % distinct_counts) + 1,
        })
        .collect()
}

fn bench_rank_mixed_counts(c: &mut Criterion) {
    let tallies = synthetic_tallies(10_000, 50);

    c.bench_function("rank_10k_mixed_counts", |b| {
        b.iter(|| {
            let ranked = rank(black_box(tallies.clone()));
            black_box(ranked)
        })
    });
}

fn bench_rank_heavy_ties(c: &mut Criterion) {
    // Two distinct counts only: almost every comparison falls through to
    // the id tie-break.
    let tallies = synthetic_tallies(10_000, 2);

    c.bench_function("rank_10k_heavy_ties", |b| {
        b.iter(|| {
            let ranked = rank(black_box(tallies.clone()));
            black_box(ranked)
        })
    });
}

criterion_group!(benches, bench_rank_mixed_counts, bench_rank_heavy_ties);
criterion_main!(benches);
