//! # wtxtp Performance Benchmarks
//!
//! Registration runs once per printed txtp and volume parsing once per run,
//! so the ledger paths are the ones worth watching.
//!
//! ```bash
//! cargo bench
//! cargo bench ledger
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;
use wtxtp::bank::{fingerprint_all, RenderedPlaylist};
use wtxtp::basepath::normalize_path;
use wtxtp::context::RunContext;
use wtxtp::volume::parse_volume;

/// Printed txtp with roughly one duplicate in four.
fn create_test_playlists(count: usize) -> Vec<RenderedPlaylist> {
    (0..count)
        .map(|i| {
            let id = if i % 4 == 3 { i - 1 } else { i };
            let text = format!("BGM.bnk #s{id}\nwem/{}.wem\n#i\nloop_start = 0\n", 1000 + id);
            RenderedPlaylist::from_text(&format!("bgm_{i:05}"), text)
        })
        .collect()
}

fn benchmark_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger");

    for size in [100, 1000, 10000].iter() {
        let playlists = create_test_playlists(*size);
        let fingerprints = fingerprint_all(&playlists);

        group.bench_with_input(
            BenchmarkId::new("register_content", size),
            &(playlists, fingerprints),
            |b, (playlists, fingerprints)| {
                b.iter_batched(
                    RunContext::default,
                    |mut context| {
                        for (playlist, fp) in playlists.iter().zip(fingerprints) {
                            context.register_content(*fp, playlist);
                        }
                        black_box(context.stats.created)
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }

    let names: Vec<String> = (0..1000).map(|i| format!("music_{:03}", i % 800)).collect();
    group.bench_function("register_name_1000", |b| {
        b.iter_batched(
            RunContext::default,
            |mut context| {
                for name in &names {
                    context.register_name(black_box(name));
                }
                black_box(context.stats.names)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn benchmark_fingerprinting(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");
    let playlists = create_test_playlists(10000);

    group.bench_function("parallel_10000", |b| {
        b.iter(|| fingerprint_all(black_box(&playlists)))
    });
    group.bench_function("sequential_10000", |b| {
        b.iter(|| {
            black_box(&playlists)
                .iter()
                .map(RenderedPlaylist::fingerprint)
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for expr in ["*", "-6db", "50%", "1.5", "abc"] {
        group.bench_with_input(BenchmarkId::new("parse_volume", expr), expr, |b, expr| {
            b.iter(|| parse_volume(black_box(expr)))
        });
    }

    group.bench_function("normalize_path", |b| {
        b.iter(|| normalize_path(black_box(Some("  C:\\games\\sound\\en "))))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_ledger,
    benchmark_fingerprinting,
    benchmark_parsing
);

criterion_main!(benches);
