//! Benchmark – `caseprobe::decode` and `caseprobe::dump`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Produce a deterministic escaped input of `units` code units where roughly
/// one token in `escape_every` is an escape.
fn make_payload(units: usize, escape_every: usize) -> Vec<u16> {
    const ESCAPES: [&str; 3] = [r"\x41", r"\u0130", r"\\"];
    let mut s = String::with_capacity(units);
    let mut i = 0usize;
    while s.len() < units {
        if escape_every > 0 && i % escape_every == 0 {
            s.push_str(ESCAPES[i % ESCAPES.len()]);
        } else {
            s.push('a');
        }
        i += 1;
    }
    s.encode_utf16().collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for escape_every in [0usize, 16, 2] {
        let payload = make_payload(64 * 1024, escape_every);
        group.throughput(Throughput::Elements(payload.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("escape_every", escape_every),
            &payload,
            |b, payload| b.iter(|| caseprobe::decode(black_box(payload)).unwrap()),
        );
    }
    group.finish();
}

fn bench_dump(c: &mut Criterion) {
    let units: Vec<u16> = (0..=u16::MAX).collect();
    c.bench_function("dump/all_units", |b| {
        b.iter(|| caseprobe::dump(black_box(&units)));
    });
}

criterion_group!(benches, bench_decode, bench_dump);
criterion_main!(benches);
