use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use keccak_core::{keccak_f1600, sha3_256, shake128, KeccakState};

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation");
    group.bench_function("keccak_f1600", |b| {
        let mut state = KeccakState::new();
        b.iter(|| keccak_f1600(&mut state));
    });
    group.finish();
}

fn bench_hashing(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let mut group = c.benchmark_group("hashing");
    for size in [64usize, 1024, 16 * 1024] {
        let mut message = vec![0u8; size];
        rng.fill_bytes(&mut message);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("sha3_256", size), &message, |b, msg| {
            b.iter(|| sha3_256(msg));
        });
        group.bench_with_input(BenchmarkId::new("shake128_64", size), &message, |b, msg| {
            b.iter(|| {
                let mut out = [0u8; 64];
                shake128(msg, &mut out);
                out
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_permutation, bench_hashing);
criterion_main!(benches);
