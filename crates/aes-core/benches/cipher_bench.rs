use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt_block, expand_key, Aes128Key, BlockCipher, KeyIndex, KeyTable};

fn bench_key_schedule(c: &mut Criterion) {
    let key = Aes128Key::from([0u8; 16]);
    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("expand_key", |b| {
        b.iter(|| expand_key(&key));
    });
    group.finish();
}

fn bench_blocks(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = Aes128Key::from(key_bytes);
    let round_keys = expand_key(&key);
    let cipher = BlockCipher::new(KeyTable::new(key));

    let mut group = c.benchmark_group("blocks");
    group.bench_function("encrypt_block_pre_expanded", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    group.bench_function("encrypt_with_key_index", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| {
            let mut data = block;
            cipher.encrypt(&mut data, KeyIndex::DEFAULT);
            data
        });
    });
    group.bench_function("decrypt_with_key_index", |b| {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        b.iter(|| {
            let mut data = block;
            cipher.decrypt(&mut data, KeyIndex::DEFAULT);
            data
        });
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_blocks);
criterion_main!(benches);
