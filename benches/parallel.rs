#![cfg(feature = "parallel")]

use criterion::{Criterion, criterion_group, criterion_main};
use crypto_primer::prelude::*;
use crypto_primer::signature::batch::{sign_batch, verify_batch};
use std::hint::black_box;

fn messages() -> Vec<Vec<u8>> {
    (0..256).map(|i| format!("message #{}", i).into_bytes()).collect()
}

fn bench_batch_sign(c: &mut Criterion) {
    let keys = TextbookKeyPair::placeholder();
    let config = CryptoConfig::default();
    let messages = messages();

    c.bench_function("Textbook RSA-1024 sign_batch 256", |b| {
        b.iter(|| sign_batch(black_box(&messages), keys.private(), &config).unwrap());
    });
    c.bench_function("Textbook RSA-1024 sequential sign 256", |b| {
        b.iter(|| {
            messages
                .iter()
                .map(|m| sign(black_box(m), keys.private()))
                .collect::<Vec<_>>()
        });
    });
}

fn bench_batch_verify(c: &mut Criterion) {
    let keys = TextbookKeyPair::placeholder();
    let config = CryptoConfig::default();
    let messages = messages();
    let signatures = sign_batch(&messages, keys.private(), &config).unwrap();

    c.bench_function("Textbook RSA-1024 verify_batch 256", |b| {
        b.iter(|| verify_batch(black_box(&messages), &signatures, keys.public(), &config).unwrap());
    });
}

criterion_group!(benches, bench_batch_sign, bench_batch_verify);
criterion_main!(benches);
