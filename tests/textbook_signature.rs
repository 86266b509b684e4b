//!
//! 教科书式 RSA 签名的性质测试
//!

mod common;

use common::{fast_config, flip_bit};
use crypto_primer::hashing::HashAlgorithm;
use crypto_primer::prelude::*;
use crypto_primer::signature::textbook::digest_to_integer;

const MESSAGE: &[u8] = b"A message for signing";
const OTHER_MESSAGE: &[u8] = b"A different message";

#[test]
fn test_fresh_keys_sign_and_verify() {
    for _ in 0..3 {
        let keys = TextbookKeyPair::generate(&fast_config()).unwrap();
        let signature = sign(MESSAGE, keys.private());
        assert!(verify(MESSAGE, &signature, keys.public()));
    }
}

#[test]
fn test_signature_does_not_transfer_between_messages() {
    let keys = TextbookKeyPair::generate(&fast_config()).unwrap();
    let messages: Vec<Vec<u8>> = (0..16).map(|i| format!("msg-{}", i).into_bytes()).collect();

    for (i, signed) in messages.iter().enumerate() {
        let signature = sign(signed, keys.private());
        for (j, other) in messages.iter().enumerate() {
            assert_eq!(verify(other, &signature, keys.public()), i == j);
        }
    }
}

#[test]
fn test_every_low_bit_flip_fails() {
    let keys = TextbookKeyPair::placeholder();
    let signature = sign(MESSAGE, keys.private());

    for bit in 0..64 {
        let tampered = flip_bit(&signature, bit);
        assert!(!verify(MESSAGE, &tampered, keys.public()), "bit {} flip verified", bit);
    }
}

#[test]
fn test_signing_is_deterministic_across_calls() {
    let keys = TextbookKeyPair::generate(&fast_config()).unwrap();
    let first = sign(MESSAGE, keys.private());
    let second = sign(MESSAGE, keys.private());
    assert_eq!(first, second);
    assert_eq!(first.to_hex(), second.to_hex());
}

#[test]
fn test_placeholder_scenario() {
    let keys = TextbookKeyPair::placeholder();
    let signature = sign(MESSAGE, keys.private());

    assert!(verify(MESSAGE, &signature, keys.public()));
    assert!(!verify(OTHER_MESSAGE, &signature, keys.public()));
}

#[test]
fn test_recovered_value_is_the_digest() {
    let keys = TextbookKeyPair::placeholder();
    let signature = sign(MESSAGE, keys.private());

    let recovered = keys.public().recover_raw(signature.as_biguint());
    assert_eq!(recovered, digest_to_integer(HashAlgorithm::Sha512, MESSAGE));
}

#[test]
fn test_signature_survives_hex_transport() {
    let keys = TextbookKeyPair::placeholder();
    let signature = sign(MESSAGE, keys.private());

    let transported = TextbookSignature::from_hex(&signature.to_string()).unwrap();
    assert!(verify(MESSAGE, &transported, keys.public()));
}

#[test]
fn test_concurrent_use_from_threads() {
    let keys = TextbookKeyPair::placeholder();
    let expected = sign(MESSAGE, keys.private());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| sign(MESSAGE, keys.private())))
            .collect();
        for handle in handles {
            let signature = handle.join().unwrap();
            assert_eq!(signature, expected);
            assert!(verify(MESSAGE, &signature, keys.public()));
        }
    });
}
